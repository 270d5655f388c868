use std::sync::OnceLock;

use regex::Regex;

use super::{HighlightError, Highlighter, PLAINTEXT};

/// Token classes in match priority order, named after highlight.js classes.
const CLASSES: [&str; 4] = ["comment", "string", "number", "keyword"];

const DOUBLE_QUOTED: &str = r#""(?:[^"\\\n]|\\.)*""#;
const SINGLE_QUOTED: &str = r"'(?:[^'\\\n]|\\.)*'";
const TEMPLATE: &str = r"`(?:[^`\\]|\\.)*`";

struct LanguageDef {
    names: &'static [&'static str],
    line_comment: &'static str,
    strings: &'static [&'static str],
    keywords: &'static [&'static str],
}

const LANGUAGES: &[LanguageDef] = &[
    LanguageDef {
        names: &["rust", "rs"],
        line_comment: "//",
        strings: &[DOUBLE_QUOTED],
        keywords: &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
            "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
            "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
            "trait", "true", "type", "unsafe", "use", "where", "while",
        ],
    },
    LanguageDef {
        names: &["python", "py"],
        line_comment: "#",
        strings: &[DOUBLE_QUOTED, SINGLE_QUOTED],
        keywords: &[
            "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
            "elif", "else", "except", "False", "finally", "for", "from", "global", "if", "import",
            "in", "is", "lambda", "None", "nonlocal", "not", "or", "pass", "raise", "return",
            "True", "try", "while", "with", "yield",
        ],
    },
    LanguageDef {
        names: &["javascript", "js", "typescript", "ts"],
        line_comment: "//",
        strings: &[DOUBLE_QUOTED, SINGLE_QUOTED, TEMPLATE],
        keywords: &[
            "as", "async", "await", "break", "case", "catch", "class", "const", "continue",
            "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally",
            "for", "function", "if", "implements", "import", "in", "instanceof", "interface",
            "let", "new", "null", "private", "public", "readonly", "return", "super", "switch",
            "this", "throw", "true", "try", "type", "typeof", "undefined", "var", "void",
            "while", "yield",
        ],
    },
    LanguageDef {
        names: &["bash", "sh", "shell", "zsh"],
        line_comment: "#",
        strings: &[DOUBLE_QUOTED, SINGLE_QUOTED],
        keywords: &[
            "case", "do", "done", "echo", "elif", "else", "esac", "export", "fi", "for",
            "function", "if", "in", "local", "return", "then", "while",
        ],
    },
];

struct Grammar {
    names: &'static [&'static str],
    regex: Regex,
}

impl Grammar {
    fn build(def: &LanguageDef) -> Self {
        let pattern = format!(
            r"(?P<comment>{}[^\n]*)|(?P<string>{})|(?P<number>\b\d[\d_]*(?:\.\d+)?\b)|(?P<keyword>\b(?:{})\b)",
            regex::escape(def.line_comment),
            def.strings.join("|"),
            def.keywords.join("|"),
        );
        Self {
            names: def.names,
            regex: Regex::new(&pattern).expect("Invalid highlighter grammar"),
        }
    }
}

fn grammars() -> &'static [Grammar] {
    static GRAMMARS: OnceLock<Vec<Grammar>> = OnceLock::new();
    GRAMMARS.get_or_init(|| LANGUAGES.iter().map(Grammar::build).collect())
}

/// Regex-based highlighter emitting highlight.js-compatible markup.
///
/// Recognizes comments, string literals, numbers and keywords for rust,
/// python, javascript/typescript and shell; `plaintext` is escaped only.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordHighlighter;

impl KeywordHighlighter {
    pub fn new() -> Self {
        Self
    }

    fn grammar(language: &str) -> Option<&'static Grammar> {
        grammars().iter().find(|g| g.names.contains(&language))
    }
}

impl Highlighter for KeywordHighlighter {
    fn supports(&self, language: &str) -> bool {
        language == PLAINTEXT || Self::grammar(language).is_some()
    }

    fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        if language == PLAINTEXT {
            return Ok(html_escape::encode_text(code).into_owned());
        }
        let grammar = Self::grammar(language)
            .ok_or_else(|| HighlightError::UnsupportedLanguage(language.to_string()))?;

        let mut out = String::with_capacity(code.len() * 2);
        let mut last = 0;
        for caps in grammar.regex.captures_iter(code) {
            let Some((class, m)) = CLASSES
                .iter()
                .find_map(|class| caps.name(class).map(|m| (*class, m)))
            else {
                continue;
            };
            out.push_str(&html_escape::encode_text(&code[last..m.start()]));
            out.push_str("<span class=\"hljs-");
            out.push_str(class);
            out.push_str("\">");
            out.push_str(&html_escape::encode_text(m.as_str()));
            out.push_str("</span>");
            last = m.end();
        }
        out.push_str(&html_escape::encode_text(&code[last..]));
        Ok(out)
    }
}
