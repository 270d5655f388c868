//! Fixture and invariant tests for the parsing module.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::BlockKind,
    inline::InlineSpan,
    parse_document,
    snapshot::{invariants, normalize},
};

// Fixture-based snapshot tests

#[test]
fn fixture_headings_and_lists() {
    assert_fixture("headings_and_lists");
}

#[test]
fn fixture_code_fences() {
    assert_fixture("code_fences");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(&md);
    invariants(&md, &doc);

    let snap = normalize(&md, &doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

// Invariant tests

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n  \n")]
#[case("plain")]
#[case("\n\n# Late heading")]
#[case("# a\n\n\n\nb\n\n")]
#[case("```\nunterminated\n\n\n")]
#[case("```rust\r\nfn main() {}\r\n```\r\n")]
#[case("- [x] a\n  - [ ] b\n\t- c\n10. d")]
#[case("**unclosed *stars* `ticks\n```")]
#[case("é # ü\n  \n```ж\nю\n```")]
fn spans_tile_the_input(#[case] md: &str) {
    let doc = parse_document(md);
    invariants(md, &doc);
}

/// Tokens that exercise every opener, closer and line ending the parser knows.
const ALPHABET: [&str; 13] = [
    "#", " ", "\n", "\r\n", "```", "*", "-", "[x]", "\t", "é", "`", "1.", "a",
];

/// Every string of up to `max_len` alphabet tokens, shortest first.
fn all_token_strings(max_len: usize) -> impl Iterator<Item = String> {
    (0..=max_len).flat_map(|len| {
        let total = ALPHABET.len().pow(len as u32);
        (0..total).map(move |mut n| {
            let mut s = String::new();
            for _ in 0..len {
                s.push_str(ALPHABET[n % ALPHABET.len()]);
                n /= ALPHABET.len();
            }
            s
        })
    })
}

#[test]
fn coverage_holds_for_every_short_token_string() {
    let highlighter = crate::highlight::KeywordHighlighter::new();
    let options = crate::render::RenderOptions::default();
    let mut checked = 0usize;

    for md in all_token_strings(4) {
        let doc = parse_document(&md);
        invariants(&md, &doc);

        let tree = crate::render::render(doc, &highlighter, &options);
        let mut handles: Vec<_> = tree.code_blocks().map(|b| b.handle).collect();
        let count = handles.len();
        handles.sort_by_key(|h| h.get());
        handles.dedup();
        assert_eq!(handles.len(), count, "duplicate handles for {md:?}");
        assert_eq!(tree.handles.len(), count, "{md:?}");
        checked += 1;
    }

    assert_eq!(checked, (0..=4).map(|k| ALPHABET.len().pow(k)).sum::<usize>());
}

#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
}

#[test]
fn blank_lines_do_not_produce_blocks() {
    let doc = parse_document("one\n\n\n\ntwo\n");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.blocks[0].span.end, doc.blocks[1].span.start);
}

#[test]
fn blank_only_document_is_one_literal() {
    let doc = parse_document("\n  \n");
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::Literal {
            text: "\n  \n".into()
        }
    );
}

#[test]
fn leading_blank_lines_join_first_block() {
    let doc = parse_document("\n\n# Title");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.blocks[0].span.start, 0);
    assert!(matches!(doc.blocks[0].kind, BlockKind::Heading { level: 1, .. }));
}

#[test]
fn heading_exactness() {
    let doc = parse_document("# Title");
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::Heading {
            level: 1,
            inline: vec![InlineSpan::Text("Title".into())],
        }
    );
}

#[test]
fn heading_with_empty_content() {
    let doc = parse_document("## ");
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::Heading {
            level: 2,
            inline: vec![],
        }
    );
}

#[test]
fn seven_hashes_is_a_paragraph() {
    let doc = parse_document("####### too deep");
    assert!(matches!(doc.blocks[0].kind, BlockKind::Paragraph { .. }));
}

#[test]
fn code_is_verbatim() {
    let doc = parse_document("```rust\nlet x = 1;\n```");
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::CodeBlock {
            language: Some("rust".into()),
            raw_code: "let x = 1;".into(),
        }
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    let doc = parse_document("```python\nprint(1)\n");
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::CodeBlock {
            language: Some("python".into()),
            raw_code: "print(1)".into(),
        }
    );
}

#[test]
fn fence_content_keeps_markdown_raw() {
    let doc = parse_document("```\n# not a heading\n- not a list\n\n```\nafter");
    assert_eq!(doc.len(), 2);
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::CodeBlock {
            language: None,
            raw_code: "# not a heading\n- not a list\n".into(),
        }
    );
    assert!(matches!(doc.blocks[1].kind, BlockKind::Paragraph { .. }));
}

#[test]
fn tagged_fence_does_not_close_a_block() {
    let doc = parse_document("```\na\n```js\nb\n```");
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::CodeBlock {
            language: None,
            raw_code: "a\n```js\nb".into(),
        }
    );
}

#[test]
fn checkbox_fidelity() {
    let doc = parse_document("- [x] Buy milk\n- [ ] Buy eggs");
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::ListItem {
            indent_units: 0,
            ordered: false,
            checkbox: Some(true),
            inline: vec![InlineSpan::Text("Buy milk".into())],
        }
    );
    assert!(matches!(
        doc.blocks[1].kind,
        BlockKind::ListItem {
            checkbox: Some(false),
            ..
        }
    ));
}

#[test]
fn each_paragraph_line_is_its_own_block() {
    let doc = parse_document("first line\nsecond line");
    assert_eq!(doc.len(), 2);
    assert!(
        doc.iter()
            .all(|b| matches!(b.kind, BlockKind::Paragraph { .. }))
    );
}
