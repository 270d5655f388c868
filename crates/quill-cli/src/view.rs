//! Terminal rendition of a [`RenderTree`].

use std::sync::OnceLock;
use std::time::Instant;

use quill_engine::{
    CodeBlockNode, CodeMarkup, CopyFeedback, HandleId, InlineSpan, RenderNode, RenderTree,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

/// Preview lines plus the row each code block's header sits on.
pub struct Preview {
    pub lines: Vec<Line<'static>>,
    pub code_rows: Vec<(HandleId, usize)>,
}

pub fn preview(
    tree: &RenderTree,
    feedback: &CopyFeedback,
    selected: Option<HandleId>,
    now: Instant,
) -> Preview {
    let mut lines = Vec::new();
    let mut code_rows = Vec::new();
    let mut ordinal = 0usize;

    for node in &tree.nodes {
        match node {
            RenderNode::ListItem { ordered: true, .. } => ordinal += 1,
            _ => ordinal = 0,
        }
        match node {
            RenderNode::Heading { level, size, inline } => {
                let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
                if *size >= 5 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                let mut spans = vec![Span::styled(
                    format!("{} ", "#".repeat(usize::from(*level))),
                    Style::default().fg(Color::DarkGray),
                )];
                spans.extend(inline_spans(inline, style));
                lines.push(Line::from(spans));
                lines.push(Line::default());
            }
            RenderNode::Paragraph { inline } => {
                lines.push(Line::from(inline_spans(inline, Style::default())));
            }
            RenderNode::ListItem {
                indent_units,
                ordered,
                checkbox,
                inline,
            } => {
                let marker = match (checkbox, ordered) {
                    (Some(true), _) => "[x] ".to_string(),
                    (Some(false), _) => "[ ] ".to_string(),
                    (None, true) => format!("{ordinal}. "),
                    (None, false) => "• ".to_string(),
                };
                let text_style = if *checkbox == Some(true) {
                    Style::default().add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                let mut spans = vec![
                    Span::raw("  ".repeat(*indent_units)),
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                ];
                spans.extend(inline_spans(inline, text_style));
                lines.push(Line::from(spans));
            }
            RenderNode::CodeBlock(block) => {
                code_rows.push((block.handle, lines.len()));
                let is_selected = selected == Some(block.handle);
                lines.extend(code_block_lines(
                    block,
                    feedback.label(block.handle, now).as_str(),
                    is_selected,
                ));
            }
            RenderNode::Literal { text } => {
                lines.extend(text.lines().map(|l| Line::raw(l.to_string())));
            }
        }
    }

    Preview { lines, code_rows }
}

fn inline_spans(inline: &[InlineSpan], base: Style) -> Vec<Span<'static>> {
    inline
        .iter()
        .map(|span| {
            let style = match span {
                InlineSpan::Text(_) => base,
                InlineSpan::Bold(_) => base.add_modifier(Modifier::BOLD),
                InlineSpan::Italic(_) => base.add_modifier(Modifier::ITALIC),
                InlineSpan::InlineCode(_) => base.fg(Color::Yellow).bg(Color::Black),
            };
            Span::styled(span.text().to_string(), style)
        })
        .collect()
}

fn code_block_lines(block: &CodeBlockNode, label: &str, selected: bool) -> Vec<Line<'static>> {
    let frame = Style::default().fg(Color::DarkGray);
    let button = if selected {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut out = vec![Line::from(vec![
        Span::styled(format!("┌─ {} ", block.language), frame),
        Span::styled(format!("[{label}]"), button),
    ])];

    let body = match &block.markup {
        CodeMarkup::Plain(code) => code
            .split('\n')
            .map(|l| Line::styled(l.to_string(), Style::default().fg(Color::White)))
            .collect(),
        CodeMarkup::Highlighted(markup) => markup_lines(markup),
    };
    out.extend(body.into_iter().map(|line| {
        let mut spans = vec![Span::styled("│ ", frame)];
        spans.extend(line.spans);
        Line::from(spans)
    }));
    out.push(Line::styled("└─", frame));
    out.push(Line::default());
    out
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r#"(?s)<span class="hljs-([a-z]+)">(.*?)</span>"#).expect("Invalid token regex")
    })
}

fn token_style(class: &str) -> Style {
    match class {
        "comment" => Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        "string" => Style::default().fg(Color::Green),
        "number" => Style::default().fg(Color::Magenta),
        "keyword" => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::White),
    }
}

/// Turns highlight.js-style markup back into styled terminal lines.
fn markup_lines(markup: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Vec<Span<'static>>> = vec![Vec::new()];
    let mut last = 0;
    for caps in token_regex().captures_iter(markup) {
        let (Some(whole), Some(class), Some(body)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        push_text(&mut lines, &markup[last..whole.start()], token_style(""));
        push_text(&mut lines, body.as_str(), token_style(class.as_str()));
        last = whole.end();
    }
    push_text(&mut lines, &markup[last..], token_style(""));
    lines.into_iter().map(Line::from).collect()
}

fn push_text(lines: &mut Vec<Vec<Span<'static>>>, escaped: &str, style: Style) {
    let text = html_escape::decode_html_entities(escaped);
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(Vec::new());
        }
        if !part.is_empty()
            && let Some(line) = lines.last_mut()
        {
            line.push(Span::styled(part.to_string(), style));
        }
    }
}
