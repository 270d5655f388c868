// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n  - Nested item\n- [ ] Open task\n- [x] Done task\n1. Ordered item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_code_heavy(blocks: usize) -> String {
    let mut content = String::new();
    for i in 0..blocks {
        content.push_str(&format!("## Snippet {i}\n\n"));
        let lang = ["rust", "python", "js", "bash", ""][i % 5];
        content.push_str(&format!(
            "```{lang}\n// snippet {i}\nlet value = {i};\nif value > 10 {{ return \"big\"; }}\n```\n\n"
        ));
    }
    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_markdown_content(500)
}
