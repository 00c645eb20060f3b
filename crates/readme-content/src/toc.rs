//! Table-of-contents rendering

/// Render the heading outline of `lines` as an indented bullet list.
///
/// Headings shallower than `start_depth` are skipped; each deeper level
/// indents by `indent` spaces relative to `start_depth`.
pub fn render(lines: &[String], indent: usize, start_depth: usize) -> String {
    let mut out = String::new();
    for line in lines {
        let level = heading_level(line);
        if level >= start_depth && level > 0 {
            let spaces = (level - start_depth) * indent;
            let heading = line.trim_start_matches(['#', ' ']);
            out.push_str(&" ".repeat(spaces));
            out.push_str("- ");
            out.push_str(heading);
            out.push('\n');
        }
    }
    out.trim().to_string()
}

fn heading_level(line: &str) -> usize {
    line.chars().take_while(|&c| c == '#').count()
}
