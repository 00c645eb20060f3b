//! Aligned pipe-delimited table rendering

/// Render a row/column matrix into an aligned markdown table. The first
/// row is the header. An empty matrix renders to an empty string.
///
/// Embedded newlines in cells are replaced with `<br>` before width
/// computation so multi-line content stays on a single visual table row.
pub fn render(matrix: &[Vec<String>]) -> String {
    if matrix.is_empty() {
        return String::new();
    }
    let matrix: Vec<Vec<String>> = matrix
        .iter()
        .map(|row| row.iter().map(|cell| cell.replace('\n', "<br>")).collect())
        .collect();
    let widths = column_widths(&matrix);
    let mut out = String::new();
    attach_header(&mut out, &matrix[0], &widths);
    attach_body(&mut out, &matrix[1..], &widths);
    out
}

fn attach_header(out: &mut String, header: &[String], widths: &[usize]) {
    for (i, cell) in header.iter().enumerate() {
        out.push_str("| ");
        out.push_str(cell);
        out.push_str(&" ".repeat(widths[i] - width_of(cell) + 1));
    }
    out.push_str("|\n");
    for width in &widths[..header.len()] {
        out.push('|');
        out.push_str(&"-".repeat(width + 2));
    }
    out.push_str("|\n");
}

fn attach_body(out: &mut String, rows: &[Vec<String>], widths: &[usize]) {
    for row in rows {
        out.push('|');
        for (i, cell) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(widths[i] - width_of(cell)));
            out.push_str(" |");
        }
        out.push('\n');
    }
}

/// Per-column maximum cell width, header included.
fn column_widths(matrix: &[Vec<String>]) -> Vec<usize> {
    let mut widths = vec![0; matrix[0].len()];
    for row in matrix {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(width_of(cell));
            }
        }
    }
    widths
}

fn width_of(cell: &str) -> usize {
    cell.chars().count()
}
