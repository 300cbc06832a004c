#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Render an aligned text table. Widths count characters, so labels such as
/// `≥ 25 N/mm²` line up with plain ASCII cells.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            let padding = width.saturating_sub(display_width(&text));
            pad(&text, padding, false)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let padding = width.saturating_sub(display_width(&truncated));
                let rendered = if options.color {
                    colorize_verdict(&truncated)
                } else {
                    truncated
                };
                pad(&rendered, padding, numeric)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| {
                **width > display_width(headers[*idx]).max(MIN_COLUMN_WIDTH)
            })
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E'))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, padding: usize, numeric: bool) -> String {
    let spaces = " ".repeat(padding);
    if numeric {
        format!("{spaces}{value}")
    } else {
        format!("{value}{spaces}")
    }
}

/// Color booleans, out-of-range sentinels, and verdict messages.
fn colorize_verdict(cell: &str) -> String {
    let code = if cell == "true" || cell.starts_with("Konform") {
        Some("32")
    } else if cell.starts_with("unter ") || cell.starts_with("über ") {
        Some("33")
    } else if cell == "false"
        || cell.starts_with("Nicht konform")
        || cell.starts_with("Unbekannt")
    {
        Some("31")
    } else {
        None
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{cell}\u{1b}[0m"),
        None => cell.to_string(),
    }
}

#[cfg(test)]
fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_table, strip_ansi, truncate_text};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_with_multibyte_cells() {
        let rows = vec![
            vec!["C25".to_string(), "≥ 25 N/mm²".to_string()],
            vec!["F4".to_string(), "≥ 4 N/mm²".to_string()],
        ];
        let table = render_table(&["class", "requirement"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let offset = |line: &str| line.chars().position(|c| c == '≥');
        assert_eq!(offset(lines[2]), offset(lines[3]));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["5".to_string()], vec!["24.0".to_string()]];
        let table = render_table(&["value"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "     5");
        assert_eq!(lines[3], "  24.0");
    }

    #[test]
    fn wide_columns_shrink_to_terminal_width() {
        let rows = vec![vec![
            "message".to_string(),
            "Nicht konform: 3 < 4 (F4) und noch ein sehr langer Zusatz".to_string(),
        ]];
        let table = render_table(
            &["key", "value"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn color_marks_verdicts_without_shifting_columns() {
        let rows = vec![
            vec!["passed".to_string(), "true".to_string()],
            vec!["class".to_string(), "unter Klasse".to_string()],
        ];
        let colored = render_table(
            &["key", "value"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(colored.contains("\u{1b}[32m"));
        assert!(colored.contains("\u{1b}[33m"));
        assert_eq!(strip_ansi(&colored), render_table(&["key", "value"], &rows, PLAIN));
    }

    #[test]
    fn truncation_keeps_char_boundaries() {
        assert_eq!(truncate_text("Verschleiß", 6), "Versc…");
        assert_eq!(truncate_text("über A22", 1), "…");
        assert_eq!(truncate_text("AR1", 6), "AR1");
    }
}
