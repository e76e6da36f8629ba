const MIN_WIDTH: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table; numeric cells are right-aligned and missing
/// cells show as `-`.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = column_widths(headers, rows);
    fit_widths(&mut widths, headers, options.max_width);

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    let header_line = format_row(&header_cells, &widths, false);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    lines.extend(rows.iter().map(|row| format_row(row, &widths, options.color)));
    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .fold(header.len().max(MIN_WIDTH), usize::max)
        })
        .collect()
}

fn format_row(cells: &[String], widths: &[usize], color: bool) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let text = truncate_text(cells.get(index).map_or("-", String::as_str), *width);
            let numeric = looks_numeric(&text);
            let text = if color { colorize(&text) } else { text };
            format_cell(&text, *width, numeric, color)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Shrink the widest shrinkable column one character at a time until the
/// row fits `max_width` or every column is at its minimum.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        strip_ansi(value).chars().count()
    } else {
        value.chars().count()
    };
    let pad = width.saturating_sub(plain_len);
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Color level and verdict cells: risky values red, safe values green.
fn colorize(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "low" | "sip" => Some("32"),
        "medium" => Some("33"),
        "high" | "spit" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

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
    use super::*;

    #[test]
    fn long_cells_are_truncated_to_fit() {
        let rows = vec![vec!["x".repeat(80), "1".to_string()]];
        let table = render_entity_table(
            &["description", "score"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 40, "{row}");
        assert!(row.contains('…'));
    }

    #[test]
    fn levels_are_colored_and_strip_cleanly() {
        let colored = colorize("High");
        assert!(colored.starts_with("\u{1b}[31m"));
        assert_eq!(strip_ansi(&colored), "High");
        assert_eq!(colorize("rsk-1"), "rsk-1");
    }

    #[test]
    fn numbers_are_right_aligned() {
        assert_eq!(format_cell("7", 4, true, false), "   7");
        assert_eq!(format_cell("low", 5, false, false), "low  ");
    }
}
