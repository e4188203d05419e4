use crate::cli::output::current_preferences;

const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
            alignment,
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Computes the content widths for each column based on headers, rows, and
    /// column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell_text, widths[idx], column.alignment, self.padding)
            })
            .collect();

        rendered_cells.join(" ").trim_end().to_string()
    }

    /// Renders the header, a rule and every row.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![
            self.render_row(&header, &widths),
            horizontal_rule(&widths, self.padding),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

/// Terminal width in columns, or 80 when it cannot be queried.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .ok()
        .filter(|cols| *cols > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

fn visible_width(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut width = 0;

    while idx < bytes.len() {
        if bytes[idx] == 0x1b {
            idx += 1;
            if idx < bytes.len() && bytes[idx] == b'[' {
                idx += 1;
                while idx < bytes.len() {
                    let byte = bytes[idx];
                    idx += 1;
                    if (0x40..=0x7E).contains(&byte) {
                        break;
                    }
                }
                continue;
            }
        }

        if let Some(ch) = text[idx..].chars().next() {
            width += 1;
            idx += ch.len_utf8();
        } else {
            break;
        }
    }

    width
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{}{}{pad}", fitted, " ".repeat(remaining)),
        Alignment::Right => format!("{pad}{}{}{pad}", " ".repeat(remaining), fitted),
    }
}

fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total_width: usize =
        widths.iter().map(|w| w + (padding * 2)).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(total_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec![
            TableColumn::new("ID", Alignment::Right),
            TableColumn::new("Budget", Alignment::Left).max_width(6),
        ]);
        table.push_row(vec!["1".into(), "Groceries".into()]);
        table.push_row(vec!["12".into(), "Rent".into()]);
        table
    }

    #[test]
    fn widths_respect_headers_and_caps() {
        assert_eq!(sample().compute_widths(), vec![2, 6]);
    }

    #[test]
    fn rows_are_aligned_and_truncated() {
        let table = sample();
        let widths = table.compute_widths();
        assert_eq!(
            table.render_row(&["1".into(), "Groceries".into()], &widths),
            "  1   Groce…"
        );
        assert_eq!(
            table.render_row(&["12".into(), "Rent".into()], &widths),
            " 12   Rent"
        );
    }

    #[test]
    fn visible_width_ignores_ansi_sequences() {
        assert_eq!(visible_width("\u{1b}[31mOver\u{1b}[0m"), 4);
        assert_eq!(visible_width("₹1,000"), 6);
    }
}
