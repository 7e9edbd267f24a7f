/// Plain-text table with a title row, column headers and data rows
pub struct TextTable<'a> {
    headers: &'a [&'a str],
    rows: Vec<Vec<String>>,
}

impl<'a> TextTable<'a> {
    pub fn new(headers: &'a [&'a str]) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row; missing trailing cells render empty, extra cells are dropped
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(Into::into)
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let col_widths = self.column_widths();
        let mut output = String::new();

        output.push_str(&Self::format_separator(&col_widths, '+'));
        output.push_str(&Self::format_row(self.headers.iter().copied(), &col_widths));
        output.push_str(&Self::format_separator(&col_widths, '|'));

        for row in &self.rows {
            output.push_str(&Self::format_row(row.iter().map(String::as_str), &col_widths));
        }

        output.push_str(&Self::format_separator(&col_widths, '+'));
        output
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.chars().count());
            }
        }

        col_widths
    }

    fn format_row<'c>(cells: impl Iterator<Item = &'c str>, col_widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (cell, width) in cells.zip(col_widths) {
            line.push_str(&format!(" {:<width$} |", cell, width = *width));
        }
        line.push('\n');
        line
    }

    fn format_separator(col_widths: &[usize], edge: char) -> String {
        let mut separator = String::new();
        separator.push(edge);
        for &width in col_widths {
            separator.push_str(&"-".repeat(width + 2));
            separator.push('+');
        }
        // Closing edge matches the opening one
        separator.pop();
        separator.push(edge);
        separator.push('\n');
        separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        let mut table = TextTable::new(&["Code", "Name"]);
        table.push_row(["f", "Feature"]);
        table.push_row(["d", "Documentation"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "+------+---------------+");
        assert_eq!(lines[1], "| Code | Name          |");
        assert_eq!(lines[2], "|------+---------------|");
        assert_eq!(lines[3], "| f    | Feature       |");
        assert_eq!(lines[4], "| d    | Documentation |");
        assert_eq!(lines[5], "+------+---------------+");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = TextTable::new(&["A", "B"]);
        table.push_row(["only"]);

        let rendered = table.render();
        assert!(rendered.contains("| only |   |"));
    }

    #[test]
    fn test_all_lines_have_equal_width() {
        let mut table = TextTable::new(&["Risk Level", "Code"]);
        table.push_row(["Known safe", "."]);
        table.push_row(["(Probably) Broken", "@"]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
