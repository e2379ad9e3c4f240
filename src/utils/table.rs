//! Table rendering for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render with columns sized to the widest cell.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut out = String::new();
        render_row(&mut out, &self.headers, &widths);

        let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        out.push_str(&"-".repeat(rule));
        out.push('\n');

        for row in &self.rows {
            render_row(&mut out, row, &widths);
        }

        out
    }
}

fn render_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        let pad = widths[i] - UnicodeWidthStr::width(cell.as_str());
        out.push_str(cell);
        out.push_str(&" ".repeat(pad));
        if i + 1 < cells.len() {
            out.push_str("  ");
        }
    }
    // Trailing spaces would make assertions on the output brittle
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
