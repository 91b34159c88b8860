use std::fmt;

/// Widest a cell gets before it's cut.
pub const MAX_COL_WIDTH: usize = 50;

const SEPARATOR: &str = "\t";
const ELLIPSIS: &str = "...";

/// A plain text table: left aligned columns padded to the widest cell.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows
            .push(cells.into_iter().map(|cell| truncate(&cell.to_string())).collect());
    }

    #[cfg(test)]
    pub(crate) fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(idx) {
                    Some(w) if *w < width => *w = width,
                    Some(_) => {}
                    None => widths.push(width),
                }
            }
        }
        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        for (row_idx, row) in self.rows.iter().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }

            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(SEPARATOR);
            write!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

/// Cut `cell` to [`MAX_COL_WIDTH`] characters, the last three being `...`.
fn truncate(cell: &str) -> String {
    if cell.chars().count() <= MAX_COL_WIDTH {
        return cell.to_string();
    }

    let kept: String = cell
        .chars()
        .take(MAX_COL_WIDTH - ELLIPSIS.len())
        .collect();
    kept + ELLIPSIS
}
