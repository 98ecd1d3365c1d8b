// src/table.rs
/// In-memory result of one run: a fixed header plus job records in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn width(&self) -> usize { self.headers.len() }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Append at the next position. Returns the row's index.
    pub fn push_row(&mut self, row: Vec<String>) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_row_returns_sequential_index() {
        let mut t = ResultTable::new(vec![s!("A"), s!("B")]);
        assert!(t.is_empty());
        assert_eq!(t.push_row(vec![s!("1"), s!("2")]), 0);
        assert_eq!(t.push_row(vec![s!("3"), s!("4")]), 1);
        assert_eq!(t.len(), 2);
        assert_eq!(t.width(), 2);
    }
}
