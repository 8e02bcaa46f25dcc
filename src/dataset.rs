//! In-memory table produced by the loader.

/// Tokens treated as a missing value, in addition to the empty cell.
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Numeric,
    Text,
}

/// A header plus ordered rows of optional cell text.
///
/// Every row has exactly `headers.len()` cells; `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    /// Builds a dataset from a header and raw cell text.
    ///
    /// Short rows are padded with missing cells. Missing values are detected
    /// with [`parse_cell`].
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<Option<String>> = row.iter().map(|c| parse_cell(c)).collect();
                cells.resize(width, None);
                cells
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterates the cells of column `idx` in row order.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows.iter().map(move |row| row[idx].as_deref())
    }

    /// `Numeric` when every non-missing cell parses as `f64`.
    pub fn column_type(&self, idx: usize) -> ColumnType {
        if self.column(idx).flatten().all(|v| parse_number(v).is_some()) {
            ColumnType::Numeric
        } else {
            ColumnType::Text
        }
    }

    /// Parses column `idx` as numbers, keeping missing cells as `None`.
    ///
    /// On failure returns the 1-based data row and the cell text.
    pub fn numeric_column(&self, idx: usize) -> Result<Vec<Option<f64>>, (usize, String)> {
        self.column(idx)
            .enumerate()
            .map(|(i, cell)| match cell {
                None => Ok(None),
                Some(text) => parse_number(text)
                    .map(Some)
                    .ok_or_else(|| (i + 1, text.to_string())),
            })
            .collect()
    }
}

/// Parses a finite number, ignoring surrounding whitespace; `inf` and
/// friends count as text.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Maps blank cells and NA tokens to `None`; other cells keep their text
/// as-is, whitespace included.
pub fn parse_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NA_TOKENS.contains(&trimmed) {
        None
    } else {
        Some(raw.to_string())
    }
}
