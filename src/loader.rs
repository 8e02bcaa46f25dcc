//! CSV loader with encoding fallback.
//!
//! The file is read once and decoded with each candidate encoding in turn.
//! A decoding failure moves on to the next candidate; a structural CSV
//! failure aborts the whole load.

use std::borrow::Cow;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::{info, warn};

use crate::dataset::Dataset;
use crate::error::LoadError;

/// A text encoding the loader knows how to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252,
    Iso8859_1,
}

/// Encodings tried by [`load`], in order.
pub const CANDIDATE_ENCODINGS: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
    TextEncoding::Iso8859_1,
];

impl TextEncoding {
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "cp1252",
            TextEncoding::Iso8859_1 => "iso-8859-1",
        }
    }

    /// Decodes `bytes`, returning `None` if they are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => {
                let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
                (!had_errors).then(|| text.into_owned())
            }
            TextEncoding::Windows1252 => WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
            // ISO-8859-1 maps each byte to the code point of the same value
            TextEncoding::Latin1 | TextEncoding::Iso8859_1 => {
                Some(bytes.iter().map(|&b| char::from(b)).collect())
            }
        }
    }
}

/// Loads a CSV file into a [`Dataset`].
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read,
/// [`LoadError::Parse`] on malformed structure, and
/// [`LoadError::EncodingExhausted`] if no candidate encoding decodes it.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = load_bytes(path, &bytes)?;
    info!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "Dataset: {} rows × {} columns",
        dataset.row_count(),
        dataset.column_count()
    );
    Ok(dataset)
}

/// Runs the encoding fallback chain over raw file contents.
///
/// `path` is only used for error messages.
pub fn load_bytes(path: &Path, bytes: &[u8]) -> Result<Dataset, LoadError> {
    for encoding in CANDIDATE_ENCODINGS {
        let Some(text) = encoding.decode(bytes) else {
            warn!(encoding = encoding.label(), "Decoding failed, trying next encoding");
            continue;
        };

        return match parse_table(&text) {
            Ok(dataset) => {
                info!(encoding = encoding.label(), "Loaded file");
                Ok(dataset)
            }
            Err(reason) => Err(LoadError::Parse {
                path: path.to_path_buf(),
                reason,
            }),
        };
    }

    Err(LoadError::EncodingExhausted {
        path: path.to_path_buf(),
        tried: CANDIDATE_ENCODINGS
            .iter()
            .map(|e| e.label())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Parses comma-separated text with a header row.
///
/// Rows longer than the header are rejected; shorter rows are padded by
/// [`Dataset::new`].
fn parse_table(text: &str) -> Result<Dataset, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err("no columns to parse from file".to_string());
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        if record.len() > headers.len() {
            let line = record.position().map_or(0, |p| p.line());
            return Err(format!(
                "expected {} fields in line {}, saw {}",
                headers.len(),
                line,
                record.len()
            ));
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Dataset::new(headers, rows))
}
