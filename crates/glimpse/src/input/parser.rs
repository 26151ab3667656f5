//! CSV/TSV and JSON decoding into row sets.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use sha2::{Digest, Sha256};

use super::json::decode_json_rows;
use super::rows::RowSet;
use super::source::SourceMetadata;
use super::value::FieldValue;
use crate::error::{GlimpseError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Default upload ceiling (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Maximum input size in bytes (None = unlimited).
    pub max_bytes: Option<u64>,
    /// Quote character.
    pub quote: u8,
    /// Convert numeric-looking text to numbers and `true`/`false` to booleans.
    pub dynamic_typing: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            max_bytes: Some(DEFAULT_MAX_BYTES),
            quote: b'"',
            dynamic_typing: true,
        }
    }
}

/// Decodes tabular data files into [`RowSet`]s.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a file and return the row set and metadata.
    ///
    /// Files with a `.json` extension are decoded as an array of row objects;
    /// everything else is treated as delimited text.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(RowSet, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| GlimpseError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let size_bytes = file
            .metadata()
            .map_err(|e| GlimpseError::Io {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();
        self.check_size(size_bytes)?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| GlimpseError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let hash = content_hash(&contents);

        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let (rows, format) = if is_json {
            (self.parse_json(&contents)?, "json".to_string())
        } else {
            let delimiter = match self.config.delimiter {
                Some(d) => d,
                None => detect_delimiter(&contents)?,
            };
            let rows = self.parse_delimited(&contents, delimiter)?;
            (rows, format_name(delimiter).to_string())
        };

        debug!(
            "decoded {} as {}: {} rows, {} columns",
            path.display(),
            format,
            rows.row_count(),
            rows.column_count()
        );

        let source = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            rows.row_count(),
            rows.column_count(),
        );

        Ok((rows, source))
    }

    /// Parse delimited text held in memory, detecting the delimiter if unset.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<RowSet> {
        self.check_size(bytes.len() as u64)?;
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };
        self.parse_delimited(bytes, delimiter)
    }

    /// Parse a JSON array of row objects held in memory.
    pub fn parse_json(&self, bytes: &[u8]) -> Result<RowSet> {
        self.check_size(bytes.len() as u64)?;
        decode_json_rows(bytes, self.config.max_rows)
    }

    fn check_size(&self, size: u64) -> Result<()> {
        match self.config.max_bytes {
            Some(limit) if size > limit => {
                warn!("input of {} bytes exceeds the {} byte ceiling", size, limit);
                Err(GlimpseError::InputTooLarge { size, limit })
            }
            _ => Ok(()),
        }
    }

    /// Parse delimited bytes with a known delimiter.
    fn parse_delimited(&self, bytes: &[u8], delimiter: u8) -> Result<RowSet> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    warn!("row ceiling of {} reached, remaining rows ignored", max);
                    break;
                }
            }
            records.push(result?);
        }

        let headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            match records.first() {
                Some(record) => (0..record.len())
                    .map(|i| format!("column_{}", i + 1))
                    .collect(),
                None => return Err(GlimpseError::EmptyData("No data rows found".to_string())),
            }
        };

        if headers.is_empty() {
            return Err(GlimpseError::EmptyData("No columns found".to_string()));
        }

        let headers = dedupe_headers(headers);
        let expected_cols = headers.len();

        let rows = records
            .iter()
            .map(|record| {
                let mut row: Vec<FieldValue> = record
                    .iter()
                    .take(expected_cols)
                    .map(|s| self.resolve(s))
                    .collect();
                // Short rows are padded so every row has every column.
                row.resize(expected_cols, FieldValue::Missing);
                row
            })
            .collect();

        RowSet::new(headers, rows)
    }

    fn resolve(&self, raw: &str) -> FieldValue {
        if self.config.dynamic_typing {
            FieldValue::infer(raw)
        } else {
            FieldValue::from_text(raw)
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash contents as `sha256:<hex>`.
pub(crate) fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}

fn format_name(delimiter: u8) -> &'static str {
    match delimiter {
        b'\t' => "tsv",
        b',' => "csv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}

/// Parse a user-supplied delimiter such as `,`, `tab` or `\t`.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        "comma" => Ok(b','),
        "semicolon" => Ok(b';'),
        "pipe" => Ok(b'|'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        s => Err(GlimpseError::InvalidDelimiter(s.to_string())),
    }
}

/// Rename repeated header names to `name_1`, `name_2`, ...
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        let mut candidate = header.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}_{}", header, suffix);
            suffix += 1;
        }
        seen.push(candidate);
    }
    seen
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(GlimpseError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tabs break ties.
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    debug!("detected delimiter {:?}", best_delimiter as char);
    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
