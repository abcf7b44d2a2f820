//! Headerless CSV table files
//!
//! Each table is read wholesale and rewritten wholesale. Writes go to a
//! sibling `.tmp` file which is renamed over the target, so a reader never
//! observes a half-written table.

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::{StoreError, StoreResult};

/// A value that maps to exactly one CSV row
pub trait CsvRow: Sized {
    /// Decode a row; the error message is reported with file and line
    fn from_record(record: &StringRecord) -> Result<Self, String>;

    /// Encode as row fields, in column order
    fn to_record(&self) -> Vec<String>;
}

/// Read every row of `path`. A missing file is an empty table.
pub fn load_rows<T: CsvRow>(path: &Path) -> StoreResult<Vec<T>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| StoreError::Csv {
            path: path.to_path_buf(),
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row = T::from_record(&record).map_err(|message| StoreError::Malformed {
            path: path.to_path_buf(),
            line,
            message,
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Replace `path` with the given rows (tmp file + rename)
pub fn save_rows<'a, T, I>(path: &Path, rows: I) -> StoreResult<()>
where
    T: CsvRow + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let tmp_path = tmp_path_for(path);

    if let Err(e) = write_rows(&tmp_path, path, rows) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }

    if let Err(source) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

fn write_rows<'a, T, I>(tmp_path: &Path, path: &Path, rows: I) -> StoreResult<()>
where
    T: CsvRow + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(tmp_path).map_err(write_err)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    for row in rows {
        writer
            .write_record(row.to_record())
            .map_err(|source| StoreError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| write_err(e.into_error()))?;
    file.sync_all().map_err(write_err)?;
    Ok(())
}

/// Raw bytes of a table file; a missing file exports as empty
pub fn read_raw(path: &Path) -> StoreResult<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ── Field codecs ────────────────────────────────────────────────────

/// `True` / `False`, the tokens the table files have always used
pub fn encode_bool(value: bool) -> String {
    let token = if value { "True" } else { "False" };
    token.to_string()
}

pub fn decode_bool(field: &str, column: &str) -> Result<bool, String> {
    match field.trim() {
        "True" | "true" => Ok(true),
        "False" | "false" => Ok(false),
        other => Err(format!("{column}: expected True or False, got {other:?}")),
    }
}

/// Shortest round-tripping form that always keeps a decimal point (`8.0`)
pub fn encode_amount(value: f64) -> String {
    format!("{value:?}")
}

/// Finite, non-negative amount
pub fn decode_amount(field: &str, column: &str) -> Result<f64, String> {
    let value: f64 = field
        .trim()
        .parse()
        .map_err(|_| format!("{column}: not a number: {field:?}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{column}: must be a non-negative number, got {field:?}"));
    }
    Ok(value)
}

pub fn expect_columns(record: &StringRecord, min: usize, max: usize) -> Result<(), String> {
    let n = record.len();
    if n < min || n > max {
        return Err(if min == max {
            format!("expected {min} columns, found {n}")
        } else {
            format!("expected {min} to {max} columns, found {n}")
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair(String, f64);

    impl CsvRow for Pair {
        fn from_record(record: &StringRecord) -> Result<Self, String> {
            expect_columns(record, 2, 2)?;
            Ok(Pair(record[0].to_string(), decode_amount(&record[1], "value")?))
        }

        fn to_record(&self) -> Vec<String> {
            vec![self.0.clone(), encode_amount(self.1)]
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let rows: Vec<Pair> = load_rows(&dir.path().join("absent.csv")).unwrap();
        assert!(rows.is_empty());
        assert!(read_raw(&dir.path().join("absent.csv")).unwrap().is_empty());
    }

    #[test]
    fn test_save_quotes_fields_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        let rows = vec![Pair("a, b".into(), 1.5), Pair("plain".into(), 8.0)];

        save_rows(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "\"a, b\",1.5\nplain,8.0\n");
        assert!(!dir.path().join("pairs.csv.tmp").exists());
        assert_eq!(load_rows::<Pair>(&path).unwrap(), rows);
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "ok,1.0\n\nbad,abc\n").unwrap();

        let err = load_rows::<Pair>(&path).unwrap_err();
        match err {
            StoreError::Malformed { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("not a number"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_field_row_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "ok,1.0\n,\n").unwrap();

        let err = load_rows::<Pair>(&path).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_bool_tokens() {
        assert_eq!(encode_bool(true), "True");
        assert_eq!(decode_bool("False", "x"), Ok(false));
        assert!(decode_bool("yes", "x").is_err());
    }

    #[test]
    fn test_amount_rejects_negative() {
        assert!(decode_amount("-1", "price").is_err());
        assert!(decode_amount("NaN", "price").is_err());
        assert_eq!(decode_amount(" 2.50 ", "price"), Ok(2.5));
    }
}
