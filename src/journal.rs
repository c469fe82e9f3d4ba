//! Journal reading: decode the game's JSONL journal files into events.
//!
//! The game writes one file per session into its journal directory:
//!
//! ```text
//! <dir>/
//!   Journal.2024-03-01T100000.01.log   # one JSON object per line
//!   Journal.2024-03-02T183012.01.log
//!   Status.json                        # not a journal, ignored
//! ```
//!
//! File names sort chronologically, so name order is event order.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

// Trait must be in scope for `.lines()` on `BufReader`.
use io::BufRead;

use jiff::Timestamp;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::model::JournalEvent;

/// Errors that can occur while reading journals.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{}:{line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        source: LineError,
    },
}

/// Why a single line could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] jiff::Error),
}

pub type Result<T> = core::result::Result<T, JournalError>;

/// One decoded journal line.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalRecord {
    pub timestamp: Timestamp,

    /// The raw `event` discriminant, kept for kinds that decode to `Other`.
    pub kind: String,

    pub event: JournalEvent,
}

/// Decode a single journal line.
pub fn parse_line(line: &str) -> core::result::Result<JournalRecord, LineError> {
    let value: serde_json::Value = serde_json::from_str(line)?;

    let kind = value
        .get("event")
        .and_then(serde_json::Value::as_str)
        .ok_or(LineError::MissingField("event"))?
        .to_string();
    let timestamp = value
        .get("timestamp")
        .and_then(serde_json::Value::as_str)
        .ok_or(LineError::MissingField("timestamp"))?
        .parse::<Timestamp>()?;
    let event = JournalEvent::deserialize(&value)?;

    Ok(JournalRecord {
        timestamp,
        kind,
        event,
    })
}

/// Read every record in a journal file, in file order.
///
/// Blank lines are skipped. A line that fails to decode is an error when
/// `strict` is set, and is skipped with a warning otherwise.
pub fn read_file(path: &Path, strict: bool) -> Result<Vec<JournalRecord>> {
    let file = fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(record) => records.push(record),
            Err(source) if strict => {
                return Err(JournalError::Parse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    source,
                });
            }
            Err(e) => {
                warn!(path = %path.display(), line = index + 1, error = %e, "skipping journal line");
            }
        }
    }
    debug!(path = %path.display(), records = records.len(), "journal read");
    Ok(records)
}

/// Read several journal files, concatenated in the order given.
pub fn read_all(paths: &[PathBuf], strict: bool) -> Result<Vec<JournalRecord>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(read_file(path, strict)?);
    }
    Ok(records)
}

/// List the journal files in a directory, oldest first.
///
/// Only `Journal*.log` files are returned; the game's other files
/// (`Status.json`, `Market.json`, ...) are ignored.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_journal = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("Journal") && n.ends_with(".log"));
        if is_journal {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    const SESSION: &str = r#"{"timestamp":"2024-03-01T10:00:00Z","event":"Fileheader","part":1}
{"timestamp":"2024-03-01T10:00:01Z","event":"LoadGame","Ship":"SideWinder","Ship_Localised":"Sidewinder","ShipID":1,"GameMode":"Open"}

{"timestamp":"2024-03-01T10:00:02Z","event":"Location","Docked":true,"StarSystem":"Sol","StationName":"Galileo","StationType":"Ocellus","MarketID":128016640}
"#;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_line_with_kind_and_timestamp() {
        let record =
            parse_line(r#"{"timestamp":"2024-03-01T10:00:00Z","event":"Undocked"}"#).unwrap();
        assert_eq!(record.kind, "Undocked");
        assert_eq!(record.event, JournalEvent::Undocked);
        assert_eq!(
            record.timestamp,
            "2024-03-01T10:00:00Z".parse::<Timestamp>().unwrap()
        );
    }

    #[test]
    fn keeps_kind_of_unrelated_events() {
        let record =
            parse_line(r#"{"timestamp":"2024-03-01T10:00:00Z","event":"Scan","BodyName":"X"}"#)
                .unwrap();
        assert_eq!(record.kind, "Scan");
        assert_eq!(record.event, JournalEvent::Other);
    }

    #[test]
    fn rejects_line_without_event() {
        let err = parse_line(r#"{"timestamp":"2024-03-01T10:00:00Z"}"#).unwrap_err();
        assert!(matches!(err, LineError::MissingField("event")));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let err = parse_line(r#"{"timestamp":"yesterday","event":"Died"}"#).unwrap_err();
        assert!(matches!(err, LineError::Timestamp(_)));
    }

    #[test]
    fn reads_file_skipping_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "Journal.2024-03-01T100000.01.log", SESSION);

        let records = read_file(&path, true).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].event, JournalEvent::Other);
        assert!(matches!(records[1].event, JournalEvent::LoadGame(_)));
        assert!(matches!(records[2].event, JournalEvent::Location(_)));
    }

    #[test]
    fn strict_read_reports_line_number() {
        let dir = TempDir::new().unwrap();
        let contents = format!("{SESSION}{{not json\n");
        let path = write(&dir, "Journal.bad.log", &contents);

        let err = read_file(&path, true).unwrap_err();
        match err {
            JournalError::Parse { line, .. } => assert_eq!(line, 5),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn lenient_read_skips_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let contents = format!("{{not json\n{SESSION}");
        let path = write(&dir, "Journal.bad.log", &contents);

        let records = read_file(&path, false).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn discovers_journals_in_name_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Journal.2024-03-02T183012.01.log", "");
        write(&dir, "Journal.2024-03-01T100000.01.log", "");
        write(&dir, "Status.json", "{}");
        write(&dir, "Journal.notes.txt", "");

        let names: Vec<String> = discover(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            [
                "Journal.2024-03-01T100000.01.log",
                "Journal.2024-03-02T183012.01.log"
            ]
        );
    }

    #[test]
    fn read_all_concatenates_in_order() {
        let dir = TempDir::new().unwrap();
        let first = write(
            &dir,
            "a.log",
            "{\"timestamp\":\"2024-03-01T10:00:00Z\",\"event\":\"Docked\",\"StationName\":\"A\"}\n",
        );
        let second = write(
            &dir,
            "b.log",
            "{\"timestamp\":\"2024-03-01T11:00:00Z\",\"event\":\"Undocked\"}\n",
        );

        let records = read_all(&[first, second], true).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, "Docked");
        assert_eq!(records[1].kind, "Undocked");
    }
}
