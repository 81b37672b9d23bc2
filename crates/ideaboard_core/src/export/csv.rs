//! CSV export of the idea collection.
//!
//! # Responsibility
//! - Serialize a snapshot into the board's fixed CSV layout.
//! - Write the export as `ideas.csv` into a target directory.
//!
//! # Invariants
//! - The header is always the first line; rows follow in snapshot order.
//! - `ID` and numeric columns are bare; text columns are always quoted,
//!   with embedded quotes doubled.
//! - The header is always followed by `\n`; rows are joined with `\n` and
//!   the last row has no line terminator.

use crate::model::idea::Idea;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File name used for downloads.
pub const EXPORT_FILE_NAME: &str = "ideas.csv";

/// MIME type announced to the UI shell's download mechanism.
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8";

pub const CSV_HEADER: &str = "ID,Title,Description,Impact,Effort,Votes,Tags";

const TAG_JOINER: &str = ", ";

#[derive(Debug)]
pub enum ExportError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write export `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Serializes all ideas into CSV text.
pub fn ideas_to_csv(ideas: &[Arc<Idea>]) -> String {
    let rows: Vec<String> = ideas.iter().map(|idea| csv_row(idea)).collect();
    format!("{CSV_HEADER}\n{}", rows.join("\n"))
}

/// One CSV row for `idea`, without line terminator.
pub fn csv_row(idea: &Idea) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        idea.id,
        quote(&idea.title),
        quote(&idea.description),
        idea.impact,
        idea.effort,
        idea.votes,
        quote(&idea.tags.join(TAG_JOINER)),
    )
}

/// Writes the export to `<dir>/ideas.csv`, creating `dir` when missing.
///
/// Returns the written file path.
pub fn write_csv_file(ideas: &[Arc<Idea>], dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(EXPORT_FILE_NAME);
    let result = std::fs::create_dir_all(dir)
        .and_then(|()| std::fs::write(&path, ideas_to_csv(ideas)));

    match result {
        Ok(()) => {
            info!(
                "event=export_csv module=export status=ok rows={} path={}",
                ideas.len(),
                path.display()
            );
            Ok(path)
        }
        Err(source) => {
            error!(
                "event=export_csv module=export status=error rows={} path={} error={}",
                ideas.len(),
                path.display(),
                source
            );
            Err(ExportError::Io { path, source })
        }
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
