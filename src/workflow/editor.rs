// nct: Editor session
//
// Materializes a name's value in a temp file, hands the file to the
// operator's editor on the controlling terminal and reads back the result.
// The temp file is owned by the session and removed when it is dropped,
// whichever way the workflow ends.

use std::io::{self, Write};
use std::path::Path;
use std::process::Stdio;

use tempfile::{Builder, NamedTempFile};

use crate::names::NameRecord;

use super::classify::Classified;

const DEFAULT_EDITOR: &str = "vi";

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Something that lets the operator change a file in place.
#[allow(async_fn_in_trait)]
pub trait Editor {
    /// Edit `path`, returning whether the editor exited successfully.
    async fn edit(&self, path: &Path) -> io::Result<bool>;
}

/// The operator's configured editor: `$VISUAL`, then `$EDITOR`, then `vi`.
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    program: String,
    args: Vec<String>,
}

impl ExternalEditor {
    pub fn from_env() -> Self {
        let command = std::env::var("VISUAL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        Self::from_command(&command)
    }

    /// Split a command line such as `code --wait` on whitespace. A command
    /// that names an existing file is taken whole, so editor paths with
    /// spaces work as long as they carry no arguments.
    pub fn from_command(command: &str) -> Self {
        let trimmed = command.trim();
        if trimmed.contains(char::is_whitespace) && Path::new(trimmed).is_file() {
            return Self {
                program: trimmed.to_string(),
                args: Vec::new(),
            };
        }

        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        Self {
            program,
            args: parts.collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Editor for ExternalEditor {
    async fn edit(&self, path: &Path) -> io::Result<bool> {
        tracing::debug!(editor = %self.program, path = %path.display(), "launching editor");
        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;
        tracing::debug!(%status, "editor exited");
        Ok(status.success())
    }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Result of one editor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    Edited(String),
    AbortedNonZeroExit,
}

pub struct EditSession {
    name: String,
    file: NamedTempFile,
    snapshot: String,
    structured: bool,
}

impl EditSession {
    /// Write the normalized value to a fresh temp file in the system temp dir.
    pub fn open(record: &NameRecord, classified: &Classified) -> io::Result<Self> {
        Self::open_in(&std::env::temp_dir(), record, classified)
    }

    pub fn open_in(dir: &Path, record: &NameRecord, classified: &Classified) -> io::Result<Self> {
        let prefix = format!("nct-{}-", file_component(&record.name));
        let suffix = if classified.is_structured { ".json" } else { "" };
        let mut file = Builder::new().prefix(&prefix).suffix(suffix).tempfile_in(dir)?;
        file.write_all(classified.normalized.as_bytes())?;
        file.flush()?;

        tracing::debug!(name = %record.name, path = %file.path().display(), "opened edit session");
        Ok(Self {
            name: record.name.clone(),
            file,
            snapshot: classified.normalized.clone(),
            structured: classified.is_structured,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn is_structured(&self) -> bool {
        self.structured
    }

    /// Switch the session to JSON validation for later rounds.
    pub fn mark_structured(&mut self) {
        self.structured = true;
    }

    /// Byte-identical comparison with the last snapshot.
    pub fn is_unchanged(&self, text: &str) -> bool {
        text == self.snapshot
    }

    /// Make `text` the reference for the next unchanged check.
    pub fn rebase(&mut self, text: String) {
        self.snapshot = text;
    }

    /// Run the editor once and read the file back if it exited cleanly.
    pub async fn run<E: Editor>(&self, editor: &E) -> io::Result<EditStep> {
        if !editor.edit(self.path()).await? {
            return Ok(EditStep::AbortedNonZeroExit);
        }
        // Editors may replace the file rather than rewrite it, so read by path.
        let text = std::fs::read_to_string(self.path())?;
        Ok(EditStep::Edited(text))
    }
}

/// Map a name to something safe inside a file name: ASCII alphanumerics,
/// `-`, `_` and `.` are kept, everything else (notably `/`) becomes `-`.
pub fn file_component(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

// ─── Scripted Mock for Testing ───────────────────────────────────────────────


// ─── Tests ───────────────────────────────────────────────────────────────────
