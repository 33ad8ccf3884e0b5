//! Capabilities the editor host hands to the tag actions.
//!
//! The actions never reach for global state: the host passes an [Editor] for
//! the current selection, a [Document] for the active note and a [Notifier]
//! for transient messages. File-backed and in-memory implementations live
//! here; the CLI brings its own notifier.

use std::path::{Path, PathBuf};

/// The active editor view: replaces the current selection in place.
pub trait Editor {
    fn replace_selection(&mut self, text: &str) -> Result<(), HostError>;
}

/// The active note's full text. `write` overwrites the whole document.
pub trait Document {
    fn read(&self) -> Result<String, HostError>;
    fn write(&mut self, text: &str) -> Result<(), HostError>;
}

/// Fire-and-forget user-facing messages.
pub trait Notifier {
    fn notice(&mut self, message: &str);
}

/// A note on disk, read and written whole.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Document for FileDocument {
    fn read(&self) -> Result<String, HostError> {
        std::fs::read_to_string(&self.path).map_err(|e| HostError::Read(self.path.clone(), e))
    }

    fn write(&mut self, text: &str) -> Result<(), HostError> {
        std::fs::write(&self.path, text).map_err(|e| HostError::Write(self.path.clone(), e))
    }
}

/// Emulates a selection in a file on disk: the selection is the first
/// occurrence of `selection` in the file.
#[derive(Debug, Clone)]
pub struct FileEditor {
    document: FileDocument,
    selection: String,
}

impl FileEditor {
    pub fn new(path: impl Into<PathBuf>, selection: impl Into<String>) -> Self {
        Self {
            document: FileDocument::new(path),
            selection: selection.into(),
        }
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }
}

impl Editor for FileEditor {
    fn replace_selection(&mut self, text: &str) -> Result<(), HostError> {
        let content = self.document.read()?;
        if self.selection.is_empty() || !content.contains(&self.selection) {
            return Err(HostError::SelectionNotFound(self.document.path.clone()));
        }
        let replaced = content.replacen(&self.selection, text, 1);
        self.document.write(&replaced)?;
        self.selection = text.to_string();
        Ok(())
    }
}

/// In-memory note, for tests and hosts that keep the text themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    pub text: String,
    /// Number of `write` calls received.
    pub writes: usize,
}

impl MemoryDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            writes: 0,
        }
    }
}

impl Document for MemoryDocument {
    fn read(&self) -> Result<String, HostError> {
        Ok(self.text.clone())
    }

    fn write(&mut self, text: &str) -> Result<(), HostError> {
        self.text = text.to_string();
        self.writes += 1;
        Ok(())
    }
}

/// In-memory editor: `replaced` holds every text substituted for the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEditor {
    pub replaced: Vec<String>,
}

impl Editor for MemoryEditor {
    fn replace_selection(&mut self, text: &str) -> Result<(), HostError> {
        self.replaced.push(text.to_string());
        Ok(())
    }
}

/// Collects notices in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNotifier {
    pub messages: Vec<String>,
}

impl Notifier for MemoryNotifier {
    fn notice(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("read error for {0}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("write error for {0}: {1}")]
    Write(PathBuf, std::io::Error),
    #[error("selection not found in {0}")]
    SelectionNotFound(PathBuf),
}
