use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A file picked by the user, as it will be sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub mime: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Queued,
    Uploading,
    Uploaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEntry {
    pub id: EntryId,
    pub file: SelectedFile,
    pub progress: u8,
    pub status: EntryStatus,
}

impl UploadEntry {
    pub fn new(file: SelectedFile) -> Self {
        Self {
            id: EntryId::new(),
            file,
            progress: 0,
            status: EntryStatus::Queued,
        }
    }
}

/// One request to issue: the entry it reports back to and the file it carries.
#[derive(Debug, Clone)]
pub struct UploadJob {
    pub id: EntryId,
    pub file: SelectedFile,
}

/// Per-file receipt returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedFile {
    pub filename: String,
    pub status: String,
}

/// Messages sent from running uploads back to the tracker.
#[derive(Debug, Clone)]
pub enum TrackerEvent {
    Progress {
        id: EntryId,
        loaded: u64,
        total: u64,
    },
    Settled {
        id: EntryId,
        outcome: Result<Vec<UploadedFile>, String>,
    },
}
