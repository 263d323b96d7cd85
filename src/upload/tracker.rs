use crate::upload::progress::percent;
use crate::upload::types::{
    EntryId, EntryStatus, SelectedFile, TrackerEvent, UploadEntry, UploadJob,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerPhase {
    #[default]
    Idle,
    Uploading {
        outstanding: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerSummary {
    pub queued: usize,
    pub uploading: usize,
    pub uploaded: usize,
    pub failed: usize,
}

/// Owns the selected entries and the uploading guard.
///
/// All in-flight state changes arrive as [`TrackerEvent`]s through [`apply`],
/// so there is exactly one writer and updates always see the current list.
///
/// [`apply`]: UploadTracker::apply
#[derive(Debug, Default)]
pub struct UploadTracker {
    entries: Vec<UploadEntry>,
    phase: TrackerPhase,
    batch_failures: usize,
    last_error: Option<String>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[UploadEntry] {
        &self.entries
    }

    pub fn phase(&self) -> TrackerPhase {
        self.phase
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.phase, TrackerPhase::Uploading { .. })
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn entry(&self, id: EntryId) -> Option<&UploadEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Appends one queued entry per file. Returns how many were added.
    pub fn add_selection(&mut self, selection: Option<Vec<SelectedFile>>) -> usize {
        let Some(files) = selection else {
            return 0;
        };
        let added = files.len();
        if added == 0 {
            return 0;
        }

        self.entries.extend(files.into_iter().map(UploadEntry::new));
        tracing::info!(added, total = self.entries.len(), "files selected");
        added
    }

    /// Moves to `Uploading` and hands out one job per entry, or `None` when
    /// there is nothing to send or a batch is still running.
    pub fn begin_dispatch(&mut self) -> Option<Vec<UploadJob>> {
        if self.entries.is_empty() {
            tracing::debug!("dispatch ignored: no files selected");
            return None;
        }
        if self.is_uploading() {
            tracing::debug!("dispatch ignored: upload already in progress");
            return None;
        }

        let jobs: Vec<UploadJob> = self
            .entries
            .iter_mut()
            .map(|entry| {
                entry.status = EntryStatus::Uploading;
                entry.progress = 0;
                UploadJob {
                    id: entry.id,
                    file: entry.file.clone(),
                }
            })
            .collect();

        self.phase = TrackerPhase::Uploading {
            outstanding: jobs.len(),
        };
        self.batch_failures = 0;
        self.last_error = None;
        Some(jobs)
    }

    pub fn apply(&mut self, event: TrackerEvent) {
        match event {
            TrackerEvent::Progress { id, loaded, total } => {
                if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
                    entry.progress = percent(loaded, total);
                }
            }
            TrackerEvent::Settled { id, outcome } => {
                if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
                    entry.status = match outcome {
                        Ok(_) => EntryStatus::Uploaded,
                        Err(reason) => {
                            self.batch_failures += 1;
                            EntryStatus::Failed(reason)
                        }
                    };
                }
                self.settle_one();
            }
        }
    }

    fn settle_one(&mut self) {
        let TrackerPhase::Uploading { outstanding } = self.phase else {
            return;
        };

        let outstanding = outstanding.saturating_sub(1);
        if outstanding > 0 {
            self.phase = TrackerPhase::Uploading { outstanding };
            return;
        }

        self.phase = TrackerPhase::Idle;
        if self.batch_failures > 0 {
            self.last_error = Some(format!(
                "{} upload(s) failed. Check the file list for details.",
                self.batch_failures
            ));
        }
        tracing::info!(failed = self.batch_failures, "uploads finished");
    }

    /// Drops every entry. Running requests keep going; their events no
    /// longer match anything.
    pub fn clear(&mut self) {
        tracing::info!(removed = self.entries.len(), "clearing file list");
        self.entries = Vec::new();
        self.last_error = None;
    }

    pub fn summary(&self) -> TrackerSummary {
        let mut summary = TrackerSummary::default();
        for entry in &self.entries {
            match entry.status {
                EntryStatus::Queued => summary.queued += 1,
                EntryStatus::Uploading => summary.uploading += 1,
                EntryStatus::Uploaded => summary.uploaded += 1,
                EntryStatus::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }

    pub fn status_text(&self) -> String {
        let s = self.summary();
        format!(
            "Files: {} | ⏳ Queued: {} | 📤 Uploading: {} | ✅ Uploaded: {} | ❌ Failed: {}",
            self.entries.len(),
            s.queued,
            s.uploading,
            s.uploaded,
            s.failed
        )
    }
}
