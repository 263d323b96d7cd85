mod dispatcher;
mod endpoint;
pub mod progress;
pub mod selection;
mod tracker;
mod types;

pub use dispatcher::Dispatcher;
pub use endpoint::{parse_receipts, HttpEndpoint, UploadEndpoint};
pub use progress::{percent, ProgressFn};
pub use tracker::{TrackerPhase, TrackerSummary, UploadTracker};
pub use types::{
    EntryId, EntryStatus, SelectedFile, TrackerEvent, UploadEntry, UploadJob, UploadedFile,
};
