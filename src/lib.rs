pub mod app;
pub mod config;
pub mod error;
pub mod upload;
pub mod utils;

pub use app::FeedbackUploader;
pub use config::Config;
pub use error::{UploadError, UploadResult};
