use thiserror::Error;

/// Errors raised while reading a selected file or talking to the upload endpoint.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to send request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upload failed with status: {status}")]
    Status { status: u16, body: String },

    #[error("Upload runtime unavailable: {0}")]
    Runtime(String),
}

pub type UploadResult<T> = Result<T, UploadError>;
