use crate::config::Config;
use crate::error::{UploadError, UploadResult};
use crate::upload::progress::{file_stream, ProgressFn};
use crate::upload::types::{SelectedFile, UploadedFile};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Body;

/// Something that accepts one file per request and reports transfer progress.
#[async_trait]
pub trait UploadEndpoint: Send + Sync {
    async fn upload(
        &self,
        file: &SelectedFile,
        on_progress: ProgressFn,
    ) -> UploadResult<Vec<UploadedFile>>;
}

/// Posts each file as a multipart form to a fixed address.
#[derive(Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: String,
    field_name: String,
    chunk_size: usize,
}

impl HttpEndpoint {
    pub fn new(config: &Config) -> UploadResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.upload_url.clone(),
            field_name: config.field_name.clone(),
            chunk_size: config.chunk_size,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Reads the receipts out of a successful response body. The endpoint is not
/// obliged to answer in this shape, so anything else means "no receipts".
pub fn parse_receipts(body: &str) -> Vec<UploadedFile> {
    match serde_json::from_str::<Vec<UploadedFile>>(body) {
        Ok(receipts) => receipts,
        Err(e) => {
            tracing::debug!(error = %e, "upload response carried no receipts");
            Vec::new()
        }
    }
}

#[async_trait]
impl UploadEndpoint for HttpEndpoint {
    async fn upload(
        &self,
        file: &SelectedFile,
        on_progress: ProgressFn,
    ) -> UploadResult<Vec<UploadedFile>> {
        let handle = tokio::fs::File::open(&file.path).await?;
        let total = handle.metadata().await?.len();
        on_progress(0, total);

        let body = Body::wrap_stream(file_stream(handle, total, self.chunk_size, on_progress));
        let part = Part::stream_with_length(body, total)
            .file_name(file.name.clone())
            .mime_str(file.mime)?;
        let form = Form::new().part(self.field_name.clone(), part);

        tracing::debug!(file = %file.name, url = %self.url, bytes = total, "sending upload request");

        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UploadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(parse_receipts(&body))
    }
}
