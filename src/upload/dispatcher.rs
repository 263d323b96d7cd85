use crate::error::UploadError;
use crate::upload::endpoint::UploadEndpoint;
use crate::upload::progress::ProgressFn;
use crate::upload::types::{TrackerEvent, UploadJob};
use futures::future::join_all;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Issues every job of a batch at once and reports back over a channel.
#[derive(Clone)]
pub struct Dispatcher {
    endpoint: Arc<dyn UploadEndpoint>,
}

impl Dispatcher {
    pub fn new(endpoint: Arc<dyn UploadEndpoint>) -> Self {
        Self { endpoint }
    }

    /// Runs the batch on a background thread with its own runtime.
    pub fn spawn(&self, jobs: Vec<UploadJob>, events: Sender<TrackerEvent>) -> JoinHandle<()> {
        let endpoint = self.endpoint.clone();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!(error = %e, "failed to start upload runtime");
                    let reason = UploadError::Runtime(e.to_string()).to_string();
                    for job in jobs {
                        let _ = events.send(TrackerEvent::Settled {
                            id: job.id,
                            outcome: Err(reason.clone()),
                        });
                    }
                    return;
                }
            };
            rt.block_on(Self::run(endpoint, jobs, events));
        })
    }

    /// Uploads all jobs concurrently and returns once every one has settled.
    pub async fn run(
        endpoint: Arc<dyn UploadEndpoint>,
        jobs: Vec<UploadJob>,
        events: Sender<TrackerEvent>,
    ) {
        let total = jobs.len();
        tracing::info!(files = total, "dispatching uploads");

        let uploads = jobs.into_iter().map(|job| {
            let endpoint = endpoint.clone();
            let events = events.clone();
            async move { Self::upload_one(endpoint.as_ref(), job, events).await }
        });

        let results = join_all(uploads).await;
        let failed = results.iter().filter(|ok| !**ok).count();
        tracing::info!(files = total, failed, "upload batch settled");
    }

    async fn upload_one(
        endpoint: &dyn UploadEndpoint,
        job: UploadJob,
        events: Sender<TrackerEvent>,
    ) -> bool {
        let id = job.id;
        let progress_events = events.clone();
        let on_progress: ProgressFn = Arc::new(move |loaded: u64, total: u64| {
            tracing::trace!(%id, loaded, total, "upload progress");
            let _ = progress_events.send(TrackerEvent::Progress { id, loaded, total });
        });

        let outcome = match endpoint.upload(&job.file, on_progress).await {
            Ok(receipts) => {
                tracing::info!(file = %job.file.name, "uploaded");
                Ok(receipts)
            }
            Err(e) => {
                tracing::error!(file = %job.file.name, error = %e, "upload failed");
                Err(e.to_string())
            }
        };

        let succeeded = outcome.is_ok();
        let _ = events.send(TrackerEvent::Settled { id, outcome });
        succeeded
    }
}
