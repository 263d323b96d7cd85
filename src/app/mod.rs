pub mod progress;
mod state;
mod ui;

use crate::upload::selection::{self, is_accepted, resolve_paths};
use crate::upload::{Dispatcher, SelectedFile};
use eframe::{egui, App};
pub use state::{Screen, UploadState};
use std::time::Duration;

pub struct FeedbackUploader {
    state: UploadState,
    dispatcher: Dispatcher,
}

impl FeedbackUploader {
    pub fn new(dispatcher: Dispatcher) -> Self {
        tracing::info!("initializing feedback uploader");
        Self {
            state: UploadState::default(),
            dispatcher,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn open_screen(&mut self, screen: Screen) {
        self.state.screen = screen;
    }

    pub fn add_files(&mut self, selection: Option<Vec<SelectedFile>>) -> usize {
        self.state.tracker.add_selection(selection)
    }

    pub fn start_upload(&mut self) -> Option<std::thread::JoinHandle<()>> {
        let jobs = self.state.tracker.begin_dispatch()?;
        Some(
            self.dispatcher
                .spawn(jobs, self.state.event_sender.clone()),
        )
    }

    pub fn clear_files(&mut self) {
        self.state.tracker.clear();
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.state.drain_events() {
            ctx.request_repaint();
        }
        if self.state.tracker.is_uploading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let paths: Vec<_> = dropped.into_iter().filter_map(|file| file.path).collect();
        if paths.iter().any(|path| is_accepted(path)) {
            self.state.screen = Screen::Upload;
        }
        self.add_files(resolve_paths(Some(paths)));
    }

    fn pick_files(&mut self) {
        self.add_files(selection::pick_files());
    }

    fn pick_folder(&mut self) {
        self.add_files(selection::pick_folder());
    }
}

impl App for FeedbackUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.handle_dropped_files(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadResult;
    use crate::upload::{EntryStatus, ProgressFn, UploadEndpoint, UploadedFile};
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Arc;

    struct EchoEndpoint;

    #[async_trait]
    impl UploadEndpoint for EchoEndpoint {
        async fn upload(
            &self,
            file: &SelectedFile,
            on_progress: ProgressFn,
        ) -> UploadResult<Vec<UploadedFile>> {
            on_progress(file.size, file.size);
            Ok(vec![UploadedFile {
                filename: file.name.clone(),
                status: "uploaded".to_string(),
            }])
        }
    }

    fn file(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            path: PathBuf::from(name),
            size: 8,
            mime: "text/plain",
        }
    }

    #[test]
    fn upload_round_trip_through_channel() {
        let mut app = FeedbackUploader::new(Dispatcher::new(Arc::new(EchoEndpoint)));
        app.add_files(Some(vec![file("a.txt"), file("b.json")]));

        let handle = app.start_upload().unwrap();
        assert!(app.start_upload().is_none());
        handle.join().unwrap();

        assert!(app.state.drain_events());
        let tracker = &app.state().tracker;
        assert!(!tracker.is_uploading());
        assert!(tracker
            .entries()
            .iter()
            .all(|e| e.progress == 100 && e.status == EntryStatus::Uploaded));
    }

    #[test]
    fn start_without_files_does_nothing() {
        let mut app = FeedbackUploader::new(Dispatcher::new(Arc::new(EchoEndpoint)));
        assert!(app.start_upload().is_none());
        assert_eq!(app.state().screen, Screen::Home);
    }
}
