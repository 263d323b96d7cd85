use crate::upload::{TrackerEvent, UploadTracker};
use std::sync::mpsc::{Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Upload,
}

pub struct UploadState {
    pub screen: Screen,
    pub tracker: UploadTracker,
    pub event_sender: Sender<TrackerEvent>,
    pub event_receiver: Receiver<TrackerEvent>,
}

impl Default for UploadState {
    fn default() -> Self {
        let (event_sender, event_receiver) = std::sync::mpsc::channel();
        Self {
            screen: Screen::default(),
            tracker: UploadTracker::new(),
            event_sender,
            event_receiver,
        }
    }
}

impl UploadState {
    /// Applies every event that has arrived since the last frame.
    /// Returns true when anything changed.
    pub fn drain_events(&mut self) -> bool {
        let mut had_updates = false;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.tracker.apply(event);
            had_updates = true;
        }
        had_updates
    }
}
