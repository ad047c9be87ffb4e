//! Simulated persistence for control-directive submissions.
//!
//! A submitted directive is appended to the in-memory lifecycle log only
//! after a short background delay, modeling the latency of the real
//! persistence collaborator without an actual backend. The dispatch is
//! fire-and-forget: there is no abort path, and the result is polled once
//! per frame like the async file loader.

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

use eframe::egui;
use rapron::TaskLifecycleEvent;

/// Simulated round-trip latency of the persistence collaborator.
pub const DISPATCH_DELAY: Duration = Duration::from_millis(600);

/// A control directive on its way to an event's lifecycle log.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSubmission {
    pub flight_id: String,
    pub event_id: String,
    pub entry: TaskLifecycleEvent,
}

/// Dispatches control submissions through the simulated delay.
pub struct ControlDispatcher {
    receiver: Option<Receiver<ControlSubmission>>,
}

impl ControlDispatcher {
    pub fn new() -> Self {
        Self { receiver: None }
    }

    /// True while a submission is in flight; the send button is disabled.
    pub fn is_dispatching(&self) -> bool {
        self.receiver.is_some()
    }

    /// Starts dispatching a submission. One at a time: the UI blocks the
    /// submit control while a dispatch is pending.
    pub fn start(&mut self, submission: ControlSubmission, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            thread::sleep(DISPATCH_DELAY);
            let _ = sender.send(submission);
            ctx_handle.request_repaint();
        });
    }

    /// Returns the delivered submission once the simulated latency has
    /// passed. Call once per frame.
    pub fn check_completion(&mut self) -> Option<ControlSubmission> {
        let delivered = self
            .receiver
            .as_ref()
            .and_then(|receiver| receiver.try_recv().ok());
        if delivered.is_some() {
            self.receiver = None;
        }
        delivered
    }
}

impl Default for ControlDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
