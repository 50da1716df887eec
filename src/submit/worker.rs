use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc as tokio_mpsc;
use tokio::task::JoinHandle;

use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;
use crate::ui::schedule::ViewId;

use super::{ContactMessage, FormSubmitter};

/// Pending submissions beyond this are refused instead of queued.
pub const SUBMIT_QUEUE_CAPACITY: usize = 8;

/// A message to deliver, tagged with the contact view that sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub view: ViewId,
    pub message: ContactMessage,
}

pub type SubmitSender = tokio_mpsc::Sender<SubmitRequest>;

/// Delivers contact messages off the UI thread.
pub struct SubmissionWorker;

impl SubmissionWorker {
    /// Spawn the worker on `runtime`. Outcomes are posted back to the UI event
    /// queue as [`AppEvent::SubmitFinished`].
    pub fn spawn(
        runtime: &Handle,
        submitter: Arc<dyn FormSubmitter>,
        events: mpsc::Sender<AppEvent>,
        shutdown: ShutdownHandle,
    ) -> (SubmitSender, JoinHandle<()>) {
        let (tx, mut rx) = tokio_mpsc::channel::<SubmitRequest>(SUBMIT_QUEUE_CAPACITY);

        let task = runtime.spawn(async move {
            loop {
                let request = tokio::select! {
                    request = rx.recv() => match request {
                        Some(request) => request,
                        None => break,
                    },
                    _ = shutdown.wait() => break,
                };

                let result = submitter
                    .submit(&request.message)
                    .await
                    .map_err(|err| err.to_string());
                if let Err(reason) = &result {
                    tracing::warn!(
                        submitter = submitter.name(),
                        view = request.view.0,
                        error = %reason,
                        "contact submission failed"
                    );
                }

                let finished = AppEvent::SubmitFinished {
                    view: request.view,
                    result,
                };
                if events.send(finished).is_err() {
                    break;
                }
            }
            tracing::debug!("submission worker stopped");
        });

        (tx, task)
    }
}
