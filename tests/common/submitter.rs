//! A `Submitter` whose outcomes the test hands over one at a time.

use folio::contact::{ContactFormData, SubmitError, Submitter};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

/// Blocks each submission until the test releases an outcome for it, and
/// records every payload it was asked to deliver.
#[derive(Debug)]
pub struct ScriptedSubmitter {
    outcomes: Mutex<Receiver<Result<(), SubmitError>>>,
    sent: Mutex<Vec<ContactFormData>>,
}

impl ScriptedSubmitter {
    /// The submitter plus the handle that releases outcomes.
    pub fn new() -> (Arc<Self>, Sender<Result<(), SubmitError>>) {
        let (tx, rx) = mpsc::channel();
        let submitter = Self {
            outcomes: Mutex::new(rx),
            sent: Mutex::new(Vec::new()),
        };
        (Arc::new(submitter), tx)
    }

    /// Payloads delivered so far.
    pub fn sent(&self) -> Vec<ContactFormData> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Submitter for ScriptedSubmitter {
    fn submit(&self, data: &ContactFormData) -> Result<(), SubmitError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(data.clone());
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recv()
            .unwrap_or(Err(SubmitError::Interrupted))
    }
}
