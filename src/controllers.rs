//! Controllers for driving the playground from external code.
//!
//! A controller is a cheap cloneable handle. External code records requests
//! on it; the UI thread drains them once per frame and feeds them to the
//! single [`InteractionController`](crate::data::interaction::InteractionController),
//! so all parameter mutation stays on one owner.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::data::model::RegressionParameters;

/// Published after every parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametersUpdate {
    pub parameters: RegressionParameters,
    pub total_error: f64,
}

/// A request recorded on a [`ParametersController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParametersRequest {
    Set(RegressionParameters),
    Reset,
}

/// Controller to set parameters programmatically and subscribe to updates.
#[derive(Clone, Default)]
pub struct ParametersController {
    pub(crate) inner: Arc<Mutex<ParametersCtrlInner>>,
}

#[derive(Default)]
pub(crate) struct ParametersCtrlInner {
    pub(crate) current: Option<ParametersUpdate>,
    pub(crate) requests: Vec<ParametersRequest>,
    pub(crate) listeners: Vec<Sender<ParametersUpdate>>,
}

impl ParametersController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ParametersCtrlInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Request new slope and intercept (last request wins within a frame).
    pub fn set(&self, slope: f64, intercept: f64) {
        self.lock()
            .requests
            .push(ParametersRequest::Set(RegressionParameters::new(slope, intercept)));
    }

    /// Request a reset to the current mode's defaults.
    pub fn reset(&self) {
        self.lock().requests.push(ParametersRequest::Reset);
    }

    /// Last published state, if the UI has published anything yet.
    pub fn current(&self) -> Option<ParametersUpdate> {
        self.lock().current
    }

    /// Subscribe to updates published after every parameter change.
    pub fn subscribe(&self) -> Receiver<ParametersUpdate> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().listeners.push(tx);
        rx
    }

    /// Take pending requests in the order they were made.
    pub fn drain_requests(&self) -> Vec<ParametersRequest> {
        std::mem::take(&mut self.lock().requests)
    }

    /// Record and broadcast an update; dead listeners are dropped.
    pub fn publish(&self, update: ParametersUpdate) {
        let mut inner = self.lock();
        inner.current = Some(update);
        inner.listeners.retain(|tx| tx.send(update).is_ok());
    }
}
