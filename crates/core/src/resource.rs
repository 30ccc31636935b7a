//! Lifecycle of one remote fetch: `{data, loading, error}` plus issuance tracking.

use serde::{Deserialize, Serialize};

/// State of a value loaded from a remote source.
///
/// `error` and non-empty `data` never coexist: a failed load clears the data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncResource<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> AsyncResource<T> {
    /// Marks a new attempt as started. Stale data stays visible until it settles.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = data;
        self.error = None;
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.data = T::default();
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Back to the empty, idle shape.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Monotonic issuance counter.
///
/// Every request gets the next generation; only the latest one may apply
/// its outcome. Older outcomes are stale and must be dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Issuance {
    latest: u64,
}

impl Issuance {
    /// Issues a new generation, superseding every earlier one.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}
