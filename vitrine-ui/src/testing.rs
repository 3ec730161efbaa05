//! Test helpers, enabled with the `testing` feature.

use std::sync::Arc;

use parking_lot::Mutex;

/// Records every value a listener is notified with.
///
/// ```
/// use vitrine_ui::{Observable, testing::Recorder};
///
/// let value = Observable::new(0_u32);
/// let recorder = Recorder::new();
/// let _subscription = value.subscribe(recorder.listener());
/// value.set(3);
/// value.set(5);
/// assert_eq!(recorder.take(), vec![3, 5]);
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone + Send + 'static> Recorder<T> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a listener closure that appends to this recorder.
    pub fn listener(&self) -> impl Fn(&T) + Send + Sync + 'static {
        let values = self.values.clone();
        move |value: &T| values.lock().push(value.clone())
    }

    /// Returns the recorded values, clearing the recorder.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.values.lock())
    }

    /// Returns the most recent value, if any.
    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }

    /// Returns the number of recorded values.
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Returns `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
