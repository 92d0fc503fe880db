//! # Analytics capability
//!
//! Optional event sink used to report submission problems to an analytics
//! backend. When no sink has been injected every event is dropped, which is a
//! normal outcome and not an error.

use log::debug;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};

/// Parameters attached to an analytics event.
pub type EventParams = HashMap<String, Value>;

/// Analytics backend.
///
/// # Examples
/// ```
/// use submitter::core::{EventParams, EventSink};
///
/// struct Collector;
///
/// impl EventSink for Collector {
///     fn send_event(&self, name: &str, params: &EventParams) {
///         println!("{name}: {params:?}");
///     }
/// }
/// ```
pub trait EventSink: Send + Sync {
    /// Record event `name` with its `params`.
    fn send_event(&self, name: &str, params: &EventParams);
}

impl<F> EventSink for F
where
    F: Fn(&str, &EventParams) + Send + Sync,
{
    fn send_event(&self, name: &str, params: &EventParams) {
        self(name, params)
    }
}

/// Handle to the (possibly absent) analytics backend.
#[derive(Clone, Default)]
pub struct Analytics {
    sink: Option<Arc<dyn EventSink>>,
}

impl Analytics {
    /// Create handle which forwards events to `sink`.
    pub fn new<S>(sink: S) -> Self
    where
        S: EventSink + 'static,
    {
        Self {
            sink: Some(Arc::new(sink)),
        }
    }

    /// Create handle without backend.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether events will reach a backend.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Send event to the backend.
    ///
    /// Returns `false` when no backend is available and the event has been
    /// ignored.
    pub fn send_event(&self, name: &str, params: EventParams) -> bool {
        let Some(sink) = &self.sink else {
            debug!("analytics not available, event ignored: {} {:?}", name, params);
            return false;
        };

        sink.send_event(name, &params);
        debug!("event sent: {} {:?}", name, params);
        true
    }
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
