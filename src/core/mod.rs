//! # Submitter Core
//!
//! Core functionality of the submitter client.
//!
//! The `core` module contains the traits and data types shared by every
//! operation: the transport seam, response deserialization, the runtime used
//! for deferred work and the collaborator capabilities (notification sink,
//! confirmation prompt, refresh signal and analytics).

pub use error::SubmitterError;
pub mod error;

#[cfg(feature = "blocking")]
pub use transport::blocking;
pub use transport::Transport;
pub mod transport;

pub use transport_request::{FieldValue, FormField, TransportBody, TransportMethod, TransportRequest};
pub mod transport_request;

pub use transport_response::TransportResponse;
pub mod transport_response;

pub use deserializer::Deserializer;
pub mod deserializer;

pub use runtime::Runtime;
pub mod runtime;

pub use notification::{ConfirmPrompt, NotificationSink, RefreshSignal, Severity};
pub mod notification;

pub use analytics::{Analytics, EventParams, EventSink};
pub mod analytics;

pub(crate) mod utils;
