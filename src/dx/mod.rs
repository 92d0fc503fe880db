//! # Submitter Developer Experience
//!
//! This module provides the structures and methods used to send submissions
//! and report their outcome.
//! It is intended to be used by the [`submitter`] crate.
//!
//! [`submitter`]: ../index.html

#[doc(inline)]
pub use submit::{SubmissionRequest, SubmissionRequestBuilder, SubmissionResult};
pub mod submit;

#[doc(inline)]
pub use notify::SubmitAndNotifyBuilder;
pub mod notify;

#[doc(inline)]
pub use delete::{ConfirmThenDeleteBuilder, DeleteOutcome};
pub mod delete;

#[cfg(feature = "reqwest")]
pub use submitter_client::SubmitterClient;
pub use submitter_client::{
    Messages, SubmitterClientBuilder, SubmitterClientConfigBuilder, SubmitterClientInstance,
    SubmitterConfig, SubmitterConfigBuilder, SubmitterGenericClient,
};
pub mod submitter_client;
