//! # Submitter
//!
//! Form submission helper for admin panels and similar back-office tools.
//!
//! The crate sends one form-like submission (or deletion request), interprets
//! the JSON response and reports the outcome to the user through a pluggable
//! notification sink.
//!
//! ## Overview
//!
//! Every submission ends with exactly one [`SubmissionResult`]:
//! * [`SubmissionResult::Ok`] when the server accepted it (`2xx`),
//! * [`SubmissionResult::Failed`] when the server rejected it or the response
//!   couldn't be parsed,
//! * [`SubmissionResult::NetworkError`] when no response has been received.
//!
//! ## Getting started
//!
//! ```toml
//! [dependencies]
//! submitter = "0.1"
//! ```
//!
//! ```no_run
//! use submitter::{core::Severity, SubmissionRequest, SubmitterClientBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SubmitterClientBuilder::with_reqwest_transport().build()?;
//!
//!     let request = SubmissionRequest::builder()
//!         .target_url("https://admin.example.com/admin/posts")
//!         .field("title", "Best gifts for geeks")
//!         .field("status", "draft")
//!         .build()?;
//!
//!     client
//!         .submit_and_notify(request, |message: &str, severity: Severity| {
//!             println!("[{severity}] {message}");
//!         })
//!         .execute()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! * `reqwest` - [`TransportReqwest`] as the HTTP transport,
//! * `blocking` - blocking transport and [`submit_blocking`],
//! * `tokio` - [`RuntimeTokio`] used to schedule the refresh signal,
//! * `full` / `default` - all of the above.
//!
//! [`TransportReqwest`]: crate::transport::TransportReqwest
//! [`submit_blocking`]: crate::dx::SubmitterClientInstance::submit_blocking
//! [`RuntimeTokio`]: crate::providers::futures_tokio::RuntimeTokio

#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[doc(inline)]
pub use dx::{
    ConfirmThenDeleteBuilder, DeleteOutcome, Messages, SubmissionRequest,
    SubmissionRequestBuilder, SubmissionResult, SubmitAndNotifyBuilder, SubmitterClientBuilder,
    SubmitterClientConfigBuilder, SubmitterClientInstance, SubmitterConfig,
    SubmitterConfigBuilder, SubmitterGenericClient,
};

#[cfg(feature = "reqwest")]
#[doc(inline)]
pub use dx::SubmitterClient;

pub mod core;
pub mod dx;
pub mod providers;
pub mod transport;
