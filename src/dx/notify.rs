//! # Submit and notify
//!
//! This module contains the [`SubmitAndNotifyBuilder`] which performs a
//! submission and reports its outcome to the user through a
//! [`NotificationSink`].
//!
//! [`NotificationSink`]: crate::core::NotificationSink

use log::error;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    core::{
        Analytics, Deserializer, EventParams, NotificationSink, Severity, SubmitterError,
        Transport,
    },
    dx::{
        submit::{SubmissionRequest, SubmissionResult},
        submitter_client::{Messages, SubmitterClientInstance},
    },
};

/// Name of the analytics event emitted for transport failures.
pub(crate) const SUBMISSION_ERROR_EVENT: &str = "submission_error";

type SuccessCallback = Box<dyn Fn(&Value) + Send + Sync>;
type FailureCallback = Box<dyn Fn(&SubmissionResult) + Send + Sync>;

/// The [`SubmitAndNotifyBuilder`] is used to send a submission and notify the
/// user about its outcome.
///
/// Created by [`submit_and_notify`]. The sink is notified exactly once per
/// [`execute`] call.
///
/// # Examples
/// ```no_run
/// use submitter::{core::Severity, SubmissionRequest, SubmitterClientBuilder};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SubmitterClientBuilder::with_reqwest_transport().build()?;
/// let request = SubmissionRequest::builder()
///     .target_url("https://admin.example.com/admin/categories")
///     .field("name", "Gadgets")
///     .build()?;
///
/// client
///     .submit_and_notify(request, |message: &str, severity: Severity| {
///         println!("[{severity}] {message}")
///     })
///     .on_success(|payload| println!("created: {payload}"))
///     .execute()
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// [`submit_and_notify`]: crate::dx::SubmitterClientInstance::submit_and_notify
/// [`execute`]: SubmitAndNotifyBuilder::execute
pub struct SubmitAndNotifyBuilder<T, D> {
    pub(crate) client: SubmitterClientInstance<T, D>,
    pub(crate) request: SubmissionRequest,
    pub(crate) sink: Arc<dyn NotificationSink>,
    pub(crate) on_success: Option<SuccessCallback>,
    pub(crate) on_failure: Option<FailureCallback>,
}

impl<T, D> SubmitAndNotifyBuilder<T, D> {
    /// Callback invoked with the response payload of accepted submission.
    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Callback invoked with the result of rejected or failed submission.
    pub fn on_failure<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SubmissionResult) + Send + Sync + 'static,
    {
        self.on_failure = Some(Box::new(callback));
        self
    }

    /// Separate request from everything needed to report its outcome.
    fn into_parts(self) -> (SubmissionRequest, Reporter<T, D>) {
        let reporter = Reporter {
            target_url: self.request.target_url().to_string(),
            client: self.client,
            sink: self.sink,
            on_success: self.on_success,
            on_failure: self.on_failure,
        };

        (self.request, reporter)
    }
}

impl<T, D> SubmitAndNotifyBuilder<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Perform submission and notify the user.
    ///
    /// # Errors
    /// Returns the transport failure (after the sink and callbacks have been
    /// called) when no response has been received. Rejected submissions are
    /// returned as [`SubmissionResult::Failed`].
    pub async fn execute(self) -> Result<SubmissionResult, SubmitterError> {
        let (request, reporter) = self.into_parts();
        let result = reporter.client.submit(request).await;
        reporter.report(result)
    }
}

#[cfg(feature = "blocking")]
impl<T, D> SubmitAndNotifyBuilder<T, D>
where
    T: crate::core::blocking::Transport,
    D: Deserializer,
{
    /// Perform submission and notify the user, blocking current thread.
    ///
    /// # Errors
    /// Same as [`execute`](SubmitAndNotifyBuilder::execute).
    pub fn execute_blocking(self) -> Result<SubmissionResult, SubmitterError> {
        let (request, reporter) = self.into_parts();
        let result = reporter.client.submit_blocking(request);
        reporter.report(result)
    }
}

/// Outcome reporting part of [`SubmitAndNotifyBuilder`].
struct Reporter<T, D> {
    client: SubmitterClientInstance<T, D>,
    target_url: String,
    sink: Arc<dyn NotificationSink>,
    on_success: Option<SuccessCallback>,
    on_failure: Option<FailureCallback>,
}

impl<T, D> Reporter<T, D> {
    /// Notify sink, run callbacks and surface transport failure.
    fn report(self, result: SubmissionResult) -> Result<SubmissionResult, SubmitterError> {
        let messages = &self.client.config.messages;
        let (message, severity) = notification_for(messages, &result);

        if let SubmissionResult::NetworkError { cause } = &result {
            error!(
                "Submission to {} failed without response: {}",
                self.target_url, cause
            );
            report_error(&self.client.analytics, cause, &self.target_url);
        }

        self.sink.notify(message, severity);

        match &result {
            SubmissionResult::Ok { payload, .. } => {
                if let Some(callback) = &self.on_success {
                    callback(payload);
                }
            }
            _ => {
                if let Some(callback) = &self.on_failure {
                    callback(&result);
                }
            }
        }

        match result {
            SubmissionResult::NetworkError { cause } => Err(cause),
            result => Ok(result),
        }
    }
}

impl<T, D> SubmitterClientInstance<T, D> {
    /// Create a builder which submits `request` and reports the outcome to
    /// `sink`.
    ///
    /// Instance of [`SubmitAndNotifyBuilder`] is returned.
    pub fn submit_and_notify<S>(
        &self,
        request: SubmissionRequest,
        sink: S,
    ) -> SubmitAndNotifyBuilder<T, D>
    where
        S: NotificationSink + 'static,
    {
        SubmitAndNotifyBuilder {
            client: self.clone(),
            request,
            sink: Arc::new(sink),
            on_success: None,
            on_failure: None,
        }
    }

    pub(crate) fn submit_and_notify_shared(
        &self,
        request: SubmissionRequest,
        sink: Arc<dyn NotificationSink>,
    ) -> SubmitAndNotifyBuilder<T, D> {
        SubmitAndNotifyBuilder {
            client: self.clone(),
            request,
            sink,
            on_success: None,
            on_failure: None,
        }
    }
}

/// Text and severity shown to the user for `result`.
pub(crate) fn notification_for<'a>(
    messages: &'a Messages,
    result: &'a SubmissionResult,
) -> (&'a str, Severity) {
    match result {
        SubmissionResult::Ok { message, .. } => (
            message.as_deref().unwrap_or(&messages.success),
            Severity::Success,
        ),
        SubmissionResult::Failed { detail, .. } => (
            detail.as_deref().unwrap_or(&messages.failure),
            Severity::Danger,
        ),
        SubmissionResult::NetworkError { .. } => (&messages.connection_error, Severity::Danger),
    }
}

fn report_error(analytics: &Analytics, cause: &SubmitterError, source: &str) {
    analytics.send_event(
        SUBMISSION_ERROR_EVENT,
        EventParams::from([
            ("error_message".into(), Value::from(cause.to_string())),
            ("error_source".into(), Value::from(source)),
        ]),
    );
}
