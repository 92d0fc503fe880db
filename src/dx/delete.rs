//! # Confirm then delete
//!
//! This module contains the [`ConfirmThenDeleteBuilder`] which asks the user
//! for confirmation, removes an item and schedules the refresh signal.

use log::debug;
use std::sync::Arc;

use crate::{
    core::{
        ConfirmPrompt, Deserializer, NotificationSink, RefreshSignal, SubmitterError, Transport,
    },
    dx::{
        submit::{SubmissionRequest, SubmissionResult},
        submitter_client::SubmitterClientInstance,
    },
};

/// Outcome of the [`confirm_then_delete`] operation.
///
/// [`confirm_then_delete`]: crate::dx::SubmitterClientInstance::confirm_then_delete
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// User confirmed and the `DELETE` request got a response.
    Completed(SubmissionResult),

    /// User declined. Nothing has been sent.
    Cancelled,
}

impl DeleteOutcome {
    /// Whether user declined removal.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// The [`ConfirmThenDeleteBuilder`] is used to remove an item after the user
/// confirmed the action.
///
/// Both [`confirm_with`] and [`notify`] are required. The refresh signal is
/// optional and is sent once, [`SubmitterConfig::refresh_delay`] after a
/// successful removal.
///
/// # Examples
/// ```no_run
/// use submitter::{core::Severity, DeleteOutcome, Messages, SubmitterClientBuilder};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SubmitterClientBuilder::with_reqwest_transport().build()?;
///
/// let outcome = client
///     .confirm_then_delete("https://admin.example.com/api/posts/5", "Post 5")
///     .confirm_with(|label: &str| {
///         println!("{}", Messages::delete_confirmation(label));
///         true
///     })
///     .notify(|message: &str, severity: Severity| println!("[{severity}] {message}"))
///     .on_refresh(|| println!("reload"))
///     .execute()
///     .await?;
///
/// assert!(!outcome.is_cancelled());
/// # Ok(())
/// # }
/// ```
///
/// [`confirm_with`]: ConfirmThenDeleteBuilder::confirm_with
/// [`notify`]: ConfirmThenDeleteBuilder::notify
/// [`SubmitterConfig::refresh_delay`]: crate::SubmitterConfig::refresh_delay
pub struct ConfirmThenDeleteBuilder<T, D> {
    pub(crate) client: SubmitterClientInstance<T, D>,
    pub(crate) target_url: String,
    pub(crate) label: String,
    pub(crate) prompt: Option<Arc<dyn ConfirmPrompt>>,
    pub(crate) sink: Option<Arc<dyn NotificationSink>>,
    pub(crate) refresh: Option<Arc<dyn RefreshSignal>>,
}

impl<T, D> ConfirmThenDeleteBuilder<T, D> {
    /// Set confirmation prompt.
    pub fn confirm_with<P>(mut self, prompt: P) -> Self
    where
        P: ConfirmPrompt + 'static,
    {
        self.prompt = Some(Arc::new(prompt));
        self
    }

    /// Set notification sink.
    pub fn notify<S>(mut self, sink: S) -> Self
    where
        S: NotificationSink + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Set refresh signal.
    pub fn on_refresh<R>(mut self, signal: R) -> Self
    where
        R: RefreshSignal + 'static,
    {
        self.refresh = Some(Arc::new(signal));
        self
    }
}

impl<T, D> ConfirmThenDeleteBuilder<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Ask for confirmation and remove the item.
    ///
    /// # Errors
    /// Returns [`SubmitterError::InvalidRequest`] when the prompt or the sink
    /// hasn't been set or the target URL is empty, and the transport failure
    /// when no response has been received.
    pub async fn execute(self) -> Result<DeleteOutcome, SubmitterError> {
        let prompt = self
            .prompt
            .ok_or_else(|| SubmitterError::invalid_request("confirmation prompt is required"))?;
        let sink = self
            .sink
            .ok_or_else(|| SubmitterError::invalid_request("notification sink is required"))?;
        let request = SubmissionRequest::delete(self.target_url)?;

        if !prompt.confirm(&self.label) {
            debug!("Removal of '{}' cancelled", self.label);
            return Ok(DeleteOutcome::Cancelled);
        }

        let result = self
            .client
            .submit_and_notify_shared(request, sink)
            .execute()
            .await?;

        if let (true, Some(signal)) = (result.is_ok(), self.refresh) {
            let runtime = self.client.runtime.clone();
            let delay = self.client.config.refresh_delay;
            debug!("Refresh scheduled in {:?}", delay);

            self.client.runtime.spawn(Box::pin(async move {
                runtime.sleep(delay).await;
                signal.refresh();
            }));
        }

        Ok(DeleteOutcome::Completed(result))
    }
}

impl<T, D> SubmitterClientInstance<T, D> {
    /// Create a builder which removes the item at `target_url` after the user
    /// confirmed removal of `label`.
    ///
    /// Instance of [`ConfirmThenDeleteBuilder`] is returned.
    pub fn confirm_then_delete<U, L>(&self, target_url: U, label: L) -> ConfirmThenDeleteBuilder<T, D>
    where
        U: Into<String>,
        L: Into<String>,
    {
        ConfirmThenDeleteBuilder {
            client: self.clone(),
            target_url: target_url.into(),
            label: label.into(),
            prompt: None,
            sink: None,
            refresh: None,
        }
    }
}
