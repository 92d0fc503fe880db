//! # Runtime module
//!
//! This module contains the [`Runtime`] trait used by the submitter client to
//! run deferred work, like the refresh signal which follows a successful
//! deletion.

use futures::future::BoxFuture;
use std::time::Duration;

/// Submitter runtime trait.
///
/// This trait is used to spawn async tasks and to suspend them for a period of
/// time.
///
/// # Examples
/// ```
/// use futures::future::BoxFuture;
/// use std::time::Duration;
/// use submitter::core::Runtime;
///
/// struct MyRuntime;
///
/// #[async_trait::async_trait]
/// impl Runtime for MyRuntime {
///    fn spawn(&self, future: BoxFuture<'static, ()>) {
///       // spawn the Future
///       // e.g. tokio::spawn(future);
///    }
///
///    async fn sleep(&self, delay: Duration) {
///       // e.g. tokio::time::sleep(delay).await
///    }
/// }
/// ```
#[async_trait::async_trait]
pub trait Runtime: Send + Sync {
    /// Spawn a task.
    ///
    /// The task should be driven to completion without the caller awaiting it.
    fn spawn(&self, future: BoxFuture<'static, ()>);

    /// Put current task to "sleep".
    ///
    /// Sleep current task for specified amount of time.
    async fn sleep(&self, delay: Duration);
}
