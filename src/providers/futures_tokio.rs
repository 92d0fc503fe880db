//! # Futures implementation using Tokio runtime
//!
//! This module contains [`RuntimeTokio`] type.
//!
//! It requires the [`tokio` feature] to be enabled.
//!
//! [`tokio` feature]: ../../index.html#features

use crate::core::Runtime;
use futures::future::BoxFuture;
use std::time::Duration;

/// Tokio-based `async` tasks spawner.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeTokio;

#[async_trait::async_trait]
impl Runtime for RuntimeTokio {
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        tokio::spawn(future);
    }

    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await
    }
}
