//! Submitter client module
//!
//! This module contains the [`SubmitterClient`] type and its builders.
//! The client is used to send form-like submissions and deletion requests and
//! to turn their outcome into a [`SubmissionResult`].
//!
//! [`SubmitterClient`]: type.SubmitterClient.html
//! [`SubmissionResult`]: ../submit/enum.SubmissionResult.html

use derive_builder::Builder;
use log::info;
use std::{ops::Deref, sync::Arc, time::Duration};

#[cfg(feature = "tokio")]
use crate::providers::futures_tokio::RuntimeTokio;
#[cfg(feature = "reqwest")]
use crate::transport::TransportReqwest;

use crate::{
    core::{Analytics, Deserializer, EventSink, Runtime, SubmitterError},
    providers::deserialization_serde::DeserializerSerde,
    transport::middleware::SubmitterMiddleware,
};

/// Default delay between a successful deletion and the refresh signal.
pub(crate) const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(1000);

/// Submitter client
///
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// # Examples
/// ```
/// use submitter::SubmitterClientBuilder;
/// # use submitter::core::{Transport, TransportRequest, TransportResponse, SubmitterError};
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, SubmitterError> {
/// #         unimplemented!()
/// #     }
/// # }
///
/// # fn main() -> Result<(), SubmitterError> {
/// let client = SubmitterClientBuilder::with_transport(MyTransport).build()?;
/// # Ok(())
/// # }
/// ```
///
/// # Synchronization
///
/// Client is thread-safe and can be shared between threads. It is already
/// wrapped in `Arc` and doesn't keep any per-submission state, so concurrent
/// submissions don't affect each other.
///
/// [`Transport`]: ../../core/trait.Transport.html
pub type SubmitterGenericClient<T, D> = SubmitterClientInstance<SubmitterMiddleware<T>, D>;

/// Submitter client
///
/// Client which uses [`reqwest`] as a transport layer and [`serde`] for
/// responses deserialization.
///
/// # Examples
/// ```
/// use submitter::{transport::TransportReqwest, SubmitterClientBuilder};
///
/// # fn main() -> Result<(), submitter::core::SubmitterError> {
/// let client = SubmitterClientBuilder::with_transport(
///     TransportReqwest::with_base_url("https://admin.example.com"),
/// )
/// .build()?;
/// # Ok(())
/// # }
/// ```
///
/// [`reqwest`]: https://crates.io/crates/reqwest
/// [`serde`]: https://crates.io/crates/serde
#[cfg(feature = "reqwest")]
pub type SubmitterClient = SubmitterGenericClient<TransportReqwest, DeserializerSerde>;

/// Submitter client raw instance.
///
/// This struct contains the actual client state.
/// It shouldn't be used directly. Use [`SubmitterGenericClient`] or
/// [`SubmitterClient`] instead.
#[derive(Debug)]
pub struct SubmitterClientInstance<T, D> {
    pub(crate) inner: Arc<SubmitterClientRef<T, D>>,
}

impl<T, D> Deref for SubmitterClientInstance<T, D> {
    type Target = SubmitterClientRef<T, D>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, D> Clone for SubmitterClientInstance<T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Client reference
///
/// This struct contains the actual client state.
/// It's wrapped in `Arc` by [`SubmitterClientInstance`].
///
/// Not intended to be used directly. Use [`SubmitterClient`] instead.
#[derive(Builder)]
#[builder(
    pattern = "owned",
    name = "SubmitterClientConfigBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct SubmitterClientRef<T, D> {
    /// Transport layer
    #[builder(setter(custom))]
    pub(crate) transport: T,

    /// Responses deserializer
    #[builder(setter(custom))]
    pub(crate) deserializer: Arc<D>,

    /// Configuration
    #[builder(default)]
    pub(crate) config: SubmitterConfig,

    /// Runtime environment used for deferred work.
    #[cfg_attr(feature = "tokio", builder(default = "Arc::new(RuntimeTokio)"))]
    #[builder(setter(custom))]
    pub(crate) runtime: Arc<dyn Runtime>,

    /// Analytics backend.
    #[builder(setter(custom), default)]
    pub(crate) analytics: Analytics,
}

impl<T, D> std::fmt::Debug for SubmitterClientRef<T, D>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitterClientRef")
            .field("transport", &self.transport)
            .field("config", &self.config)
            .field("analytics", &self.analytics)
            .finish()
    }
}

impl<T, D> SubmitterClientRef<T, D> {
    /// Client configuration.
    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }
}

impl<T> SubmitterClientConfigBuilder<T, DeserializerSerde> {
    /// Use custom responses deserializer.
    ///
    /// By default [`DeserializerSerde`] is used.
    ///
    /// [`DeserializerSerde`]: ../../providers/deserialization_serde/struct.DeserializerSerde.html
    pub fn with_deserializer<D>(self, deserializer: D) -> SubmitterClientConfigBuilder<T, D>
    where
        D: Deserializer,
    {
        SubmitterClientConfigBuilder {
            transport: self.transport,
            deserializer: Some(Arc::new(deserializer)),
            config: self.config,
            runtime: self.runtime,
            analytics: self.analytics,
        }
    }
}

impl<T, D> SubmitterClientConfigBuilder<T, D> {
    /// Set runtime environment.
    ///
    /// Runtime is used to schedule the refresh signal which follows a
    /// successful deletion. With the `tokio` feature [`RuntimeTokio`] is used
    /// by default.
    ///
    /// [`RuntimeTokio`]: ../../providers/futures_tokio/struct.RuntimeTokio.html
    pub fn with_runtime<R>(mut self, runtime: R) -> Self
    where
        R: Runtime + 'static,
    {
        self.runtime = Some(Arc::new(runtime));
        self
    }

    /// Set analytics backend.
    ///
    /// Without backend analytics events are silently dropped.
    pub fn with_analytics<S>(mut self, sink: S) -> Self
    where
        S: EventSink + 'static,
    {
        self.analytics = Some(Analytics::new(sink));
        self
    }

    /// Build a [`SubmitterClientInstance`] from the builder
    ///
    /// # Errors
    /// Returns [`SubmitterError::ClientInitialization`] when a required part
    /// (like runtime without `tokio` feature) is missing.
    pub fn build(self) -> Result<SubmitterClientInstance<SubmitterMiddleware<T>, D>, SubmitterError> {
        self.build_internal()
            .map_err(|err| SubmitterError::ClientInitialization {
                details: err.to_string(),
            })
            .map(|pre_build| {
                info!(
                    "Client Configuration: \n refresh_delay: {:?}\n include_request_id: {}\n user_agent: {}\n analytics: {}",
                    pre_build.config.refresh_delay,
                    pre_build.config.include_request_id,
                    pre_build.config.user_agent,
                    pre_build.analytics.is_enabled()
                );

                SubmitterClientRef {
                    transport: SubmitterMiddleware {
                        transport: pre_build.transport,
                        include_request_id: pre_build.config.include_request_id,
                        user_agent: pre_build.config.user_agent.clone(),
                    },
                    deserializer: pre_build.deserializer,
                    config: pre_build.config,
                    runtime: pre_build.runtime,
                    analytics: pre_build.analytics,
                }
            })
            .map(|client| SubmitterClientInstance {
                inner: Arc::new(client),
            })
    }
}

/// Submitter builder for [`SubmitterClient`]
///
/// Builder for [`SubmitterClient`] that is a first step to create a client.
/// It selects the transport, the rest of the configuration is done on the
/// returned [`SubmitterClientConfigBuilder`].
pub struct SubmitterClientBuilder;

impl SubmitterClientBuilder {
    /// Set the transport layer for the client.
    ///
    /// # Examples
    /// ```
    /// # use submitter::core::{Transport, TransportRequest, TransportResponse, SubmitterError};
    /// use submitter::SubmitterClientBuilder;
    ///
    /// # struct MyTransport;
    /// # #[async_trait::async_trait]
    /// # impl Transport for MyTransport {
    /// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, SubmitterError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    /// # fn main() -> Result<(), SubmitterError> {
    /// let client = SubmitterClientBuilder::with_transport(MyTransport).build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_transport<T>(transport: T) -> SubmitterClientConfigBuilder<T, DeserializerSerde>
    where
        T: crate::core::Transport,
    {
        SubmitterClientConfigBuilder {
            transport: Some(transport),
            deserializer: Some(Arc::new(DeserializerSerde)),
            ..Default::default()
        }
    }

    /// Set the blocking transport layer for the client.
    #[cfg(feature = "blocking")]
    pub fn with_blocking_transport<T>(
        transport: T,
    ) -> SubmitterClientConfigBuilder<T, DeserializerSerde>
    where
        T: crate::core::blocking::Transport,
    {
        SubmitterClientConfigBuilder {
            transport: Some(transport),
            deserializer: Some(Arc::new(DeserializerSerde)),
            ..Default::default()
        }
    }
}

/// Client configuration.
///
/// All fields have defaults, so only the changed ones have to be set.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use submitter::SubmitterConfigBuilder;
///
/// let config = SubmitterConfigBuilder::default()
///     .refresh_delay(Duration::from_millis(500))
///     .include_request_id(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.refresh_delay, Duration::from_millis(500));
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(pattern = "owned", default)]
pub struct SubmitterConfig {
    /// Delay between a successful deletion and the refresh signal.
    pub refresh_delay: Duration,

    /// Whether each request should carry a unique `X-Request-ID` header.
    pub include_request_id: bool,

    /// `User-Agent` header value.
    #[builder(setter(into))]
    pub user_agent: String,

    /// Notification texts.
    pub messages: Messages,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            refresh_delay: DEFAULT_REFRESH_DELAY,
            include_request_id: true,
            user_agent: format!("submitter-rust/{}", env!("CARGO_PKG_VERSION")),
            messages: Messages::default(),
        }
    }
}

/// Texts used for notifications when the response doesn't provide its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Shown after a successful submission without `message` field.
    pub success: String,

    /// Shown after a failed submission without `detail` field.
    pub failure: String,

    /// Shown when no response has been received.
    pub connection_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: "operation completed successfully".into(),
            failure: "request could not be processed".into(),
            connection_error: "connection error".into(),
        }
    }
}

impl Messages {
    /// Conventional confirmation question for removal of `label`.
    ///
    /// # Examples
    /// ```
    /// use submitter::Messages;
    ///
    /// assert_eq!(
    ///     Messages::delete_confirmation("Post 5"),
    ///     "Are you sure you want to delete \"Post 5\"? This action cannot be undone."
    /// );
    /// ```
    pub fn delete_confirmation(label: &str) -> String {
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            label
        )
    }
}
