//! Deserialization of response bodies.
//!
//! This module contains the `Deserializer` trait which is used to turn raw
//! response bytes into structured data.

use super::SubmitterError;

/// Trait for deserializing response bodies.
///
/// It is used by the [`dx`] modules to parse the JSON documents returned by
/// the server after a submission.
///
/// To implement this trait, you must provide a `deserialize` method that
/// takes a `&[u8]` and returns a `Result<T, SubmitterError>`.
///
/// # Examples
/// ```
/// use submitter::core::{Deserializer, SubmitterError};
///
/// struct MyDeserializer;
///
/// impl Deserializer for MyDeserializer {
///    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, SubmitterError>
///    where
///        T: for<'de> serde::Deserialize<'de>,
///    {
///         // ...
///         # unimplemented!()
///    }
/// }
/// ```
///
/// [`dx`]: ../dx/index.html
pub trait Deserializer: Send + Sync {
    /// Deserialize a `&[u8]` into a `Result<T, SubmitterError>`.
    ///
    /// # Errors
    /// Should return [`SubmitterError::Deserialization`] when bytes are not a
    /// valid document.
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, SubmitterError>
    where
        T: for<'de> serde::Deserialize<'de>;
}
