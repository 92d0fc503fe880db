//! Serde implementation for submitter [`Deserializer`] trait.
//!
//! This module provides a `serde_json` deserializer for response bodies.
//!
//! [`Deserializer`]: ../../core/trait.Deserializer.html

use crate::core::{Deserializer, SubmitterError};

/// Serde implementation for submitter [`Deserializer`] trait.
///
/// This struct implements the [`Deserializer`] trait for the [`serde`] crate.
/// It is used by the [`dx`] modules to deserialize the data returned after a
/// submission.
///
/// [`Deserializer`]: ../../core/trait.Deserializer.html
/// [`serde`]: https://crates.io/crates/serde
/// [`dx`]: ../../dx/index.html
#[derive(Debug, Clone, Copy, Default)]
pub struct DeserializerSerde;

impl Deserializer for DeserializerSerde {
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, SubmitterError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        serde_json::from_slice(bytes).map_err(|e| SubmitterError::Deserialization {
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Foo {
        message: String,
    }

    #[test]
    fn deserialize() {
        let sut = DeserializerSerde;

        let result: Foo = sut.deserialize(b"{\"message\":\"saved\"}").unwrap();

        assert_eq!(
            result,
            Foo {
                message: "saved".to_string()
            }
        );
    }

    #[test]
    fn report_malformed_document() {
        let sut = DeserializerSerde;

        let result: Result<serde_json::Value, _> = sut.deserialize(b"<html>oops</html>");

        assert!(matches!(
            result,
            Err(SubmitterError::Deserialization { .. })
        ));
    }
}
