//! This module contains the `TransportResponse` struct.
//!
//! This struct is used to represent the response received for a submission.
//! It is used as the response type for the [`Transport`] trait.
//!
//! [`Transport`]: ../transport/trait.Transport.html

/// This struct is used to represent the response received for a submission.
/// It is used as the response type for the [`Transport`] trait.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportResponse {
    /// status code of the response
    pub status: u16,

    /// body of the response
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    /// Whether status code is in `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test_case(200, true)]
    #[test_case(204, true)]
    #[test_case(299, true)]
    #[test_case(301, false)]
    #[test_case(404, false)]
    #[test_case(500, false)]
    fn classify_status(status: u16, expected: bool) {
        let response = TransportResponse {
            status,
            ..Default::default()
        };

        assert_eq!(response.is_success(), expected);
    }
}
