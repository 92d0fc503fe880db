mod common;

#[cfg(test)]
mod integration {
    use super::common::{init_logger, Recorder};
    use std::time::Duration;
    use submitter::{
        core::Severity, transport::TransportReqwest, DeleteOutcome, Messages, SubmissionResult,
        SubmitterClientBuilder, SubmitterConfigBuilder,
    };
    use tokio::sync::mpsc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Confirmed deletion is followed by one refresh signal.
    #[tokio::test]
    async fn should_delete_and_refresh() -> Result<(), Box<dyn std::error::Error>> {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/posts/5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"message":"Item excluido com sucesso!"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel();
        let recorder = Recorder::default();
        let client =
            SubmitterClientBuilder::with_transport(TransportReqwest::with_base_url(server.uri()))
                .with_config(
                    SubmitterConfigBuilder::default()
                        .refresh_delay(Duration::from_millis(50))
                        .build()?,
                )
                .build()?;

        let outcome = client
            .confirm_then_delete("/api/posts/5", "Post 5")
            .confirm_with(|label: &str| {
                Messages::delete_confirmation(label).contains("\"Post 5\"")
            })
            .notify(recorder.sink())
            .on_refresh(move || {
                let _ = refresh_tx.send(());
            })
            .execute()
            .await?;

        assert!(matches!(
            outcome,
            DeleteOutcome::Completed(SubmissionResult::Ok { .. })
        ));
        assert_eq!(
            recorder.received(),
            vec![("Item excluido com sucesso!".to_string(), Severity::Success)]
        );

        let refreshed = tokio::time::timeout(Duration::from_secs(2), refresh_rx.recv()).await?;
        assert_eq!(refreshed, Some(()));
        Ok(())
    }

    /// Declined deletion doesn't touch the network.
    #[tokio::test]
    async fn should_cancel_without_request() -> Result<(), Box<dyn std::error::Error>> {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let recorder = Recorder::default();
        let client =
            SubmitterClientBuilder::with_transport(TransportReqwest::with_base_url(server.uri()))
                .build()?;

        let outcome = client
            .confirm_then_delete("/api/posts/5", "Post 5")
            .confirm_with(|_: &str| false)
            .notify(recorder.sink())
            .execute()
            .await?;

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(recorder.received().is_empty());
        Ok(())
    }

    /// Rejected deletion doesn't refresh.
    #[tokio::test]
    async fn should_not_refresh_after_rejection() -> Result<(), Box<dyn std::error::Error>> {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/posts/5"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"detail":"Item nao encontrado"}"#),
            )
            .mount(&server)
            .await;

        let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel::<()>();
        let recorder = Recorder::default();
        let client =
            SubmitterClientBuilder::with_transport(TransportReqwest::with_base_url(server.uri()))
                .with_config(
                    SubmitterConfigBuilder::default()
                        .refresh_delay(Duration::from_millis(10))
                        .build()?,
                )
                .build()?;

        let outcome = client
            .confirm_then_delete("/api/posts/5", "Post 5")
            .confirm_with(|_: &str| true)
            .notify(recorder.sink())
            .on_refresh(move || {
                let _ = refresh_tx.send(());
            })
            .execute()
            .await?;

        assert_eq!(
            outcome,
            DeleteOutcome::Completed(SubmissionResult::Failed {
                status_code: Some(404),
                detail: Some("Item nao encontrado".into()),
            })
        );
        assert_eq!(
            recorder.received(),
            vec![("Item nao encontrado".to_string(), Severity::Danger)]
        );
        // Sender is dropped together with the builder, nothing was scheduled.
        assert_eq!(refresh_rx.recv().await, None);
        Ok(())
    }
}
