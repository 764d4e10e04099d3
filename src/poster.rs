use crate::clock;
use crate::post::build_post;
use crate::transport::Transport;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Composes one post and hands it to the transport. One submission per call,
/// no dedup and no retry; a transport failure goes back to the caller.
#[derive(Clone)]
pub struct Poster {
    transport: Arc<dyn Transport>,
}

impl Poster {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn send_post(&self, label: &str) -> Result<()> {
        let text = build_post(label, clock::now_msk());
        info!("sending {} post to the channel", label);
        self.transport.send_text(&text).await?;
        info!("post sent");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every text it is asked to deliver.
    pub(crate) struct RecordingTransport {
        pub sent: Mutex<Vec<String>>,
    }

    impl RecordingTransport {
        pub fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send_text(&self, text: &str) -> Result<()> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    /// Fails every delivery with a fixed error.
    pub(crate) struct DownTransport;

    #[async_trait]
    impl Transport for DownTransport {
        async fn send_text(&self, _text: &str) -> Result<()> {
            anyhow::bail!("network down")
        }
    }

    #[tokio::test]
    async fn send_post_submits_exactly_one_composed_message() {
        let transport = RecordingTransport::new();
        let poster = Poster::new(transport.clone());

        poster.send_post("morning").await.unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("утренний бриф"));
        assert!(sent[0].contains("#АПЛ"));
    }

    #[tokio::test]
    async fn transport_failure_propagates_to_the_caller() {
        let poster = Poster::new(Arc::new(DownTransport));
        let err = poster.send_post("now").await.unwrap_err();
        assert!(err.to_string().contains("network down"));
    }
}
