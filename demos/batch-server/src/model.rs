use std::time::Duration;
use async_trait::async_trait;
use robata::{Processor, ProcessorError};
use tracing::info;

/// Stand-in for a real model: simulated inference latency, then one
/// suffixed output per input.
#[derive(Clone)]
pub struct DummyInference {
    latency: Duration,
}

impl DummyInference {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(500),
        }
    }
}

#[async_trait]
impl Processor<String, String> for DummyInference {
    async fn process(&self, inputs: Vec<String>) -> Result<Vec<String>, ProcessorError> {
        tokio::time::sleep(self.latency).await;
        info!(batch_size = inputs.len(), "dummy inference");
        Ok(inputs
            .into_iter()
            .map(|item| format!("{item}-result"))
            .collect())
    }
}
