use std::time::Duration;
use async_trait::async_trait;
use robata::{Processor, ProcessorError};

/// Slow suffixing model; the latency makes the demand-driven batch sizes
/// visible when many clients submit at once.
pub struct Model;

#[async_trait]
impl Processor<String, String> for Model {
    async fn process(&self, inputs: Vec<String>) -> Result<Vec<String>, ProcessorError> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        println!("processing batch of {}", inputs.len());
        Ok(inputs
            .into_iter()
            .map(|item| format!("{item}-result"))
            .collect())
    }
}
