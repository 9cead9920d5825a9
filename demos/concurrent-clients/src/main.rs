mod model;

use std::sync::Arc;
use robata::{BatchConfig, BatchInference};
use crate::model::Model;

#[tokio::main]
async fn main() {
    let batcher = Arc::new(BatchInference::new(Model, BatchConfig::new(8)));

    let handles = (0..100)
        .map(|i| {
            let batcher = batcher.clone();
            tokio::spawn(async move {
                let result = batcher.submit(format!("client-{i}")).await;
                println!("client {i} got {result:?}");
            })
        })
        .collect::<Vec<_>>();

    for handle in futures::future::join_all(handles).await {
        if let Err(e) = handle {
            println!("error joining client task: {e:?}");
        }
    }
}
