use std::sync::Arc;

use anyhow::Result;
use item_service::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServiceConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(address = %config.server.address(), "configuration loaded");

    let repository: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::new());
    for form in config.seed_items.iter().cloned() {
        let item = repository.save(form).await?;
        tracing::debug!(id = item.id, "seed item saved");
    }
    tracing::info!(count = config.seed_items.len(), "repository seeded");

    ServerBuilder::new()
        .with_shared_repository(repository)
        .serve(&config.server.address())
        .await
}
