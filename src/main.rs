use std::sync::Arc;

use anyhow::Context;
use lease_app::modules;
use lease_kernel::{settings::Settings, InitCtx, ModuleRegistry};
use lease_store::DocumentStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load LivinLease settings")?;
    lease_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        "livinlease bootstrap starting"
    );

    let store = Arc::new(DocumentStore::new());
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &settings, store);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!("livinlease bootstrap complete");

    lease_http::start_server(&registry, &settings).await?;

    registry.stop_all().await?;
    Ok(())
}
