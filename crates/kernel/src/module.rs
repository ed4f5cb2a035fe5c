use async_trait::async_trait;
use axum::Router;

/// Context provided to modules during initialization and startup.
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Core trait every feature module implements.
///
/// Modules own their routes and their slice of the OpenAPI document; the
/// kernel only sequences their lifecycle and mounts them under
/// `/api/{module_name}`.
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module.
    fn name(&self) -> &'static str;

    /// Initialize the module. Called during application startup, before any
    /// traffic is served; seeding persistent data belongs here.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Axum router for this module's routes, mounted under
    /// `/api/{module_name}`.
    fn routes(&self) -> Router {
        Router::new()
    }

    /// OpenAPI specification fragment for this module as JSON, merged with
    /// other modules' fragments by the HTTP layer.
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Start background tasks. Called after every module initialized.
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Stop the module and clean up resources during shutdown.
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
