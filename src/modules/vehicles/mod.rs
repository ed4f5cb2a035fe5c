pub mod catalog;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::json;

use lease_http::error::AppError;
use lease_kernel::{InitCtx, Module};
use lease_store::{collections, DocumentStore};

use catalog::{browse, CatalogPage, CatalogQuery};
use models::Vehicle;

#[derive(Clone)]
struct VehiclesState {
    store: Arc<DocumentStore>,
    page_size: u32,
}

/// Catalog module: seeds the fleet and serves browse/detail endpoints.
pub struct VehiclesModule {
    state: VehiclesState,
}

impl VehiclesModule {
    pub fn new(store: Arc<DocumentStore>, page_size: u32) -> Self {
        Self {
            state: VehiclesState { store, page_size },
        }
    }
}

#[async_trait]
impl Module for VehiclesModule {
    fn name(&self) -> &'static str {
        "vehicles"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let fleet = models::demo_fleet();
        for vehicle in &fleet {
            self.state
                .store
                .set(
                    collections::VEHICLES,
                    &vehicle.id,
                    serde_json::to_value(vehicle)?,
                )
                .await?;
        }
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            vehicles = fleet.len(),
            "vehicles module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_vehicles))
            .route("/health", get(health_check))
            .route("/{id}", get(get_vehicle))
            .with_state(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Browse vehicles",
                        "tags": ["Vehicles"],
                        "parameters": [
                            {"name": "search", "in": "query", "schema": {"type": "string"}},
                            {"name": "type", "in": "query", "schema": {"type": "string"}},
                            {"name": "brand", "in": "query", "schema": {"type": "string"}},
                            {"name": "minRating", "in": "query", "schema": {"type": "number"}},
                            {"name": "minPrice", "in": "query", "schema": {"type": "integer"}},
                            {"name": "maxPrice", "in": "query", "schema": {"type": "integer"}},
                            {"name": "sort", "in": "query", "schema": {
                                "type": "string",
                                "enum": ["name", "price-low", "price-high", "rating"]
                            }},
                            {"name": "page", "in": "query", "schema": {"type": "integer", "minimum": 1}}
                        ],
                        "responses": {
                            "200": {
                                "description": "One page of browse results",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/CatalogPage"}
                                    }
                                }
                            }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Vehicle details",
                        "tags": ["Vehicles"],
                        "parameters": [
                            {"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}
                        ],
                        "responses": {
                            "200": {
                                "description": "Vehicle record",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/Vehicle"}
                                    }
                                }
                            },
                            "404": {
                                "description": "Unknown vehicle",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Vehicle": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "string"},
                            "name": {"type": "string"},
                            "type": {"type": "string"},
                            "brand": {"type": "string"},
                            "pricePerDay": {"type": "integer"},
                            "rating": {"type": "number"},
                            "reviews": {"type": "integer"},
                            "location": {"type": "string"},
                            "features": {"type": "array", "items": {"type": "string"}}
                        },
                        "required": ["id", "name", "type", "brand", "pricePerDay"]
                    },
                    "CatalogPage": {
                        "type": "object",
                        "properties": {
                            "vehicles": {"type": "array", "items": {"$ref": "#/components/schemas/Vehicle"}},
                            "total": {"type": "integer"},
                            "page": {"type": "integer"},
                            "totalPages": {"type": "integer"}
                        },
                        "required": ["vehicles", "total", "page", "totalPages"]
                    }
                }
            }
        }))
    }
}

async fn health_check() -> &'static str {
    "vehicles module is healthy"
}

async fn list_vehicles(
    State(state): State<VehiclesState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogPage>, AppError> {
    let documents = state.store.list(collections::VEHICLES).await;
    let vehicles: Vec<Vehicle> = documents
        .into_iter()
        .filter_map(|doc| serde_json::from_value(doc).ok())
        .collect();
    Ok(Json(browse(vehicles, &query, state.page_size)))
}

async fn get_vehicle(
    State(state): State<VehiclesState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let document = state.store.get(collections::VEHICLES, &id).await?;
    let vehicle =
        serde_json::from_value(document).map_err(|err| AppError::Internal(err.into()))?;
    Ok(Json(vehicle))
}

/// Create a new instance of the vehicles module.
pub fn create_module(store: Arc<DocumentStore>, page_size: u32) -> Arc<dyn Module> {
    Arc::new(VehiclesModule::new(store, page_size))
}
