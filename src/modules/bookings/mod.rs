pub mod flow;
pub mod models;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use lease_booking::{
    build_messaging_deep_link, compose_booking_request, compose_payment_confirmation_message,
    compose_support_message, BookingRequest, DateRange, VehicleOffer,
};
use lease_http::error::AppError;
use lease_kernel::settings::WhatsappSettings;
use lease_kernel::{InitCtx, Module};
use lease_store::{collections, DocumentStore};

use flow::{FlowEvent, PaymentFlow};
use models::{CreateBooking, PaymentRecord, PaymentSubmission, PENDING_VERIFICATION};

#[derive(Clone)]
struct BookingsState {
    store: Arc<DocumentStore>,
    whatsapp: WhatsappSettings,
    // Wizard positions are UI session state; deliberately not persisted, so
    // abandoning the flow leaves no durable side effect.
    flows: Arc<RwLock<HashMap<String, PaymentFlow>>>,
}

/// Booking module: composes booking requests and records manual payments.
pub struct BookingsModule {
    state: BookingsState,
}

impl BookingsModule {
    pub fn new(store: Arc<DocumentStore>, whatsapp: WhatsappSettings) -> Self {
        Self {
            state: BookingsState {
                store,
                whatsapp,
                flows: Arc::new(RwLock::new(HashMap::new())),
            },
        }
    }
}

#[async_trait]
impl Module for BookingsModule {
    fn name(&self) -> &'static str {
        "bookings"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            business_number = %self.state.whatsapp.business_number,
            "bookings module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", post(create_booking))
            .route("/health", get(health_check))
            .route("/payment-options", get(payment_options))
            .route("/support-link", get(support_link))
            .route("/{booking_id}/payment", post(record_payment).get(get_payment))
            .route("/{booking_id}/flow", post(advance_flow).get(get_flow))
            .with_state(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Compose a booking request",
                        "tags": ["Bookings"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/CreateBooking"}
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Priced booking proposal with WhatsApp deep link",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/BookingRequest"}
                                    }
                                }
                            },
                            "401": {
                                "description": "Caller is not logged in",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
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
                            },
                            "422": {
                                "description": "Invalid date range or duration",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    }
                },
                "/{booking_id}/payment": {
                    "post": {
                        "summary": "Record a manual payment claim",
                        "tags": ["Bookings"],
                        "responses": {
                            "201": {
                                "description": "Payment recorded as pending_verification"
                            }
                        }
                    },
                    "get": {
                        "summary": "Fetch a persisted payment record",
                        "tags": ["Bookings"],
                        "responses": {
                            "200": {"description": "Payment record"},
                            "404": {
                                "description": "No payment recorded for this booking",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    }
                },
                "/{booking_id}/flow": {
                    "post": {
                        "summary": "Advance the payment wizard",
                        "tags": ["Bookings"],
                        "responses": {
                            "200": {"description": "New wizard state"},
                            "409": {"description": "Transition not allowed from the current step"}
                        }
                    },
                    "get": {
                        "summary": "Current payment wizard state",
                        "tags": ["Bookings"],
                        "responses": {
                            "200": {"description": "Wizard state"}
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "CreateBooking": {
                        "type": "object",
                        "properties": {
                            "vehicleId": {"type": "string"},
                            "pickupDate": {"type": "string", "format": "date"},
                            "returnDate": {"type": "string", "format": "date"}
                        },
                        "required": ["vehicleId", "pickupDate", "returnDate"]
                    },
                    "BookingRequest": {
                        "type": "object",
                        "properties": {
                            "bookingId": {"type": "string"},
                            "vehicleName": {"type": "string"},
                            "days": {"type": "integer"},
                            "dateRangeLabel": {"type": "string"},
                            "baseAmount": {"type": "integer"},
                            "serviceFee": {"type": "integer"},
                            "totalAmount": {"type": "integer"},
                            "outboundMessage": {"type": "string"},
                            "deepLink": {"type": "string", "format": "uri"}
                        },
                        "required": [
                            "bookingId", "vehicleName", "days", "dateRangeLabel",
                            "baseAmount", "serviceFee", "totalAmount",
                            "outboundMessage", "deepLink"
                        ]
                    }
                }
            }
        }))
    }
}

async fn health_check() -> &'static str {
    "bookings module is healthy"
}

/// Booking is gated on identity: the proxy in front of us resolves the
/// session and forwards the user id in `x-user-id`.
fn require_user(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::unauthorized("please login to book a vehicle"))
}

async fn create_booking(
    State(state): State<BookingsState>,
    headers: HeaderMap,
    Json(body): Json<CreateBooking>,
) -> Result<Json<BookingRequest>, AppError> {
    let user_id = require_user(&headers)?;

    let document = state
        .store
        .get(collections::VEHICLES, &body.vehicle_id)
        .await?;
    let offer: VehicleOffer =
        serde_json::from_value(document).map_err(|err| AppError::Internal(err.into()))?;

    let today = OffsetDateTime::now_utc().date();
    let range = DateRange::parse(&body.pickup_date, &body.return_date, today)?;
    let request = compose_booking_request(&offer, &range, &state.whatsapp.business_number)?;

    tracing::info!(
        user_id = %user_id,
        booking_id = %request.booking_id,
        vehicle = %request.vehicle_name,
        total_amount = request.total_amount,
        "booking request composed"
    );

    Ok(Json(request))
}

async fn record_payment(
    State(state): State<BookingsState>,
    Path(booking_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<PaymentSubmission>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let user_id = require_user(&headers)?;

    let record = PaymentRecord {
        booking_id: booking_id.clone(),
        user_id,
        payment_method: body.payment_method.clone(),
        amount: body.amount,
        payment_proof_ref: body.payment_proof_ref.clone(),
        status: PENDING_VERIFICATION.to_string(),
    };
    state
        .store
        .set(
            collections::PAYMENTS,
            &booking_id,
            serde_json::to_value(&record).map_err(|err| AppError::Internal(err.into()))?,
        )
        .await?;
    state
        .flows
        .write()
        .await
        .insert(booking_id.clone(), PaymentFlow::Complete);

    let message = compose_payment_confirmation_message(
        &booking_id,
        body.amount,
        &body.payment_method,
        body.transaction_id.as_deref(),
    );
    let confirmation_link =
        build_messaging_deep_link(&state.whatsapp.business_number, &message)?;

    tracing::info!(booking_id = %booking_id, "payment recorded, pending verification");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "record": record,
            "confirmationLink": confirmation_link,
        })),
    ))
}

async fn get_payment(
    State(state): State<BookingsState>,
    Path(booking_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let document = state.store.get(collections::PAYMENTS, &booking_id).await?;
    Ok(Json(document))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlowStatus {
    booking_id: String,
    flow: PaymentFlow,
}

#[derive(Debug, Deserialize)]
struct AdvanceFlow {
    event: FlowEvent,
}

async fn get_flow(
    State(state): State<BookingsState>,
    Path(booking_id): Path<String>,
) -> Json<FlowStatus> {
    let flow = state
        .flows
        .read()
        .await
        .get(&booking_id)
        .copied()
        .unwrap_or_default();
    Json(FlowStatus { booking_id, flow })
}

async fn advance_flow(
    State(state): State<BookingsState>,
    Path(booking_id): Path<String>,
    Json(body): Json<AdvanceFlow>,
) -> Result<Json<FlowStatus>, AppError> {
    let mut flows = state.flows.write().await;
    let current = flows.get(&booking_id).copied().unwrap_or_default();
    let next = current
        .apply(body.event)
        .map_err(|err| AppError::conflict(vec![], err.to_string()))?;
    flows.insert(booking_id.clone(), next);
    Ok(Json(FlowStatus {
        booking_id,
        flow: next,
    }))
}

async fn payment_options(State(state): State<BookingsState>) -> Json<serde_json::Value> {
    Json(json!({
        "upiId": state.whatsapp.upi_id,
        "whatsappNumber": state.whatsapp.business_number,
    }))
}

#[derive(Debug, Deserialize)]
struct SupportQuery {
    issue: Option<String>,
}

async fn support_link(
    State(state): State<BookingsState>,
    Query(query): Query<SupportQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let message = compose_support_message(query.issue.as_deref());
    let deep_link = build_messaging_deep_link(&state.whatsapp.support_number, &message)?;
    Ok(Json(json!({ "deepLink": deep_link })))
}

/// Create a new instance of the bookings module.
pub fn create_module(store: Arc<DocumentStore>, whatsapp: WhatsappSettings) -> Arc<dyn Module> {
    Arc::new(BookingsModule::new(store, whatsapp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use time::macros::format_description;
    use time::Duration;
    use tower::ServiceExt;

    async fn seeded_module() -> BookingsModule {
        let store = Arc::new(DocumentStore::new());
        store
            .set(
                collections::VEHICLES,
                "vehicle-1",
                json!({
                    "id": "vehicle-1",
                    "name": "Honda Activa 6G",
                    "pricePerDay": 299,
                    "location": "Mumbai, Maharashtra"
                }),
            )
            .await
            .unwrap();
        BookingsModule::new(store, WhatsappSettings::default())
    }

    fn iso(date: time::Date) -> String {
        date.format(format_description!("[year]-[month]-[day]"))
            .unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .header("x-user-id", "user-1")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn booking_requires_a_logged_in_user() {
        let module = seeded_module().await;
        let request = Request::post("/")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "vehicleId": "vehicle-1",
                    "pickupDate": "2099-01-15",
                    "returnDate": "2099-01-18"
                })
                .to_string(),
            ))
            .unwrap();
        let response = module.routes().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn three_day_rental_is_priced_end_to_end() {
        let module = seeded_module().await;
        let today = OffsetDateTime::now_utc().date();
        let pickup = iso(today + Duration::days(1));
        let handback = iso(today + Duration::days(4));

        let response = module
            .routes()
            .oneshot(post_json(
                "/",
                json!({
                    "vehicleId": "vehicle-1",
                    "pickupDate": pickup,
                    "returnDate": handback
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["days"], 3);
        assert_eq!(body["baseAmount"], 897);
        assert_eq!(body["serviceFee"], 99);
        assert_eq!(body["totalAmount"], 996);
        assert_eq!(body["vehicleName"], "Honda Activa 6G");
        assert_eq!(body["dateRangeLabel"], format!("{pickup} to {handback}"));
        let booking_id = body["bookingId"].as_str().unwrap();
        assert!(booking_id.starts_with("LL"));
        let deep_link = body["deepLink"].as_str().unwrap();
        assert!(deep_link.starts_with("https://wa.me/919876543210?text="));
    }

    #[tokio::test]
    async fn same_day_rental_is_rejected_with_a_coded_422() {
        let module = seeded_module().await;
        let today = OffsetDateTime::now_utc().date();
        let date = iso(today + Duration::days(1));

        let response = module
            .routes()
            .oneshot(post_json(
                "/",
                json!({
                    "vehicleId": "vehicle-1",
                    "pickupDate": date,
                    "returnDate": date
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "invalid_date_range");
    }

    #[tokio::test]
    async fn unknown_vehicle_is_a_404() {
        let module = seeded_module().await;
        let response = module
            .routes()
            .oneshot(post_json(
                "/",
                json!({
                    "vehicleId": "no-such-vehicle",
                    "pickupDate": "2099-01-15",
                    "returnDate": "2099-01-18"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn payment_roundtrip_lands_pending_verification() {
        let module = seeded_module().await;

        let response = module
            .routes()
            .oneshot(post_json(
                "/LL17052768000007/payment",
                json!({
                    "paymentMethod": "whatsapp",
                    "amount": 996,
                    "paymentProofRef": "uploads/proof.png"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["record"]["status"], "pending_verification");
        assert!(body["confirmationLink"]
            .as_str()
            .unwrap()
            .contains("Payment%20Confirmation"));

        let response = module
            .routes()
            .oneshot(
                Request::get("/LL17052768000007/payment")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stored = body_json(response).await;
        assert_eq!(stored["status"], "pending_verification");
        assert_eq!(stored["paymentProofRef"], "uploads/proof.png");
    }

    #[tokio::test]
    async fn missing_payment_record_is_a_404() {
        let module = seeded_module().await;
        let response = module
            .routes()
            .oneshot(Request::get("/LL0/payment").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wizard_advances_in_order_and_rejects_skips() {
        let module = seeded_module().await;
        let routes = module.routes();

        let response = routes
            .clone()
            .oneshot(post_json(
                "/LL1/flow",
                json!({"event": "contact_shared"}),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["flow"], "awaiting_payment");

        // Proof cannot be uploaded before payment is sent.
        let response = routes
            .clone()
            .oneshot(post_json(
                "/LL1/flow",
                json!({"event": "proof_uploaded"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = routes
            .oneshot(Request::get("/LL1/flow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["flow"], "awaiting_payment");
    }

    #[tokio::test]
    async fn support_link_uses_the_generic_fallback() {
        let module = seeded_module().await;
        let response = module
            .routes()
            .oneshot(
                Request::get("/support-link")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        let link = body["deepLink"].as_str().unwrap();
        assert!(link.starts_with("https://wa.me/919876543210?text=Hi!%20I%20need%20help"));
    }
}
