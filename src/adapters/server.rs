use crate::core::service::DeliveryPriceService;
use crate::domain::model::DeliveryPriceResponse;
use crate::domain::ports::VenueDataProvider;
use crate::utils::error::{ErrorCategory, PricingError, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn price_path(api_version: &str) -> String {
    format!("/api/{}/delivery-order-price", api_version)
}

pub fn router<P>(service: DeliveryPriceService<P>, api_version: &str) -> Router
where
    P: VenueDataProvider + 'static,
{
    Router::new()
        .route(&price_path(api_version), get(delivery_order_price::<P>))
        .route("/health", get(health_handler))
        .with_state(Arc::new(service))
}

/// Serves until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(addr = %addr, "Delivery pricing server started");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("Delivery pricing server stopped");
    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

async fn delivery_order_price<P>(
    State(service): State<Arc<DeliveryPriceService<P>>>,
    Query(params): Query<HashMap<String, String>>,
) -> std::result::Result<Json<DeliveryPriceResponse>, PricingError>
where
    P: VenueDataProvider + 'static,
{
    let query = PriceQuery::from_params(&params)?;
    let response = service
        .quote_raw(
            &query.venue_slug,
            query.cart_value,
            query.user_lat,
            query.user_lon,
        )
        .await?;
    Ok(Json(response))
}

/// Query parameters before domain validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuery {
    pub venue_slug: String,
    pub cart_value: i64,
    pub user_lat: f64,
    pub user_lon: f64,
}

impl PriceQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            venue_slug: required(params, "venue_slug")?.to_string(),
            cart_value: parsed(params, "cart_value")?,
            user_lat: parsed(params, "user_lat")?,
            user_lon: parsed(params, "user_lon")?,
        })
    }
}

fn required<'a>(params: &'a HashMap<String, String>, name: &str) -> Result<&'a str> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| PricingError::validation(name, format!("Parameter '{}' is missing", name)))
}

fn parsed<T: FromStr>(params: &HashMap<String, String>, name: &str) -> Result<T> {
    let raw = required(params, name)?;
    raw.trim().parse::<T>().map_err(|_| {
        PricingError::validation(
            name,
            format!("Invalid value '{}' for parameter '{}'", raw, name),
        )
    })
}

impl PricingError {
    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Client | ErrorCategory::Business => StatusCode::BAD_REQUEST,
            ErrorCategory::Gateway => StatusCode::BAD_GATEWAY,
            ErrorCategory::Data | ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = BTreeMap::new();
        match &self {
            PricingError::Validation { field, message } => {
                body.insert(field.clone(), message.clone());
            }
            other => {
                body.insert("error".to_string(), other.user_friendly_message());
            }
        }
        (status, Json(body)).into_response()
    }
}
