pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::VenueApiClient;
pub use crate::config::{CliConfig, ServiceConfig};
pub use crate::core::{calculator::DeliveryPriceCalculator, service::DeliveryPriceService};
pub use crate::domain::model::{DeliveryPriceRequest, DeliveryPriceResponse};
pub use crate::domain::venue::VenueRegistry;
pub use crate::utils::error::{PricingError, Result};
