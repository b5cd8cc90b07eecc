pub mod calculator;
pub mod geo;
pub mod pricing;
pub mod service;
pub mod tiers;

pub use crate::domain::model::{
    DeliveryPriceRequest, DeliveryPriceResponse, VenueDynamicData, VenueStaticData,
};
pub use crate::domain::ports::{ConfigProvider, VenueDataProvider};
pub use crate::utils::error::Result;
