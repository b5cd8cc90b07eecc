use crate::utils::error::{PricingError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PricingError::validation(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PricingError::validation(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(PricingError::validation(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>().map_err(|e| {
        PricingError::validation(
            field_name,
            format!("Invalid socket address '{}': {}", addr, e),
        )
    })
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PricingError::validation(
            field_name,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PricingError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Rejects values below `min`. `label` is the human name used in the message.
pub fn validate_at_least<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    label: &str,
    value: T,
    min: T,
) -> Result<()> {
    if value < min {
        return Err(PricingError::validation(
            field_name,
            format!("{} must be equal or greater than {}", label, min),
        ));
    }
    Ok(())
}

/// Inclusive range check. NaN never passes.
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    label: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(PricingError::validation(
            field_name,
            format!(
                "{} must be greater than or equal to {} and less than or equal to {}",
                label, min, max
            ),
        ));
    }
    Ok(())
}
