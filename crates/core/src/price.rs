//! Price codec between the numeric lakhs representation and the localized
//! display string.
//!
//! Listings store prices as a number of lakhs (1 lakh = 100,000 units; 100
//! lakhs = 1 crore). The display form is `₹50.0L` below one crore and
//! `₹1.20Cr` at or above it. The transform is lossy: a crore-scale value is
//! kept to two decimal places, so round-trips are only exact to ±0.01 Cr.

/// Error parsing a price display string back into lakhs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid price string: {input:?}")]
pub struct ParsePriceError {
    pub input: String,
}

/// Render a price in lakhs as its display string.
///
/// Values of 100 lakhs (1 crore) and above render as crores with two
/// decimal places; everything below renders as lakhs with one.
///
/// # Examples
///
/// ```
/// use basera_core::price::display_price;
///
/// assert_eq!(display_price(50.0), "₹50.0L");
/// assert_eq!(display_price(99.9), "₹99.9L");
/// assert_eq!(display_price(120.0), "₹1.20Cr");
/// ```
pub fn display_price(price_in_lakhs: f64) -> String {
    if price_in_lakhs >= 100.0 {
        format!("₹{:.2}Cr", price_in_lakhs / 100.0)
    } else {
        format!("₹{:.1}L", price_in_lakhs)
    }
}

/// Parse a display string back into a price in lakhs.
///
/// Strips the currency symbol and thousands separators, then interprets a
/// `Cr` suffix as crores (×100) and an `L` suffix as lakhs. A bare number
/// is taken as lakhs directly.
pub fn parse_price(display: &str) -> Result<f64, ParsePriceError> {
    let err = || ParsePriceError {
        input: display.to_string(),
    };

    let cleaned: String = display
        .trim()
        .chars()
        .filter(|c| *c != '₹' && *c != ',')
        .collect();

    let (number, scale) = if let Some(prefix) = cleaned.strip_suffix("Cr") {
        (prefix, 100.0)
    } else if let Some(prefix) = cleaned.strip_suffix('L') {
        (prefix, 1.0)
    } else {
        (cleaned.as_str(), 1.0)
    };

    let value: f64 = number.trim().parse().map_err(|_| err())?;
    Ok(value * scale)
}
