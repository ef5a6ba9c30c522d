//! Published enumerations for artist records.
//!
//! Categories, locations and price tiers are closed sets: a record or a
//! filter criterion carrying any other value is rejected with
//! [`ArtistlyError::InvalidEnumValue`]. Languages are only a suggestion list
//! for forms and are never validated.
//!
//! Price tiers are opaque labels. [`price_tier`] exposes their published
//! ordinal, but neither filtering nor sorting interprets the rupee amounts.

use crate::error::{ArtistlyError, Result};

pub const CATEGORIES: [&str; 8] = [
    "Singers",
    "Dancers",
    "Speakers",
    "DJs",
    "Musicians",
    "Comedians",
    "Magicians",
    "Bands",
];

pub const LOCATIONS: [&str; 20] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Surat",
    "Lucknow",
    "Kanpur",
    "Nagpur",
    "Indore",
    "Thane",
    "Bhopal",
    "Visakhapatnam",
    "Pimpri-Chinchwad",
    "Patna",
    "Vadodara",
];

/// Price tiers in ascending order of budget.
pub const PRICE_RANGES: [&str; 6] = [
    "₹10,000 - ₹25,000",
    "₹25,000 - ₹50,000",
    "₹50,000 - ₹1,00,000",
    "₹1,00,000 - ₹2,50,000",
    "₹2,50,000 - ₹5,00,000",
    "₹5,00,000+",
];

pub const LANGUAGES: [&str; 13] = [
    "Hindi",
    "English",
    "Tamil",
    "Telugu",
    "Marathi",
    "Bengali",
    "Gujarati",
    "Kannada",
    "Malayalam",
    "Punjabi",
    "Urdu",
    "Odia",
    "Assamese",
];

/// Validates a category tag against [`CATEGORIES`].
///
/// # Examples
/// ```
/// use artistly::catalog::validate_category;
///
/// assert_eq!(validate_category("DJs").unwrap(), "DJs");
/// assert!(validate_category("djs").is_err());
/// assert!(validate_category("").is_err());
/// ```
pub fn validate_category(value: &str) -> Result<&'static str> {
    lookup(&CATEGORIES, "category", value)
}

/// Validates a place name against [`LOCATIONS`].
pub fn validate_location(value: &str) -> Result<&'static str> {
    lookup(&LOCATIONS, "location", value)
}

/// Validates a price tier label against [`PRICE_RANGES`].
pub fn validate_price_range(value: &str) -> Result<&'static str> {
    lookup(&PRICE_RANGES, "priceRange", value)
}

/// Position of a price label in [`PRICE_RANGES`], cheapest first.
pub fn price_tier(label: &str) -> Option<usize> {
    PRICE_RANGES.iter().position(|p| *p == label)
}

fn lookup(table: &[&'static str], field: &'static str, value: &str) -> Result<&'static str> {
    table
        .iter()
        .copied()
        .find(|candidate| *candidate == value)
        .ok_or_else(|| ArtistlyError::invalid_value(field, value))
}
