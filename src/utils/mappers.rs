use crate::data::models::product::{Badge, Category};
use crate::services::catalog_service::{CategoryFilter, StatusFilter};
use std::str::FromStr;

impl From<String> for Badge {
    fn from(text: String) -> Self {
        match text.to_uppercase().as_str() {
            "NEW" => Badge::New,
            "SALE" => Badge::Sale,
            "PRE-ORDER" => Badge::PreOrder,
            _ => Badge::Custom(text),
        }
    }
}

impl From<Badge> for String {
    fn from(badge: Badge) -> Self {
        badge.as_str().to_string()
    }
}

impl TryFrom<&str> for Category {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "living room" => Ok(Category::LivingRoom),
            "bedroom" => Ok(Category::Bedroom),
            "dining room" => Ok(Category::DiningRoom),
            "office" => Ok(Category::Office),
            _ => Err("Unknown category"),
        }
    }
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::try_from(s)
    }
}

/// Parses the sidebar's category radio values, where "All" clears the filter.
impl FromStr for CategoryFilter {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

/// Parses the sidebar's status radio values ("all", "available", "preorder").
impl FromStr for StatusFilter {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "available" => Ok(StatusFilter::Available),
            "preorder" => Ok(StatusFilter::Preorder),
            _ => Err("Unknown status filter"),
        }
    }
}
