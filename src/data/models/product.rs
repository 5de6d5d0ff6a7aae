use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Showroom sections the storefront filters on
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    #[serde(rename = "Living Room")]
    LivingRoom,
    #[serde(rename = "Bedroom")]
    Bedroom,
    #[serde(rename = "Dining Room")]
    DiningRoom,
    #[serde(rename = "Office")]
    Office,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LivingRoom => "Living Room",
            Category::Bedroom => "Bedroom",
            Category::DiningRoom => "Dining Room",
            Category::Office => "Office",
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::LivingRoom,
            Category::Bedroom,
            Category::DiningRoom,
            Category::Office,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stock state of a product. Stock counts only exist for items on the floor;
/// an arrival date only exists for pre-orders.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Availability {
    Available { stock: u32 },
    Preorder { expected_date: NaiveDate },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available { .. })
    }

    pub fn is_preorder(&self) -> bool {
        matches!(self, Availability::Preorder { .. })
    }
}

/// Promotional tag shown on product cards. Display-only, never filtered on.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(from = "String", into = "String")]
pub enum Badge {
    New,
    Sale,
    PreOrder,
    Custom(String),
}

impl Badge {
    pub fn as_str(&self) -> &str {
        match self {
            Badge::New => "NEW",
            Badge::Sale => "SALE",
            Badge::PreOrder => "PRE-ORDER",
            Badge::Custom(text) => text,
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: Category,
    pub price: BigDecimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_price: Option<BigDecimal>,
    pub rating: u8,
    pub reviews: u32,
    #[serde(flatten)]
    pub availability: Availability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub description: String,
    pub material: String,
    pub dimensions: String,
    pub color: String,
    pub image_uri: String,
}

impl Product {
    /// Discount amount against the struck-through price, if any.
    pub fn savings(&self) -> Option<BigDecimal> {
        self.old_price.as_ref().map(|old| old - &self.price)
    }
}
