#[derive(Debug, PartialEq, Eq)]
pub enum CatalogError {
    NonPositivePrice { id: i32 },
    InvalidDiscount { id: i32 },
    RatingOutOfRange { id: i32 },
    DuplicateId { id: i32 },
}

impl std::error::Error for CatalogError {}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::NonPositivePrice { id } => {
                write!(f, "Product {} has a non-positive price", id)
            }
            CatalogError::InvalidDiscount { id } => {
                write!(f, "Product {} has an old price at or below its current price", id)
            }
            CatalogError::RatingOutOfRange { id } => {
                write!(f, "Product {} has a rating above 5", id)
            }
            CatalogError::DuplicateId { id } => {
                write!(f, "Product id {} appears more than once", id)
            }
        }
    }
}
