use crate::data::models::product::{Availability, Badge, Category, Product};
use crate::services::errors::CatalogError;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::collections::HashSet;

/// The static product collection the storefront browses. Validated once on
/// construction; read-only afterwards.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting products that break the pricing or rating
    /// invariants and collections with duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Catalog, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if product.price <= BigDecimal::from(0) {
                return Err(CatalogError::NonPositivePrice { id: product.id });
            }
            if let Some(old_price) = &product.old_price {
                if *old_price <= product.price {
                    return Err(CatalogError::InvalidDiscount { id: product.id });
                }
            }
            if product.rating > 5 {
                return Err(CatalogError::RatingOutOfRange { id: product.id });
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId { id: product.id });
            }
        }
        Ok(Catalog { products })
    }

    /// Products in catalog order. Lower ids are older stock; the highest id
    /// is the newest arrival.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get_by_id(&self, id: i32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The bundled showroom dataset used when no external product source is
    /// wired in.
    pub fn demo() -> Catalog {
        Catalog::new(demo_products()).expect("bundled demo catalog must pass validation")
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Velvet Curve Sofa".to_string(),
            category: Category::LivingRoom,
            price: BigDecimal::from(1299),
            old_price: Some(BigDecimal::from(1599)),
            rating: 5,
            reviews: 128,
            availability: Availability::Available { stock: 12 },
            badge: Some(Badge::Sale),
            description: "Three-seater sofa with a sculpted back and deep cushions.".to_string(),
            material: "Velvet, kiln-dried hardwood".to_string(),
            dimensions: "220 x 95 x 80 cm".to_string(),
            color: "Forest Green".to_string(),
            image_uri: "/images/velvet-curve-sofa.jpg".to_string(),
        },
        Product {
            id: 2,
            name: "Oslo Oak Coffee Table".to_string(),
            category: Category::LivingRoom,
            price: BigDecimal::from(449),
            old_price: None,
            rating: 4,
            reviews: 86,
            availability: Availability::Available { stock: 25 },
            badge: None,
            description: "Low-profile table with rounded corners and a shelf.".to_string(),
            material: "Solid oak".to_string(),
            dimensions: "110 x 60 x 42 cm".to_string(),
            color: "Natural Oak".to_string(),
            image_uri: "/images/oslo-coffee-table.jpg".to_string(),
        },
        Product {
            id: 3,
            name: "Egg-shaped Accent Chair".to_string(),
            category: Category::LivingRoom,
            price: BigDecimal::from(689),
            old_price: None,
            rating: 5,
            reviews: 54,
            availability: Availability::Available { stock: 8 },
            badge: Some(Badge::New),
            description: "Swivel accent chair with a wraparound shell.".to_string(),
            material: "Boucle, powder-coated steel".to_string(),
            dimensions: "85 x 80 x 100 cm".to_string(),
            color: "Cream".to_string(),
            image_uri: "/images/egg-accent-chair.jpg".to_string(),
        },
        Product {
            id: 4,
            name: "Haven Upholstered Bed".to_string(),
            category: Category::Bedroom,
            price: BigDecimal::from(1899),
            old_price: None,
            rating: 5,
            reviews: 203,
            availability: Availability::Available { stock: 6 },
            badge: None,
            description: "King bed with a tall channel-tufted headboard.".to_string(),
            material: "Linen blend, pine frame".to_string(),
            dimensions: "200 x 210 x 130 cm".to_string(),
            color: "Stone Grey".to_string(),
            image_uri: "/images/haven-bed.jpg".to_string(),
        },
        Product {
            id: 5,
            name: "Floating Walnut Nightstand".to_string(),
            category: Category::Bedroom,
            price: BigDecimal::from(239),
            old_price: Some(BigDecimal::from(289)),
            rating: 4,
            reviews: 77,
            availability: Availability::Available { stock: 30 },
            badge: Some(Badge::Sale),
            description: "Wall-mounted nightstand with a soft-close drawer.".to_string(),
            material: "Walnut veneer".to_string(),
            dimensions: "45 x 35 x 20 cm".to_string(),
            color: "Walnut".to_string(),
            image_uri: "/images/floating-nightstand.jpg".to_string(),
        },
        Product {
            id: 6,
            name: "Atelier Extendable Dining Table".to_string(),
            category: Category::DiningRoom,
            price: BigDecimal::from(1549),
            old_price: None,
            rating: 5,
            reviews: 91,
            availability: Availability::Available { stock: 4 },
            badge: None,
            description: "Seats six, extends to ten with butterfly leaves.".to_string(),
            material: "Ash, brushed brass".to_string(),
            dimensions: "180-260 x 100 x 75 cm".to_string(),
            color: "Smoked Ash".to_string(),
            image_uri: "/images/atelier-dining-table.jpg".to_string(),
        },
        Product {
            id: 7,
            name: "Wishbone Dining Chair Set".to_string(),
            category: Category::DiningRoom,
            price: BigDecimal::from(799),
            old_price: Some(BigDecimal::from(949)),
            rating: 4,
            reviews: 142,
            availability: Availability::Available { stock: 18 },
            badge: Some(Badge::Sale),
            description: "Set of four hand-woven paper-cord chairs.".to_string(),
            material: "Beech, paper cord".to_string(),
            dimensions: "55 x 51 x 76 cm each".to_string(),
            color: "Black".to_string(),
            image_uri: "/images/wishbone-chair-set.jpg".to_string(),
        },
        Product {
            id: 8,
            name: "Meridian Standing Desk".to_string(),
            category: Category::Office,
            price: BigDecimal::from(899),
            old_price: None,
            rating: 4,
            reviews: 167,
            availability: Availability::Available { stock: 15 },
            badge: None,
            description: "Dual-motor sit-stand desk with memory presets.".to_string(),
            material: "Bamboo top, steel legs".to_string(),
            dimensions: "160 x 80 x 62-128 cm".to_string(),
            color: "Bamboo".to_string(),
            image_uri: "/images/meridian-desk.jpg".to_string(),
        },
        Product {
            id: 9,
            name: "Ergo Executive Chair".to_string(),
            category: Category::Office,
            price: BigDecimal::from(549),
            old_price: None,
            rating: 3,
            reviews: 49,
            availability: Availability::Available { stock: 22 },
            badge: None,
            description: "Mesh-back task chair with adjustable lumbar support.".to_string(),
            material: "Mesh, aluminium base".to_string(),
            dimensions: "68 x 68 x 110-120 cm".to_string(),
            color: "Graphite".to_string(),
            image_uri: "/images/ergo-executive-chair.jpg".to_string(),
        },
        Product {
            id: 10,
            name: "Cloud Modular Sectional".to_string(),
            category: Category::LivingRoom,
            price: BigDecimal::from(2799),
            old_price: None,
            rating: 5,
            reviews: 36,
            availability: Availability::Preorder {
                expected_date: date(2026, 10, 15),
            },
            badge: Some(Badge::PreOrder),
            description: "Five-piece feather-filled sectional, rearrange at will.".to_string(),
            material: "Performance linen".to_string(),
            dimensions: "320 x 320 x 70 cm".to_string(),
            color: "Ivory".to_string(),
            image_uri: "/images/cloud-sectional.jpg".to_string(),
        },
        Product {
            id: 11,
            name: "Kyoto Platform Bed".to_string(),
            category: Category::Bedroom,
            price: BigDecimal::from(1399),
            old_price: None,
            rating: 4,
            reviews: 21,
            availability: Availability::Preorder {
                expected_date: date(2026, 11, 2),
            },
            badge: Some(Badge::PreOrder),
            description: "Low platform bed with floating side tables.".to_string(),
            material: "Solid cherry".to_string(),
            dimensions: "240 x 220 x 30 cm".to_string(),
            color: "Cherry".to_string(),
            image_uri: "/images/kyoto-platform-bed.jpg".to_string(),
        },
        Product {
            id: 12,
            name: "Marble Pedestal Dining Table".to_string(),
            category: Category::DiningRoom,
            price: BigDecimal::from(2199),
            old_price: None,
            rating: 5,
            reviews: 13,
            availability: Availability::Preorder {
                expected_date: date(2026, 12, 10),
            },
            badge: Some(Badge::PreOrder),
            description: "Round Carrara marble top on a sculpted pedestal.".to_string(),
            material: "Carrara marble, concrete".to_string(),
            dimensions: "140 x 140 x 75 cm".to_string(),
            color: "White Marble".to_string(),
            image_uri: "/images/marble-pedestal-table.jpg".to_string(),
        },
    ]
}
