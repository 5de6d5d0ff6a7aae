use crate::data::catalog::Catalog;
use crate::data::models::product::{Availability, Category, Product};
use bigdecimal::BigDecimal;

/// Sort orders offered by the products page dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Featured,
    Newest,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::Newest => "newest",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
            SortOrder::Rating => "rating",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "featured" => Ok(SortOrder::Featured),
            "newest" => Ok(SortOrder::Newest),
            "price-low" => Ok(SortOrder::PriceLow),
            "price-high" => Ok(SortOrder::PriceHigh),
            "rating" => Ok(SortOrder::Rating),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Preorder,
}

impl StatusFilter {
    pub fn matches(&self, availability: &Availability) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => availability.is_available(),
            StatusFilter::Preorder => availability.is_preorder(),
        }
    }
}

/// Session-scoped filter state for the products page. `Default` is the
/// identity filter: every product passes, catalog order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilters {
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub price_min: BigDecimal,
    /// Inclusive upper bound; `None` means unbounded.
    pub price_max: Option<BigDecimal>,
    pub min_rating: u8,
    pub sort_by: SortOrder,
}

impl Default for ProductFilters {
    fn default() -> Self {
        ProductFilters {
            search: String::new(),
            category: CategoryFilter::All,
            status: StatusFilter::All,
            price_min: BigDecimal::from(0),
            price_max: None,
            min_rating: 0,
            sort_by: SortOrder::Featured,
        }
    }
}

/// Filtered/sorted results split for the "Available Now" and "Pre-Order
/// Collection" page sections. Both lists keep the order they were given.
#[derive(Debug, Default)]
pub struct CatalogSections<'a> {
    pub available: Vec<&'a Product>,
    pub preorder: Vec<&'a Product>,
}

pub struct CatalogService<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogService<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        CatalogService { catalog }
    }

    /// The one search predicate shared by the products page and the navbar
    /// quick search: case-insensitive substring of the product name or of
    /// the category display name.
    fn matches_search(product: &Product, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.category.as_str().to_lowercase().contains(&needle)
    }

    /// Filters the catalog against every criterion, then applies the
    /// requested sort. Sorts are stable, so equal keys keep catalog order.
    pub fn query(&self, filters: &ProductFilters) -> Vec<&'a Product> {
        let needle = filters.search.trim();

        let mut results: Vec<&Product> = self
            .catalog
            .products()
            .iter()
            .filter(|product| {
                let matches_search = needle.is_empty() || Self::matches_search(product, needle);
                let matches_category = filters.category.matches(product.category);
                let matches_status = filters.status.matches(&product.availability);
                let matches_price = product.price >= filters.price_min
                    && filters
                        .price_max
                        .as_ref()
                        .map_or(true, |max| product.price <= *max);
                let matches_rating = product.rating >= filters.min_rating;

                matches_search
                    && matches_category
                    && matches_status
                    && matches_price
                    && matches_rating
            })
            .collect();

        match filters.sort_by {
            SortOrder::PriceLow => results.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceHigh => results.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Rating => results.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortOrder::Newest => results.sort_by(|a, b| b.id.cmp(&a.id)),
            SortOrder::Featured => {}
        }

        results
    }

    /// Splits an already-queried list by availability, preserving its order.
    pub fn partition_by_status(results: &[&'a Product]) -> CatalogSections<'a> {
        let mut sections = CatalogSections::default();
        for &product in results {
            if product.availability.is_available() {
                sections.available.push(product);
            } else {
                sections.preorder.push(product);
            }
        }
        sections
    }

    /// Navbar live search. Blank input produces no suggestions rather than
    /// the whole catalog.
    pub fn quick_search(&self, text: &str) -> Vec<&'a Product> {
        let needle = text.trim();
        if needle.is_empty() {
            return Vec::new();
        }
        self.catalog
            .products()
            .iter()
            .filter(|product| Self::matches_search(product, needle))
            .collect()
    }

    /// Home page strip: the first six in-stock products in catalog order.
    pub fn featured(&self) -> Vec<&'a Product> {
        self.catalog
            .products()
            .iter()
            .filter(|product| product.availability.is_available())
            .take(6)
            .collect()
    }

    /// Up to four products from the same category, excluding the product
    /// itself. Unknown ids give an empty list.
    pub fn related_to(&self, id: i32) -> Vec<&'a Product> {
        match self.catalog.get_by_id(id) {
            Some(anchor) => self
                .catalog
                .products()
                .iter()
                .filter(|product| product.category == anchor.category && product.id != id)
                .take(4)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn get_by_id(&self, id: i32) -> Option<&'a Product> {
        self.catalog.get_by_id(id)
    }
}
