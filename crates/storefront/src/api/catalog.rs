//! Thin wrappers around the read-only catalog resources.

use madeinside_core::catalog::{Category, Facility, Product};
use madeinside_core::types::{CategoryId, FacilityId, ProductId, SubcategoryId};
use tracing::instrument;

use super::{ApiClient, ApiError};

/// Optional filters for product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<CategoryId>,
    pub subcategory: Option<SubcategoryId>,
    pub facility: Option<FacilityId>,
}

impl ApiClient {
    /// List products, optionally filtered by category/subcategory/facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(category) = &filter.category {
            query.push(("category", category.as_str()));
        }
        if let Some(subcategory) = &filter.subcategory {
            query.push(("subcategory", subcategory.as_str()));
        }
        if let Some(facility) = &filter.facility {
            query.push(("facility", facility.as_str()));
        }
        self.get_json("products", &query).await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.get_json(&format!("products/{id}"), &[]).await
    }

    /// List all categories with their subcategories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("categories", &[]).await
    }

    /// List all workshop facilities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn list_facilities(&self) -> Result<Vec<Facility>, ApiError> {
        self.get_json("facilities", &[]).await
    }
}
