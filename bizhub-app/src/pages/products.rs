//! Products page state

use bizhub_client::{ClientResult, HttpClient};
use shared::models::{Product, ProductCreate, ProductUpdate};

use super::matches_search;

/// View state for the products listing.
#[derive(Debug, Default)]
pub struct ProductsPage {
    products: Vec<Product>,
    /// Free-text search over name and description
    pub search: String,
    /// Exact-match category filter; `None` shows every category
    pub category: Option<String>,
}

impl ProductsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full collection, replacing the local copy.
    pub async fn refresh(&mut self, client: &HttpClient) -> ClientResult<()> {
        self.products = client.products().list().await?;
        Ok(())
    }

    pub async fn create(&mut self, client: &HttpClient, payload: &ProductCreate) -> ClientResult<()> {
        client.products().create(payload).await?;
        self.refresh(client).await
    }

    pub async fn update(
        &mut self,
        client: &HttpClient,
        id: &str,
        payload: &ProductUpdate,
    ) -> ClientResult<()> {
        client.products().update(id, payload).await?;
        self.refresh(client).await
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.products().delete(id).await?;
        self.refresh(client).await
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the search term and category filter.
    pub fn filtered(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| {
                let matches_term = matches_search(&product.name, &self.search)
                    || matches_search(&product.description, &self.search);
                let matches_category = self
                    .category
                    .as_deref()
                    .map_or(true, |category| product.category == category);
                matches_term && matches_category
            })
            .collect()
    }

    /// Distinct non-empty categories of the loaded collection, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            let category = product.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures::product;

    fn page() -> ProductsPage {
        let mut page = ProductsPage::new();
        page.products = vec![
            product("p1", "Espresso Beans", "Dark roast blend", "Coffee", 14.0),
            product("p2", "Ceramic Mug", "Hand-thrown mug", "Kitchen", 22.0),
            product("p3", "Pour-over Kit", "Glass dripper and filters", "Coffee", 35.0),
        ];
        page
    }

    #[test]
    fn empty_search_returns_full_collection() {
        let page = page();
        assert_eq!(page.filtered().len(), page.products().len());
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let mut page = page();
        page.search = "MUG".to_string();
        let hits = page.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p2");

        page.search = "glass".to_string();
        assert_eq!(page.filtered()[0].id, "p3");
    }

    #[test]
    fn category_filter_is_exact() {
        let mut page = page();
        page.category = Some("Coffee".to_string());
        let hits = page.filtered();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.category == "Coffee"));

        page.category = Some("coffee".to_string());
        assert!(page.filtered().is_empty());
    }

    #[test]
    fn search_and_category_compose() {
        let mut page = page();
        page.search = "kit".to_string();
        page.category = Some("Coffee".to_string());
        let hits = page.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p3");
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let page = page();
        assert_eq!(page.categories(), vec!["Coffee", "Kitchen"]);
    }
}
