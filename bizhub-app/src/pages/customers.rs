//! Customers page state

use bizhub_client::{ClientResult, HttpClient};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

use super::matches_search;

/// View state for the customers listing.
#[derive(Debug, Default)]
pub struct CustomersPage {
    customers: Vec<Customer>,
    /// Free-text search over name, email, and phone
    pub search: String,
}

impl CustomersPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh(&mut self, client: &HttpClient) -> ClientResult<()> {
        self.customers = client.customers().list().await?;
        Ok(())
    }

    pub async fn create(
        &mut self,
        client: &HttpClient,
        payload: &CustomerCreate,
    ) -> ClientResult<()> {
        client.customers().create(payload).await?;
        self.refresh(client).await
    }

    pub async fn update(
        &mut self,
        client: &HttpClient,
        id: &str,
        payload: &CustomerUpdate,
    ) -> ClientResult<()> {
        client.customers().update(id, payload).await?;
        self.refresh(client).await
    }

    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.customers().delete(id).await?;
        self.refresh(client).await
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Customers whose name or email contains the term
    /// (case-insensitive), or whose phone contains it verbatim.
    pub fn filtered(&self) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|customer| {
                matches_search(&customer.name, &self.search)
                    || matches_search(&customer.email, &self.search)
                    || customer
                        .phone
                        .as_deref()
                        .is_some_and(|phone| phone.contains(&self.search))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures::customer;

    fn page() -> CustomersPage {
        let mut page = CustomersPage::new();
        page.customers = vec![
            customer("c1", "Dana Reyes", "dana@example.com", Some("555-0101")),
            customer("c2", "Lee Okafor", "lee@shop.test", None),
            customer("c3", "Marta Silva", "marta@example.com", Some("555-0188")),
        ];
        page
    }

    #[test]
    fn empty_search_is_identity() {
        let page = page();
        let filtered: Vec<&str> = page.filtered().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(filtered, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn matches_name_and_email_case_insensitively() {
        let mut page = page();
        page.search = "DANA".to_string();
        assert_eq!(page.filtered()[0].id, "c1");

        page.search = "shop.test".to_string();
        assert_eq!(page.filtered()[0].id, "c2");
    }

    #[test]
    fn matches_phone_substring() {
        let mut page = page();
        page.search = "0188".to_string();
        let hits = page.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c3");
    }

    #[test]
    fn no_match_yields_empty_result() {
        let mut page = page();
        page.search = "zzz".to_string();
        assert!(page.filtered().is_empty());
    }
}
