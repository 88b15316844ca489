//! Orders page state
//!
//! The listing needs customers and products alongside the orders, so the
//! refresh is a composite fetch. Policy: all-or-nothing — if any of the
//! three requests fails, the page keeps its previous data and the caller
//! surfaces a single error.

use bizhub_client::{ClientResult, HttpClient};
use shared::models::{Customer, Order, OrderCreate, OrderItemCreate, OrderUpdate, Product};
use thiserror::Error;

use super::matches_search;
use crate::format::order_code;

/// View state for the orders listing and the new-order form.
#[derive(Debug, Default)]
pub struct OrdersPage {
    orders: Vec<Order>,
    customers: Vec<Customer>,
    products: Vec<Product>,
    /// Free-text search over order code and customer name
    pub search: String,
    pub form: OrderForm,
}

impl OrdersPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composite fetch of orders, customers, and products.
    pub async fn refresh(&mut self, client: &HttpClient) -> ClientResult<()> {
        let orders_api = client.orders();
        let customers_api = client.customers();
        let products_api = client.products();
        let (orders, customers, products) = tokio::try_join!(
            orders_api.list(),
            customers_api.list(),
            products_api.list(),
        )?;
        self.orders = orders;
        self.customers = customers;
        self.products = products;
        Ok(())
    }

    /// Validate the form and submit it, then re-fetch. Nothing is sent
    /// when validation fails.
    pub async fn create_order(&mut self, client: &HttpClient) -> anyhow::Result<()> {
        let payload = self.form.validate(&self.products)?;
        client.orders().create(&payload).await?;
        self.form.reset();
        self.refresh(client).await?;
        Ok(())
    }

    pub async fn update_order(
        &mut self,
        client: &HttpClient,
        id: &str,
        payload: &OrderUpdate,
    ) -> ClientResult<()> {
        client.orders().update(id, payload).await?;
        self.refresh(client).await
    }

    pub async fn delete_order(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client.orders().delete(id).await?;
        self.refresh(client).await
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Orders whose code contains the term verbatim, or whose populated
    /// customer name contains it case-insensitively. Unpopulated customer
    /// references only match by code.
    pub fn filtered(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| {
                let code_hit = order_code(&order.id).contains(&self.search);
                let name_hit = order
                    .customer
                    .as_full()
                    .is_some_and(|customer| matches_search(&customer.name, &self.search));
                code_hit || name_hit
            })
            .collect()
    }

    /// Running total of the current form selection.
    pub fn form_total(&self) -> f64 {
        self.form.total(&self.products)
    }
}

/// New-order form: one customer, a set of selected products with
/// quantities. Selection order is preserved.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub customer_id: String,
    lines: Vec<OrderLine>,
}

#[derive(Debug, Clone)]
struct OrderLine {
    product_id: String,
    quantity: u32,
}

/// Rejections raised before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderFormError {
    #[error("Please select a customer")]
    MissingCustomer,
    #[error("Please select at least one product")]
    NoProducts,
}

impl OrderForm {
    /// Select a product (quantity 1) or deselect it if already present.
    pub fn toggle_product(&mut self, product_id: &str) {
        if let Some(pos) = self
            .lines
            .iter()
            .position(|line| line.product_id == product_id)
        {
            self.lines.remove(pos);
        } else {
            self.lines.push(OrderLine {
                product_id: product_id.to_string(),
                quantity: 1,
            });
        }
    }

    /// Set the quantity of a selected product. Quantities are clamped to
    /// at least 1; deselection goes through `toggle_product`.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity.max(1);
        }
    }

    pub fn is_selected(&self, product_id: &str) -> bool {
        self.lines.iter().any(|line| line.product_id == product_id)
    }

    pub fn selected_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of unit price x quantity over the selection. Products missing
    /// from the catalog contribute nothing.
    pub fn total(&self, products: &[Product]) -> f64 {
        self.lines
            .iter()
            .map(|line| {
                let price = products
                    .iter()
                    .find(|product| product.id == line.product_id)
                    .map(|product| product.price)
                    .unwrap_or(0.0);
                price * f64::from(line.quantity)
            })
            .sum()
    }

    /// Required-field check; builds the create payload with captured unit
    /// prices and the computed total.
    pub fn validate(&self, products: &[Product]) -> Result<OrderCreate, OrderFormError> {
        if self.customer_id.is_empty() {
            return Err(OrderFormError::MissingCustomer);
        }
        if self.lines.is_empty() {
            return Err(OrderFormError::NoProducts);
        }

        let items = self
            .lines
            .iter()
            .map(|line| OrderItemCreate {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
                price: products
                    .iter()
                    .find(|product| product.id == line.product_id)
                    .map(|product| product.price)
                    .unwrap_or(0.0),
            })
            .collect();

        Ok(OrderCreate {
            customer_id: self.customer_id.clone(),
            products: items,
            total: self.total(products),
        })
    }

    pub fn reset(&mut self) {
        self.customer_id.clear();
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures::{customer, order, product};
    use shared::EntityRef;

    fn catalog() -> Vec<Product> {
        vec![
            product("p1", "Espresso Beans", "Dark roast", "Coffee", 14.0),
            product("p2", "Ceramic Mug", "Hand-thrown", "Kitchen", 22.0),
        ]
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let products = catalog();
        let mut form = OrderForm::default();
        form.toggle_product("p1");
        form.toggle_product("p2");
        form.set_quantity("p1", 3);
        assert_eq!(form.total(&products), 3.0 * 14.0 + 22.0);
    }

    #[test]
    fn deselecting_removes_contribution() {
        let products = catalog();
        let mut form = OrderForm::default();
        form.toggle_product("p1");
        form.toggle_product("p2");
        form.toggle_product("p1");
        assert!(!form.is_selected("p1"));
        assert_eq!(form.total(&products), 22.0);
    }

    #[test]
    fn quantity_change_updates_contribution() {
        let products = catalog();
        let mut form = OrderForm::default();
        form.toggle_product("p2");
        form.set_quantity("p2", 5);
        assert_eq!(form.total(&products), 5.0 * 22.0);
        form.set_quantity("p2", 1);
        assert_eq!(form.total(&products), 22.0);
    }

    #[test]
    fn quantity_is_clamped_to_one() {
        let mut form = OrderForm::default();
        form.toggle_product("p1");
        form.set_quantity("p1", 0);
        assert_eq!(form.total(&catalog()), 14.0);
    }

    #[test]
    fn empty_form_is_rejected_before_any_network_call() {
        let products = catalog();
        let form = OrderForm::default();
        assert_eq!(
            form.validate(&products),
            Err(OrderFormError::MissingCustomer)
        );

        let mut form = OrderForm::default();
        form.customer_id = "c1".to_string();
        assert_eq!(form.validate(&products), Err(OrderFormError::NoProducts));
    }

    #[test]
    fn validate_captures_prices_and_total() {
        let products = catalog();
        let mut form = OrderForm::default();
        form.customer_id = "c1".to_string();
        form.toggle_product("p1");
        form.set_quantity("p1", 2);

        let payload = form.validate(&products).unwrap();
        assert_eq!(payload.customer_id, "c1");
        assert_eq!(payload.products.len(), 1);
        assert_eq!(payload.products[0].price, 14.0);
        assert_eq!(payload.total, 28.0);
    }

    #[test]
    fn filter_matches_code_and_populated_customer_name() {
        let mut page = OrdersPage::new();
        page.orders = vec![
            order(
                "aaaaaaaaaaaaaaaaaa111111",
                EntityRef::Full(customer("c1", "Dana Reyes", "dana@example.com", None)),
                10.0,
            ),
            order("bbbbbbbbbbbbbbbbbb222222", EntityRef::Id("c2".to_string()), 20.0),
        ];

        page.search = "222222".to_string();
        assert_eq!(page.filtered()[0].id, "bbbbbbbbbbbbbbbbbb222222");

        page.search = "dana".to_string();
        let hits = page.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "aaaaaaaaaaaaaaaaaa111111");

        // Unpopulated references never match by name.
        page.search = "c2".to_string();
        assert!(page.filtered().is_empty());

        page.search = String::new();
        assert_eq!(page.filtered().len(), 2);
    }
}
