//! Subscriptions page state

use bizhub_client::{ClientResult, HttpClient};
use shared::EntityRef;
use shared::models::{
    Plan, Subscription, SubscriptionCreate, SubscriptionStatus, SubscriptionUpdate,
};

/// View state for subscriptions and the plan catalog.
#[derive(Debug, Default)]
pub struct SubscriptionsPage {
    subscriptions: Vec<Subscription>,
    plans: Vec<Plan>,
}

impl SubscriptionsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composite fetch of subscriptions and plans; all-or-nothing like
    /// the orders page.
    pub async fn refresh(&mut self, client: &HttpClient) -> ClientResult<()> {
        let subscriptions_api = client.subscriptions();
        let plans_api = client.plans();
        let (subscriptions, plans) = tokio::try_join!(subscriptions_api.list(), plans_api.list())?;
        self.subscriptions = subscriptions;
        self.plans = plans;
        Ok(())
    }

    /// Subscribe to a plan, then re-fetch.
    pub async fn subscribe(&mut self, client: &HttpClient, plan_id: &str) -> ClientResult<()> {
        client
            .subscriptions()
            .create(&SubscriptionCreate {
                plan_id: plan_id.to_string(),
            })
            .await?;
        self.refresh(client).await
    }

    /// Cancel a subscription (status change, never a delete), then re-fetch.
    pub async fn cancel(&mut self, client: &HttpClient, id: &str) -> ClientResult<()> {
        client
            .subscriptions()
            .update(
                id,
                &SubscriptionUpdate {
                    status: Some(SubscriptionStatus::Cancelled),
                },
            )
            .await?;
        self.refresh(client).await
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// The currently active subscription, if any.
    pub fn active(&self) -> Option<&Subscription> {
        self.subscriptions
            .iter()
            .find(|sub| sub.status == SubscriptionStatus::Active)
    }

    /// Resolve the plan of a subscription: populated reference first,
    /// then a lookup in the fetched catalog.
    pub fn plan_for<'a>(&'a self, subscription: &'a Subscription) -> Option<&'a Plan> {
        match &subscription.plan {
            EntityRef::Full(plan) => Some(plan),
            EntityRef::Id(id) => self.plans.iter().find(|plan| plan.id == *id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures::{plan, subscription};

    fn page() -> SubscriptionsPage {
        let mut page = SubscriptionsPage::new();
        page.plans = vec![plan("pl1", "Starter", 9.0), plan("pl2", "Growth", 29.0)];
        page.subscriptions = vec![
            subscription(
                "s1",
                EntityRef::Id("pl1".to_string()),
                SubscriptionStatus::Cancelled,
            ),
            subscription(
                "s2",
                EntityRef::Id("pl2".to_string()),
                SubscriptionStatus::Active,
            ),
        ];
        page
    }

    #[test]
    fn active_finds_the_active_subscription() {
        let page = page();
        assert_eq!(page.active().unwrap().id, "s2");
    }

    #[test]
    fn plan_for_resolves_id_reference_via_catalog() {
        let page = page();
        let sub = &page.subscriptions()[0];
        assert_eq!(page.plan_for(sub).unwrap().name, "Starter");
    }

    #[test]
    fn plan_for_prefers_populated_reference() {
        let mut page = page();
        page.subscriptions.push(subscription(
            "s3",
            EntityRef::Full(plan("pl9", "Legacy", 99.0)),
            SubscriptionStatus::Inactive,
        ));
        let sub = &page.subscriptions()[2];
        assert_eq!(page.plan_for(sub).unwrap().name, "Legacy");
    }

    #[test]
    fn plan_for_unknown_id_is_none() {
        let mut page = page();
        page.subscriptions.push(subscription(
            "s4",
            EntityRef::Id("missing".to_string()),
            SubscriptionStatus::Inactive,
        ));
        let sub = &page.subscriptions()[2];
        assert!(page.plan_for(sub).is_none());
    }
}
