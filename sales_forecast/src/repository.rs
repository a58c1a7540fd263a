//! Access to item and sales data for forecasting

use crate::data::{Observation, SalesLedger};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of items and their sales observations.
///
/// Implementations may block or fail; callers decide whether a failure
/// aborts their work or only affects the item in question.
#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// Identifiers of every known item
    async fn item_ids(&self) -> Result<Vec<String>>;

    /// Display name of an item, `None` if it does not exist
    async fn item_name(&self, item_id: &str) -> Result<Option<String>>;

    /// Sales observations recorded for an item, in any order
    async fn observations(&self, item_id: &str) -> Result<Vec<Observation>>;
}

#[async_trait]
impl SalesRepository for SalesLedger {
    async fn item_ids(&self) -> Result<Vec<String>> {
        Ok(self.items().iter().map(|item| item.id.clone()).collect())
    }

    async fn item_name(&self, item_id: &str) -> Result<Option<String>> {
        Ok(self.item(item_id).map(|item| item.name.clone()))
    }

    async fn observations(&self, item_id: &str) -> Result<Vec<Observation>> {
        Ok(self.observations_for(item_id))
    }
}

#[async_trait]
impl<R: SalesRepository + ?Sized> SalesRepository for Arc<R> {
    async fn item_ids(&self) -> Result<Vec<String>> {
        (**self).item_ids().await
    }

    async fn item_name(&self, item_id: &str) -> Result<Option<String>> {
        (**self).item_name(item_id).await
    }

    async fn observations(&self, item_id: &str) -> Result<Vec<Observation>> {
        (**self).observations(item_id).await
    }
}
