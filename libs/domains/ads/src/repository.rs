use async_trait::async_trait;
use chrono::{DateTime, Utc};
use idgen::IdGenerator;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AdError, AdResult};
use crate::models::{Ad, AdPredicate};

/// Repository trait for Ad persistence
///
/// All operations are safe for concurrent use from multiple tasks.
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Store an ad under a freshly assigned identifier and return it.
    /// If identifier generation fails, nothing is stored.
    async fn add_ad(&self, ad: Ad) -> AdResult<i64>;

    /// Point lookup by identifier
    async fn get_ad_by_id(&self, id: i64) -> AdResult<Ad>;

    /// Set the publish flag and update timestamp, leaving every other
    /// field untouched. Callers are expected to have checked existence.
    async fn edit_ad_status(
        &self,
        id: i64,
        published: bool,
        update_time: DateTime<Utc>,
    ) -> AdResult<Ad>;

    /// Overwrite title, text and update timestamp
    async fn change_ad_text(
        &self,
        id: i64,
        title: String,
        text: String,
        update_time: DateTime<Utc>,
    ) -> AdResult<Ad>;

    /// Every stored ad for which all predicates hold. An empty predicate
    /// list returns all ads; iteration order is unspecified.
    async fn get_ads_by_filters(&self, predicates: Vec<AdPredicate>) -> AdResult<Vec<Ad>>;

    /// Remove an ad; deleting an absent identifier is a no-op
    async fn delete_ad(&self, id: i64) -> AdResult<()>;
}

/// In-memory implementation of AdRepository
///
/// One readers-writer lock guards the whole map. The read-modify-write
/// paths hold the write guard for the entire sequence, so a concurrent
/// filtered scan can never observe a half-applied update. The identifier
/// sequence is owned per instance.
#[derive(Debug, Clone)]
pub struct InMemoryAdRepository {
    ads: Arc<RwLock<HashMap<i64, Ad>>>,
    ids: Arc<IdGenerator>,
}

impl InMemoryAdRepository {
    pub fn new() -> Self {
        Self {
            ads: Arc::new(RwLock::new(HashMap::new())),
            ids: Arc::new(IdGenerator::new()),
        }
    }

    /// Repository whose identifier sequence starts at `seed + 1`.
    pub fn with_id_seed(seed: i64) -> Self {
        Self {
            ads: Arc::new(RwLock::new(HashMap::new())),
            ids: Arc::new(IdGenerator::with_seed(seed)),
        }
    }
}

impl Default for InMemoryAdRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdRepository for InMemoryAdRepository {
    async fn add_ad(&self, mut ad: Ad) -> AdResult<i64> {
        let mut ads = self.ads.write().await;

        let id = self.ids.generate()?;
        ad.id = id;
        ads.insert(id, ad);

        tracing::info!(ad_id = id, "Created ad");
        Ok(id)
    }

    async fn get_ad_by_id(&self, id: i64) -> AdResult<Ad> {
        let ads = self.ads.read().await;
        ads.get(&id).cloned().ok_or(AdError::NotFound(id))
    }

    async fn edit_ad_status(
        &self,
        id: i64,
        published: bool,
        update_time: DateTime<Utc>,
    ) -> AdResult<Ad> {
        let mut ads = self.ads.write().await;

        let ad = ads.get_mut(&id).ok_or(AdError::NotFound(id))?;
        ad.published = published;
        ad.update_date = update_time;

        Ok(ad.clone())
    }

    async fn change_ad_text(
        &self,
        id: i64,
        title: String,
        text: String,
        update_time: DateTime<Utc>,
    ) -> AdResult<Ad> {
        let mut ads = self.ads.write().await;

        let ad = ads.get_mut(&id).ok_or(AdError::NotFound(id))?;
        ad.title = title;
        ad.text = text;
        ad.update_date = update_time;

        Ok(ad.clone())
    }

    async fn get_ads_by_filters(&self, predicates: Vec<AdPredicate>) -> AdResult<Vec<Ad>> {
        let ads = self.ads.read().await;

        let result = ads
            .values()
            .filter(|ad| predicates.iter().all(|keep| keep(ad)))
            .cloned()
            .collect();

        Ok(result)
    }

    async fn delete_ad(&self, id: i64) -> AdResult<()> {
        let mut ads = self.ads.write().await;

        if ads.remove(&id).is_some() {
            tracing::info!(ad_id = id, "Deleted ad");
        }
        Ok(())
    }
}
