use std::sync::Arc;
use timefmt::DateTimeFormatter;
use tracing::instrument;

use crate::error::AdResult;
use crate::models::{Ad, AdFilter, AdPredicate, CreateAd, NO_AUTHOR_FILTER};
use crate::repository::AdRepository;
use crate::validation;

/// Service layer for Ad business logic
///
/// Timestamps are stamped through the [`DateTimeFormatter`] rather than the
/// raw wall clock, so stored values round-trip through their string encoding
/// at the transport boundary.
pub struct AdService<R: AdRepository> {
    repository: Arc<R>,
    clock: DateTimeFormatter,
}

impl<R: AdRepository> Clone for AdService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: self.clock.clone(),
        }
    }
}

impl<R: AdRepository> AdService<R> {
    pub fn new(repository: R, clock: DateTimeFormatter) -> Self {
        Self {
            repository: Arc::new(repository),
            clock,
        }
    }

    /// The formatter used for stamping; transports reuse it to encode and
    /// parse wire timestamps.
    pub fn formatter(&self) -> &DateTimeFormatter {
        &self.clock
    }

    /// Create a new unpublished ad.
    ///
    /// Validation runs in a fixed order (title, then text) and stops at the
    /// first failure; the ownership check is a tautology at creation since
    /// the caller becomes the owner. The repository assigns the identifier.
    /// Whether the author exists is the caller's concern: transports resolve
    /// the author against the user service before calling this.
    #[instrument(skip(self, input), fields(author_id = %input.author_id))]
    pub async fn create_ad(&self, input: CreateAd) -> AdResult<Ad> {
        validation::validate_title(&input.title)?;
        validation::validate_text(&input.text)?;

        let now = self.clock.now();
        let mut ad = Ad {
            id: 0,
            title: input.title,
            text: input.text,
            author_id: input.author_id,
            published: false,
            create_date: now,
            update_date: now,
        };
        ad.id = self.repository.add_ad(ad.clone()).await?;
        Ok(ad)
    }

    /// Flip the publish flag; only the owning author may do this.
    #[instrument(skip(self), fields(ad_id = %ad_id))]
    pub async fn change_ad_status(
        &self,
        ad_id: i64,
        author_id: i64,
        published: bool,
    ) -> AdResult<Ad> {
        let ad = self.repository.get_ad_by_id(ad_id).await?;
        validation::validate_author_id(ad.author_id, author_id)?;

        self.repository
            .edit_ad_status(ad_id, published, self.clock.now())
            .await
    }

    /// Replace title and text; only the owning author may do this.
    /// `id` and `author_id` are immutable across this call.
    #[instrument(skip(self, title, text), fields(ad_id = %ad_id))]
    pub async fn update_ad(
        &self,
        ad_id: i64,
        author_id: i64,
        title: String,
        text: String,
    ) -> AdResult<Ad> {
        let ad = self.repository.get_ad_by_id(ad_id).await?;
        validation::validate_author_id(ad.author_id, author_id)?;
        validation::validate_title(&title)?;
        validation::validate_text(&text)?;

        self.repository
            .change_ad_text(ad_id, title, text, self.clock.now())
            .await
    }

    /// Get an ad by ID
    pub async fn get_ad_by_id(&self, ad_id: i64) -> AdResult<Ad> {
        self.repository.get_ad_by_id(ad_id).await
    }

    /// List ads matching the filter.
    ///
    /// Optional dimensions compile to predicates; the publish-state
    /// predicate is always appended, so with no other dimensions active the
    /// default listing shows only published ads.
    pub async fn list_ads(&self, filter: AdFilter) -> AdResult<Vec<Ad>> {
        let mut predicates: Vec<AdPredicate> = Vec::new();

        if filter.author_id != NO_AUTHOR_FILTER {
            let author_id = filter.author_id;
            predicates.push(Box::new(move |ad: &Ad| ad.author_id == author_id));
        }

        if let Some(create_date) = filter.create_date {
            let create_date = self.clock.truncate(create_date);
            predicates.push(Box::new(move |ad: &Ad| ad.create_date == create_date));
        }

        if !filter.title.is_empty() {
            let title = filter.title.to_lowercase();
            predicates.push(Box::new(move |ad: &Ad| ad.title.to_lowercase() == title));
        }

        let published = filter.published;
        predicates.push(Box::new(move |ad: &Ad| ad.published == published));

        self.repository.get_ads_by_filters(predicates).await
    }

    /// Delete an ad; only the owning author may do this.
    #[instrument(skip(self), fields(ad_id = %ad_id))]
    pub async fn remove_ad(&self, ad_id: i64, author_id: i64) -> AdResult<()> {
        let ad = self.repository.get_ad_by_id(ad_id).await?;
        validation::validate_author_id(ad.author_id, author_id)?;

        self.repository.delete_ad(ad_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdError;
    use crate::repository::InMemoryAdRepository;

    fn service() -> AdService<InMemoryAdRepository> {
        AdService::new(InMemoryAdRepository::new(), DateTimeFormatter::seconds())
    }

    fn create_input(title: &str, text: &str, author_id: i64) -> CreateAd {
        CreateAd {
            title: title.to_string(),
            text: text.to_string(),
            author_id,
        }
    }

    #[tokio::test]
    async fn test_create_defaults() {
        let service = service();
        let ad = service
            .create_ad(create_input("phone", "buy new phone", 0))
            .await
            .unwrap();

        assert_eq!(ad.id, 0);
        assert!(!ad.published);
        assert_eq!(ad.create_date, ad.update_date);
        assert_eq!(ad.create_date.timestamp_subsec_nanos(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_title_before_bad_text() {
        let service = service();

        // Both fields invalid: the title failure wins (fixed order).
        let result = service.create_ad(create_input("", "", 0)).await;
        assert_eq!(result, Err(AdError::BadTitle));

        let result = service
            .create_ad(create_input("ok", &"x".repeat(501), 0))
            .await;
        assert_eq!(result, Err(AdError::BadText));
    }

    #[tokio::test]
    async fn test_failed_create_stores_nothing() {
        let service = service();
        let _ = service.create_ad(create_input("", "text", 0)).await;
        assert!(service.list_ads(AdFilter::default()).await.unwrap().is_empty());
        assert_eq!(service.get_ad_by_id(0).await, Err(AdError::NotFound(0)));
    }

    #[tokio::test]
    async fn test_change_status_by_owner() {
        let service = service();
        let ad = service
            .create_ad(create_input("phone", "buy new phone", 0))
            .await
            .unwrap();

        let published = service.change_ad_status(ad.id, 0, true).await.unwrap();
        assert!(published.published);
        assert!(published.update_date >= published.create_date);
    }

    #[tokio::test]
    async fn test_change_status_by_stranger_is_forbidden_and_leaves_ad_alone() {
        let service = service();
        let ad = service
            .create_ad(create_input("phone", "buy new phone", 0))
            .await
            .unwrap();
        service.change_ad_status(ad.id, 0, true).await.unwrap();

        let result = service.change_ad_status(ad.id, 1, false).await;
        assert_eq!(
            result,
            Err(AdError::BadAuthorId {
                owner: 0,
                caller: 1
            })
        );

        // Still published, untouched.
        let stored = service.get_ad_by_id(ad.id).await.unwrap();
        assert!(stored.published);
    }

    #[tokio::test]
    async fn test_change_status_of_missing_ad_is_not_found() {
        let service = service();
        assert_eq!(
            service.change_ad_status(9, 0, true).await,
            Err(AdError::NotFound(9))
        );
    }

    #[tokio::test]
    async fn test_update_ad_checks_owner_before_fields() {
        let service = service();
        let ad = service
            .create_ad(create_input("phone", "buy new phone", 0))
            .await
            .unwrap();

        // Wrong author and an invalid title: ownership failure wins.
        let result = service
            .update_ad(ad.id, 1, String::new(), "text".to_string())
            .await;
        assert_eq!(
            result,
            Err(AdError::BadAuthorId {
                owner: 0,
                caller: 1
            })
        );
    }

    #[tokio::test]
    async fn test_update_ad_replaces_text_fields_only() {
        let service = service();
        let ad = service
            .create_ad(create_input("phone", "buy new phone", 7))
            .await
            .unwrap();

        let updated = service
            .update_ad(ad.id, 7, "tablet".to_string(), "buy new tablet".to_string())
            .await
            .unwrap();

        assert_eq!(updated.id, ad.id);
        assert_eq!(updated.author_id, 7);
        assert_eq!(updated.title, "tablet");
        assert_eq!(updated.text, "buy new tablet");
        assert_eq!(updated.create_date, ad.create_date);
        assert!(updated.update_date >= ad.update_date);
    }

    #[tokio::test]
    async fn test_list_defaults_to_published_only() {
        let service = service();
        let draft = service
            .create_ad(create_input("draft", "unpublished", 0))
            .await
            .unwrap();
        let ad = service
            .create_ad(create_input("live", "published", 0))
            .await
            .unwrap();
        service.change_ad_status(ad.id, 0, true).await.unwrap();

        let listed = service.list_ads(AdFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, ad.id);

        // Asking for unpublished shows the draft instead.
        let drafts = service
            .list_ads(AdFilter {
                published: false,
                ..AdFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].id, draft.id);
    }

    #[tokio::test]
    async fn test_list_by_author() {
        let service = service();
        for author in [1, 2, 1] {
            let ad = service
                .create_ad(create_input("ad", "text", author))
                .await
                .unwrap();
            service.change_ad_status(ad.id, author, true).await.unwrap();
        }

        let ads = service
            .list_ads(AdFilter {
                author_id: 1,
                ..AdFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(ads.len(), 2);
        assert!(ads.iter().all(|ad| ad.author_id == 1));
    }

    #[tokio::test]
    async fn test_list_by_title_is_case_insensitive_exact() {
        let service = service();
        for title in ["Bike", "bike rack", "BIKE"] {
            let ad = service
                .create_ad(create_input(title, "text", 0))
                .await
                .unwrap();
            service.change_ad_status(ad.id, 0, true).await.unwrap();
        }

        let ads = service
            .list_ads(AdFilter {
                title: "bike".to_string(),
                ..AdFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(ads.len(), 2);
        assert!(ads.iter().all(|ad| ad.title.eq_ignore_ascii_case("bike")));
    }

    #[tokio::test]
    async fn test_list_by_create_date() {
        let service = service();
        let ad = service
            .create_ad(create_input("phone", "text", 0))
            .await
            .unwrap();
        service.change_ad_status(ad.id, 0, true).await.unwrap();

        let same_day = service
            .list_ads(AdFilter {
                create_date: Some(ad.create_date),
                ..AdFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(same_day.len(), 1);

        let other_day = service
            .list_ads(AdFilter {
                create_date: Some(ad.create_date + chrono::Duration::days(1)),
                ..AdFilter::default()
            })
            .await
            .unwrap();
        assert!(other_day.is_empty());
    }

    #[tokio::test]
    async fn test_remove_ad_checks_owner() {
        let service = service();
        let ad = service
            .create_ad(create_input("phone", "text", 0))
            .await
            .unwrap();

        assert_eq!(
            service.remove_ad(ad.id, 5).await,
            Err(AdError::BadAuthorId {
                owner: 0,
                caller: 5
            })
        );
        assert!(service.remove_ad(ad.id, 0).await.is_ok());
        assert_eq!(
            service.get_ad_by_id(ad.id).await,
            Err(AdError::NotFound(ad.id))
        );
    }

    #[tokio::test]
    async fn test_remove_missing_ad_is_not_found() {
        let service = service();
        assert_eq!(service.remove_ad(4, 0).await, Err(AdError::NotFound(4)));
    }

    /// The end-to-end scenario from the acceptance checklist: alice creates
    /// an ad, publishes it, and a stranger fails to unpublish it.
    #[tokio::test]
    async fn test_publish_lifecycle_scenario() {
        let service = service();

        let ad = service
            .create_ad(create_input("phone", "buy new phone", 0))
            .await
            .unwrap();
        assert_eq!(ad.id, 0);
        assert!(!ad.published);

        let published = service.change_ad_status(0, 0, true).await.unwrap();
        assert!(published.published);
        assert!(published.update_date >= published.create_date);

        let denied = service.change_ad_status(0, 1, false).await;
        assert!(matches!(denied, Err(AdError::BadAuthorId { .. })));

        let listed = service.list_ads(AdFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].published);
    }
}
