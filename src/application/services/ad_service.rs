//! Ad Service
//!
//! Business logic for creating, listing, and fetching ads.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Ad, AdListQuery, AdRepository, NewAd};

/// Ad service trait
#[async_trait]
pub trait AdService: Send + Sync {
    /// Create a new ad with its photos, returning the assigned id.
    ///
    /// Input is expected to be structurally validated at the API boundary;
    /// the write itself is a single atomic transaction.
    async fn create_ad(&self, input: NewAd) -> Result<i64, AdError>;

    /// Fetch one page of ads.
    async fn list_ads(&self, query: AdListQuery) -> Result<Vec<Ad>, AdError>;

    /// Fetch a single ad by id.
    async fn get_ad(&self, id: i64) -> Result<Ad, AdError>;
}

/// Ad service errors
#[derive(Debug, thiserror::Error)]
pub enum AdError {
    #[error("Ad not found")]
    NotFound,

    #[error("Page must be >= 1, got {0}")]
    InvalidPage(i64),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// AdService implementation
pub struct AdServiceImpl<R>
where
    R: AdRepository,
{
    ad_repo: Arc<R>,
}

impl<R> AdServiceImpl<R>
where
    R: AdRepository,
{
    pub fn new(ad_repo: Arc<R>) -> Self {
        Self { ad_repo }
    }
}

#[async_trait]
impl<R> AdService for AdServiceImpl<R>
where
    R: AdRepository + 'static,
{
    async fn create_ad(&self, input: NewAd) -> Result<i64, AdError> {
        let id = self
            .ad_repo
            .insert(&input)
            .await
            .map_err(|e| AdError::Storage(e.to_string()))?;

        tracing::info!(ad_id = id, "Ad created");
        Ok(id)
    }

    async fn list_ads(&self, query: AdListQuery) -> Result<Vec<Ad>, AdError> {
        if query.page < 1 {
            return Err(AdError::InvalidPage(query.page));
        }

        self.ad_repo
            .list(&query)
            .await
            .map_err(|e| AdError::Storage(e.to_string()))
    }

    async fn get_ad(&self, id: i64) -> Result<Ad, AdError> {
        self.ad_repo
            .find_by_id(id)
            .await
            .map_err(|e| AdError::Storage(e.to_string()))?
            .ok_or(AdError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use crate::domain::{MockAdRepository, NewPhoto, Photo, SortOrder};

    use super::*;

    fn new_ad() -> NewAd {
        NewAd {
            name: "Wireless Mouse".into(),
            description: "2.4 GHz wireless optical mouse".into(),
            price: "500.00".parse().unwrap(),
            photos: vec![
                NewPhoto {
                    url: "http://example.com/1.jpg".into(),
                },
                NewPhoto {
                    url: "http://example.com/2.jpg".into(),
                },
            ],
        }
    }

    fn stored_ad(id: i64) -> Ad {
        let input = new_ad();
        Ad {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            date: Utc::now(),
            photos: input
                .photos
                .iter()
                .enumerate()
                .map(|(i, p)| Photo {
                    id: i as i64 + 1,
                    url: p.url.clone(),
                    ad_id: id,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn create_then_get_preserves_fields_and_photo_order() {
        let mut repo = MockAdRepository::new();
        repo.expect_insert()
            .withf(|ad| ad.name == "Wireless Mouse" && ad.photos.len() == 2)
            .returning(|_| Ok(42));
        repo.expect_find_by_id()
            .withf(|id| *id == 42)
            .returning(|_| Ok(Some(stored_ad(42))));

        let service = AdServiceImpl::new(Arc::new(repo));

        let input = new_ad();
        let id = service.create_ad(input.clone()).await.unwrap();
        assert_eq!(id, 42);

        let ad = service.get_ad(id).await.unwrap();
        assert_eq!(ad.name, input.name);
        assert_eq!(ad.description, input.description);
        assert_eq!(ad.price, input.price);
        let urls: Vec<_> = ad.photos.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["http://example.com/1.jpg", "http://example.com/2.jpg"]);
    }

    #[tokio::test]
    async fn get_missing_ad_is_not_found() {
        let mut repo = MockAdRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AdServiceImpl::new(Arc::new(repo));

        assert!(matches!(service.get_ad(99).await, Err(AdError::NotFound)));
    }

    #[tokio::test]
    async fn list_rejects_page_below_one() {
        let mut repo = MockAdRepository::new();
        // Repository must never be touched for an invalid page
        repo.expect_list().never();

        let service = AdServiceImpl::new(Arc::new(repo));

        for page in [0, -1] {
            let query = AdListQuery {
                date_order: None,
                price_order: None,
                page,
            };
            assert!(matches!(
                service.list_ads(query).await,
                Err(AdError::InvalidPage(p)) if p == page
            ));
        }
    }

    #[tokio::test]
    async fn list_page_past_end_is_empty_not_error() {
        let mut repo = MockAdRepository::new();
        repo.expect_list()
            .withf(|q| q.page == 50)
            .returning(|_| Ok(Vec::new()));

        let service = AdServiceImpl::new(Arc::new(repo));

        let query = AdListQuery {
            date_order: None,
            price_order: None,
            page: 50,
        };
        assert!(service.list_ads(query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_passes_sort_keys_through() {
        let mut repo = MockAdRepository::new();
        repo.expect_list()
            .withf(|q| {
                q.date_order.is_none() && q.price_order == Some(SortOrder::Asc) && q.page == 1
            })
            .returning(|_| Ok(vec![stored_ad(1)]));

        let service = AdServiceImpl::new(Arc::new(repo));

        let query = AdListQuery {
            date_order: None,
            price_order: Some(SortOrder::Asc),
            page: 1,
        };
        let ads = service.list_ads(query).await.unwrap();
        assert_eq!(ads.len(), 1);
    }
}
