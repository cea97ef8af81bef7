//! Ad Repository Implementation
//!
//! PostgreSQL implementation of the AdRepository trait. Ads and their
//! photos live in the `ad` and `photo` tables; photos are always read in
//! insertion order (ascending id).

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::{Ad, AdListQuery, AdRepository, NewAd, Photo, PAGE_SIZE};
use crate::shared::error::AppError;

/// Database row matching the `ad` table.
#[derive(Debug, sqlx::FromRow)]
struct AdRow {
    id: i64,
    name: String,
    description: String,
    price: Decimal,
    date: DateTime<Utc>,
}

impl AdRow {
    /// Convert database row plus its photos to a domain Ad entity.
    fn into_ad(self, photos: Vec<Photo>) -> Ad {
        Ad {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            date: self.date,
            photos,
        }
    }
}

/// Database row matching the `photo` table.
#[derive(Debug, sqlx::FromRow)]
struct PhotoRow {
    id: i64,
    url: String,
    ad_id: i64,
}

impl PhotoRow {
    fn into_photo(self) -> Photo {
        Photo {
            id: self.id,
            url: self.url,
            ad_id: self.ad_id,
        }
    }
}

/// Build the ORDER BY clause for a listing query.
///
/// Keys have fixed precedence (date before price) and each is emitted only
/// when its direction is given. A trailing `id ASC` keeps the result
/// deterministic for a given storage state, so ties and unsorted listings
/// fall back to insertion order.
fn order_by_clause(query: &AdListQuery) -> String {
    let mut keys: Vec<String> = Vec::new();

    if let Some(order) = query.date_order {
        keys.push(format!("date {}", order.as_sql()));
    }
    if let Some(order) = query.price_order {
        keys.push(format!("price {}", order.as_sql()));
    }
    keys.push("id ASC".into());

    format!("ORDER BY {}", keys.join(", "))
}

/// PostgreSQL ad repository implementation.
#[derive(Clone)]
pub struct PgAdRepository {
    pool: PgPool,
}

impl PgAdRepository {
    /// Create a new PgAdRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load photos for a set of ads, grouped by owning ad id.
    ///
    /// Photos come back ordered by id so each group preserves insertion
    /// order.
    async fn load_photos(&self, ad_ids: &[i64]) -> Result<HashMap<i64, Vec<Photo>>, AppError> {
        let rows = sqlx::query_as::<_, PhotoRow>(
            r#"
            SELECT id, url, ad_id
            FROM photo
            WHERE ad_id = ANY($1)
            ORDER BY ad_id, id
            "#,
        )
        .bind(ad_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_ad: HashMap<i64, Vec<Photo>> = HashMap::new();
        for row in rows {
            by_ad.entry(row.ad_id).or_default().push(row.into_photo());
        }

        Ok(by_ad)
    }
}

#[async_trait]
impl AdRepository for PgAdRepository {
    /// Insert an ad and its photos in a single transaction.
    async fn insert(&self, ad: &NewAd) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        let (ad_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO ad (name, description, price)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&ad.name)
        .bind(&ad.description)
        .bind(ad.price)
        .fetch_one(&mut *tx)
        .await?;

        for photo in &ad.photos {
            sqlx::query(
                r#"
                INSERT INTO photo (url, ad_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(&photo.url)
            .bind(ad_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(ad_id)
    }

    /// Find an ad by its id, with photos in insertion order.
    async fn find_by_id(&self, id: i64) -> Result<Option<Ad>, AppError> {
        let row = sqlx::query_as::<_, AdRow>(
            r#"
            SELECT id, name, description, price, date
            FROM ad
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut photos = self.load_photos(&[row.id]).await?;
        let photos = photos.remove(&row.id).unwrap_or_default();

        Ok(Some(row.into_ad(photos)))
    }

    /// Fetch one page of ads with at least one photo.
    async fn list(&self, query: &AdListQuery) -> Result<Vec<Ad>, AppError> {
        // Sort keys are a closed enum rendered to fixed SQL keywords, so
        // interpolating the clause is safe; offset and limit stay bound.
        let sql = format!(
            r#"
            SELECT id, name, description, price, date
            FROM ad
            WHERE EXISTS (SELECT 1 FROM photo WHERE photo.ad_id = ad.id)
            {}
            OFFSET $1 LIMIT $2
            "#,
            order_by_clause(query)
        );

        let rows = sqlx::query_as::<_, AdRow>(&sql)
            .bind(query.offset())
            .bind(PAGE_SIZE)
            .fetch_all(&self.pool)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ad_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut photos = self.load_photos(&ad_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let ad_photos = photos.remove(&row.id).unwrap_or_default();
                row.into_ad(ad_photos)
            })
            .collect())
    }
}
