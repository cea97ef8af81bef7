//! Ad Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::{Query, QueryRejection};
use validator::Validate;

use crate::application::dto::request::{CreateAdRequest, GetAdParams, ListAdsParams};
use crate::application::dto::response::{AdCreatedResponse, AdDetailResponse, AdShortResponse};
use crate::application::services::{AdError, AdService, AdServiceImpl};
use crate::domain::{AdListQuery, NewAd, NewPhoto};
use crate::infrastructure::repositories::PgAdRepository;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn ad_service(state: &AppState) -> AdServiceImpl<PgAdRepository> {
    let ad_repo = Arc::new(PgAdRepository::new(state.db.clone()));
    AdServiceImpl::new(ad_repo)
}

fn map_ad_error(e: AdError) -> AppError {
    match e {
        AdError::NotFound => AppError::NotFound,
        AdError::InvalidPage(page) => {
            AppError::Validation(format!("Page must be >= 1, got {}", page))
        }
        AdError::Storage(msg) => AppError::Internal(msg),
    }
}

/// Get a paginated list of ads
pub async fn list_ads(
    State(state): State<AppState>,
    params: Result<Query<ListAdsParams>, QueryRejection>,
) -> Result<Json<Vec<AdShortResponse>>, AppError> {
    // Malformed query strings (bad order values, non-numeric page) are a
    // client validation failure, not a bad request
    let Query(params) = params.map_err(|e| AppError::Validation(e.to_string()))?;

    let query = AdListQuery {
        date_order: params.date_order,
        price_order: params.price_order,
        page: params.page.unwrap_or(1),
    };

    let ads = ad_service(&state)
        .list_ads(query)
        .await
        .map_err(map_ad_error)?;

    let views = ads
        .iter()
        .map(AdShortResponse::project)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(views))
}

/// Create a new ad
pub async fn create_ad(
    State(state): State<AppState>,
    Json(body): Json<CreateAdRequest>,
) -> Result<(StatusCode, Json<AdCreatedResponse>), AppError> {
    // Validate request before any persistence attempt
    body.validate().map_err(validation_error)?;

    let input = NewAd {
        name: body.name,
        description: body.description,
        price: body.price,
        photos: body
            .photos
            .into_iter()
            .map(|p| NewPhoto { url: p.url })
            .collect(),
    };

    let id = ad_service(&state)
        .create_ad(input)
        .await
        .map_err(map_ad_error)?;

    Ok((StatusCode::CREATED, Json(AdCreatedResponse { id })))
}

/// Get an ad by ID
pub async fn get_ad(
    State(state): State<AppState>,
    Path(ad_id): Path<i64>,
    params: Result<Query<GetAdParams>, QueryRejection>,
) -> Result<Json<AdDetailResponse>, AppError> {
    // An unrecognized fields value is rejected, not silently ignored
    let Query(params) = params.map_err(|e| AppError::Validation(e.to_string()))?;

    let ad = ad_service(&state)
        .get_ad(ad_id)
        .await
        .map_err(map_ad_error)?;

    let view = AdDetailResponse::project(&ad, &params.fields)?;

    Ok(Json(view))
}
