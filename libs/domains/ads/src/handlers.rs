use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use axum_helpers::AppError;
use domain_users::{UserRepository, UserService};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::models::{Ad, AdFilter, ChangeAdStatus, CreateAd, UpdateAd};
use crate::repository::AdRepository;
use crate::service::AdService;

/// Shared state for the ads router.
///
/// Carries the user service alongside the ad service: ownership of a new ad
/// is resolved against the user store at this layer, not inside
/// [`AdService`].
pub struct AdsState<R: AdRepository, U: UserRepository> {
    pub ads: Arc<AdService<R>>,
    pub users: Arc<UserService<U>>,
}

impl<R: AdRepository, U: UserRepository> AdsState<R, U> {
    pub fn new(ads: AdService<R>, users: UserService<U>) -> Self {
        Self {
            ads: Arc::new(ads),
            users: Arc::new(users),
        }
    }
}

impl<R: AdRepository, U: UserRepository> Clone for AdsState<R, U> {
    fn clone(&self) -> Self {
        Self {
            ads: Arc::clone(&self.ads),
            users: Arc::clone(&self.users),
        }
    }
}

/// OpenAPI documentation for the ads API
#[derive(OpenApi)]
#[openapi(
    paths(list_ads, get_ad, create_ad, update_ad, change_ad_status, delete_ad),
    components(schemas(Ad, CreateAd, UpdateAd, ChangeAdStatus)),
    tags(
        (name = "ads", description = "Classified ad operations")
    )
)]
pub struct AdsApiDoc;

/// Create the ads router with all HTTP endpoints
pub fn router<R, U>(state: AdsState<R, U>) -> Router
where
    R: AdRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route("/", get(list_ads).post(create_ad))
        .route("/{ad_id}", get(get_ad).put(update_ad).delete(delete_ad))
        .route("/{ad_id}/status", put(change_ad_status))
        .with_state(state)
}

/// List ads matching the filter query
#[utoipa::path(
    get,
    path = "",
    tag = "ads",
    params(AdFilter),
    responses(
        (status = 200, description = "Matching ads", body = Vec<Ad>),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_ads<R: AdRepository, U: UserRepository>(
    State(state): State<AdsState<R, U>>,
    Query(filter): Query<AdFilter>,
) -> Result<Json<Vec<Ad>>, AppError> {
    let ads = state.ads.list_ads(filter).await?;
    Ok(Json(ads))
}

/// Get an ad by ID
#[utoipa::path(
    get,
    path = "/{ad_id}",
    tag = "ads",
    params(
        ("ad_id" = i64, Path, description = "Ad ID")
    ),
    responses(
        (status = 200, description = "Ad found", body = Ad),
        (status = 404, description = "Ad not found")
    )
)]
async fn get_ad<R: AdRepository, U: UserRepository>(
    State(state): State<AdsState<R, U>>,
    Path(ad_id): Path<i64>,
) -> Result<Json<Ad>, AppError> {
    let ad = state.ads.get_ad_by_id(ad_id).await?;
    Ok(Json(ad))
}

/// Create a new ad.
///
/// The author must be an existing user; unknown authors are rejected with
/// 404 before the ad service runs.
#[utoipa::path(
    post,
    path = "",
    tag = "ads",
    request_body = CreateAd,
    responses(
        (status = 201, description = "Ad created", body = Ad),
        (status = 400, description = "Invalid title or text"),
        (status = 404, description = "Author does not exist")
    )
)]
async fn create_ad<R: AdRepository, U: UserRepository>(
    State(state): State<AdsState<R, U>>,
    Json(input): Json<CreateAd>,
) -> Result<impl IntoResponse, AppError> {
    let author = state.users.get_user_by_id(input.author_id).await?;

    let ad = state
        .ads
        .create_ad(CreateAd {
            author_id: author.id,
            ..input
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ad)))
}

/// Replace an ad's title and text
#[utoipa::path(
    put,
    path = "/{ad_id}",
    tag = "ads",
    params(
        ("ad_id" = i64, Path, description = "Ad ID")
    ),
    request_body = UpdateAd,
    responses(
        (status = 200, description = "Ad updated", body = Ad),
        (status = 400, description = "Invalid title or text"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Ad not found")
    )
)]
async fn update_ad<R: AdRepository, U: UserRepository>(
    State(state): State<AdsState<R, U>>,
    Path(ad_id): Path<i64>,
    Json(input): Json<UpdateAd>,
) -> Result<Json<Ad>, AppError> {
    let ad = state
        .ads
        .update_ad(ad_id, input.author_id, input.title, input.text)
        .await?;
    Ok(Json(ad))
}

/// Flip an ad's publish flag.
///
/// A caller that does not resolve to a known user is treated as forbidden.
#[utoipa::path(
    put,
    path = "/{ad_id}/status",
    tag = "ads",
    params(
        ("ad_id" = i64, Path, description = "Ad ID")
    ),
    request_body = ChangeAdStatus,
    responses(
        (status = 200, description = "Publish flag changed", body = Ad),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Ad not found")
    )
)]
async fn change_ad_status<R: AdRepository, U: UserRepository>(
    State(state): State<AdsState<R, U>>,
    Path(ad_id): Path<i64>,
    Json(input): Json<ChangeAdStatus>,
) -> Result<Json<Ad>, AppError> {
    state
        .users
        .get_user_by_id(input.author_id)
        .await
        .map_err(|err| AppError::Forbidden(err.to_string()))?;

    let ad = state
        .ads
        .change_ad_status(ad_id, input.author_id, input.published)
        .await?;
    Ok(Json(ad))
}

/// Query parameters for deleting an ad
#[derive(Debug, Deserialize, IntoParams)]
struct DeleteAdQuery {
    /// Caller claiming ownership of the ad
    user_id: i64,
}

/// Delete an ad
#[utoipa::path(
    delete,
    path = "/{ad_id}",
    tag = "ads",
    params(
        ("ad_id" = i64, Path, description = "Ad ID"),
        DeleteAdQuery
    ),
    responses(
        (status = 204, description = "Ad deleted"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Ad not found")
    )
)]
async fn delete_ad<R: AdRepository, U: UserRepository>(
    State(state): State<AdsState<R, U>>,
    Path(ad_id): Path<i64>,
    Query(query): Query<DeleteAdQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.ads.remove_ad(ad_id, query.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
