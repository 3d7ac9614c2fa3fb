use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_user))
        .route(
            "/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(shared_service)
}

/// Create a new user
///
/// POST /users
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Json(input): Json<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
///
/// GET /users/:user_id
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(user_id): Path<i64>,
) -> UserResult<Json<User>> {
    let user = service.get_user_by_id(user_id).await?;
    Ok(Json(user))
}

/// Update a user
///
/// PUT /users/:user_id
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(user_id): Path<i64>,
    Json(input): Json<UpdateUser>,
) -> UserResult<Json<User>> {
    let user = service.update_user(user_id, input).await?;
    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /users/:user_id
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(user_id): Path<i64>,
) -> UserResult<impl IntoResponse> {
    service.remove_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
