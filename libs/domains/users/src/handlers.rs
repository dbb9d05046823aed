use axum::{
    Json, Router,
    extract::{Path, State},
    middleware,
    routing::{delete, get, post},
};
use axum_helpers::{ApiKeyConfig, ErrorResponse, JsonBody, require_api_key};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, DeleteUser, MessageResponse, RemoveResult, UpdateUser, User};
use crate::notifier::Notifier;
use crate::repository::UserRepository;
use crate::service::UserService;

/// Body of a successful `GET /reset/{email}`
pub const RESET_SENT_MESSAGE: &str = "Password reset email has been sent.";

/// Name passed along with the id on `DELETE /user/{id}`
const DELETE_USER_NAME: &str = "foo";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user, update_user, delete_user, reset_password),
    components(schemas(
        User,
        CreateUser,
        UpdateUser,
        RemoveResult,
        MessageResponse,
        ErrorResponse
    )),
    tags(
        (name = "Users", description = "User management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

type SharedService<R, N> = State<Arc<UserService<R, N>>>;

/// Create the users router.
///
/// `DELETE /user/{id}` is the only route behind the API key check; a
/// rejected request never reaches the service.
pub fn router<R, N>(service: UserService<R, N>, auth: ApiKeyConfig) -> Router
where
    R: UserRepository + 'static,
    N: Notifier + 'static,
{
    let shared_service = Arc::new(service);

    let protected_delete = delete(delete_user::<R, N>)
        .route_layer(middleware::from_fn_with_state(auth, require_api_key));

    Router::new()
        .route("/user", post(create_user::<R, N>))
        .route(
            "/user/{id}",
            get(get_user::<R, N>)
                .put(update_user::<R, N>)
                .merge(protected_delete),
        )
        .route("/reset/{email}", get(reset_password::<R, N>))
        .with_state(shared_service)
}

/// Create a new user and send the welcome mail
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Invalid arguments or store failure", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository, N: Notifier>(
    State(service): SharedService<R, N>,
    JsonBody(input): JsonBody<CreateUser>,
) -> UserResult<Json<User>> {
    let user = service.create(input).await?;
    Ok(Json(user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid id, missing user or store failure", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository, N: Notifier>(
    State(service): SharedService<R, N>,
    Path(id): Path<String>,
) -> UserResult<Json<User>> {
    let user = service.get(&id).await?;
    Ok(Json(user))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Missing user, validation or store failure", body = ErrorResponse)
    )
)]
async fn update_user<R: UserRepository, N: Notifier>(
    State(service): SharedService<R, N>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateUser>,
) -> UserResult<Json<User>> {
    let user = service.update(&id, input).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Removal result", body = RemoveResult),
        (status = 400, description = "Invalid id or store failure", body = ErrorResponse),
        (status = 401, description = "Missing or wrong API key", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository, N: Notifier>(
    State(service): SharedService<R, N>,
    Path(id): Path<String>,
) -> UserResult<Json<RemoveResult>> {
    let result = service
        .delete_user(DeleteUser {
            id: Some(id),
            name: Some(DELETE_USER_NAME.to_string()),
        })
        .await?;
    Ok(Json(result))
}

/// Send a password-reset mail
#[utoipa::path(
    get,
    path = "/reset/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Recipient address")
    ),
    responses(
        (status = 200, description = "Reset mail sent", body = MessageResponse),
        (status = 400, description = "Invalid email or mail failure", body = ErrorResponse)
    )
)]
async fn reset_password<R: UserRepository, N: Notifier>(
    State(service): SharedService<R, N>,
    Path(email): Path<String>,
) -> UserResult<Json<MessageResponse>> {
    service.reset_password(&email).await?;
    Ok(Json(MessageResponse {
        message: RESET_SENT_MESSAGE.to_string(),
    }))
}
