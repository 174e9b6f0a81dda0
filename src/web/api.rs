//! Routes and handlers of the `/api/v1` surface.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post, put},
};
use serde_json::{Value, json};
use tower_cookies::{CookieManagerLayer, Cookies};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use uuid::Uuid;

use crate::auth::auth_body::AuthBody;
use crate::models::{
    identity::{IdentityApi, LoginRequest, RegisterRequest},
    task::{Task, TaskPost},
};
use crate::prelude::*;

use super::{
    AppState,
    ctx::{Ctx, mw_ctx_resolver, set_token_cookie},
    extract::{AppJson, AppPath},
    mw_auth::mw_require_auth,
};

fn v1(path: &str) -> String {
    format!("/api/v1/{path}")
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let task_routes = Router::new()
        .route(&v1("tasks"), get(list_tasks).post(create_task))
        .route(&v1("tasks/{id}"), put(update_task).delete(delete_task))
        .route_layer(middleware::from_fn(mw_require_auth));

    let auth_routes = Router::new()
        .route(&v1("auth/register"), post(register))
        .route(&v1("auth/login"), post(login));

    Router::new()
        .route("/", get(root))
        .merge(auth_routes)
        .merge(task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            mw_ctx_resolver,
        ))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the task tracker API", "api": v1("") }))
}

async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<Json<IdentityApi>> {
    Ok(Json(state.accounts.register(
        &payload.name,
        &payload.email,
        &payload.password,
    )?))
}

async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<AuthBody>> {
    let token = state.accounts.login(&payload.email, &payload.password)?;
    set_token_cookie(&cookies, &token);
    Ok(Json(token))
}

async fn list_tasks(State(state): State<AppState>, ctx: Ctx) -> Result<Json<Vec<Task>>> {
    Ok(Json(state.tasks.list(&ctx.identity)?))
}

async fn create_task(
    State(state): State<AppState>,
    ctx: Ctx,
    AppJson(payload): AppJson<TaskPost>,
) -> Result<Json<Task>> {
    Ok(Json(state.tasks.create(&ctx.identity, payload)?))
}

async fn update_task(
    State(state): State<AppState>,
    ctx: Ctx,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<TaskPost>,
) -> Result<Json<Task>> {
    Ok(Json(state.tasks.update(&ctx.identity, &id, payload)?))
}

async fn delete_task(
    State(state): State<AppState>,
    ctx: Ctx,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode> {
    state.tasks.delete(&ctx.identity, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
