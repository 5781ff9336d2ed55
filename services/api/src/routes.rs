//! API service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use estate::models::{NewAiInteraction, NewContact, NewProperty, NewVisit};

use crate::{
    error::ApiError,
    models::{FeaturedQuery, InteractionsQuery, PropertiesQuery},
    state::AppState,
    validation::{validate_contact, validate_property},
};

const FEATURED_DEFAULT_LIMIT: usize = 3;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(create_contact))
        .route("/api/properties", get(get_properties))
        .route("/api/properties", post(create_property))
        .route("/api/properties/featured", get(get_featured_properties))
        .route("/api/properties/:id", get(get_property))
        .route("/api/properties/:id/visits", get(get_property_visits))
        .route("/api/visits", post(create_visit))
        .route("/api/ai/interactions", post(create_ai_interaction))
        .route("/api/ai/interactions", get(get_ai_interactions))
        .route("/api/dashboard/stats", get(get_dashboard_stats))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "API funcionando corretamente"
    }))
}

/// Contact form submission
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError> {
    validate_contact(&payload).map_err(|reason| {
        tracing::warn!("Rejected contact payload: {}", reason);
        ApiError::BadRequest("Dados inválidos".to_string())
    })?;

    let contact = state.storage.create_contact(payload).await;

    Ok(Json(json!({ "success": true, "contact": contact })))
}

/// Get all properties with filters
pub async fn get_properties(
    State(state): State<AppState>,
    Query(query): Query<PropertiesQuery>,
) -> impl IntoResponse {
    let filters = query.into_filters();
    let properties = state.storage.list_properties(&filters).await;

    Json(json!({ "success": true, "properties": properties }))
}

/// Get featured properties for the landing page
pub async fn get_featured_properties(
    State(state): State<AppState>,
    Query(query): Query<FeaturedQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(FEATURED_DEFAULT_LIMIT);
    let properties = state.storage.featured_properties(limit).await;

    Json(json!({ "success": true, "properties": properties }))
}

/// Get a single property by ID
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let property = state
        .storage
        .get_property(id)
        .await
        .ok_or(ApiError::NotFound("Imóvel não encontrado".to_string()))?;

    Ok(Json(json!({ "success": true, "property": property })))
}

/// Create a new property (admin only)
pub async fn create_property(
    State(state): State<AppState>,
    Json(payload): Json<NewProperty>,
) -> Result<impl IntoResponse, ApiError> {
    validate_property(&payload).map_err(|reason| {
        tracing::warn!("Rejected property payload: {}", reason);
        ApiError::BadRequest("Dados inválidos".to_string())
    })?;

    let property = state.storage.create_property(payload).await;

    Ok(Json(json!({ "success": true, "property": property })))
}

/// Schedule a visit
pub async fn create_visit(
    State(state): State<AppState>,
    Json(payload): Json<NewVisit>,
) -> impl IntoResponse {
    let visit = state.storage.create_visit(payload).await;

    Json(json!({ "success": true, "visit": visit }))
}

/// Get visits for a property
pub async fn get_property_visits(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let visits = state.storage.visits_for_property(id).await;

    Json(json!({ "success": true, "visits": visits }))
}

/// Record an AI concierge interaction
pub async fn create_ai_interaction(
    State(state): State<AppState>,
    Json(payload): Json<NewAiInteraction>,
) -> impl IntoResponse {
    let interaction = state.storage.create_interaction(payload).await;

    Json(json!({ "success": true, "interaction": interaction }))
}

/// Get AI interactions for analytics
pub async fn get_ai_interactions(
    State(state): State<AppState>,
    Query(query): Query<InteractionsQuery>,
) -> impl IntoResponse {
    let filters = query.into_filters();
    let interactions = state.storage.list_interactions(&filters).await;

    Json(json!({ "success": true, "interactions": interactions }))
}

/// Get dashboard statistics
pub async fn get_dashboard_stats(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.storage.dashboard_stats().await;

    Json(json!({ "success": true, "stats": stats }))
}
