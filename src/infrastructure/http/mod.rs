use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    category::CategoryController, health, recommendation::RecommendationController,
    resource::ResourceController, user_interest::UserInterestController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::middleware::request_id_middleware;

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    category_controller: Arc<CategoryController>,
    resource_controller: Arc<ResourceController>,
    interest_controller: Arc<UserInterestController>,
    recommendation_controller: Arc<RecommendationController>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Category routes
    let category_routes = Router::new()
        .route(
            "/api/categories",
            get(CategoryController::list_categories).post(CategoryController::create_category),
        )
        .route(
            "/api/categories/:categoryId",
            get(CategoryController::get_category)
                .put(CategoryController::update_category)
                .delete(CategoryController::delete_category),
        )
        .with_state(category_controller.clone());

    // Resource routes
    let resource_routes = Router::new()
        .route(
            "/api/resources",
            axum::routing::post(ResourceController::create_resource),
        )
        .route(
            "/api/resources/:resourceId",
            get(ResourceController::get_resource)
                .put(ResourceController::update_resource)
                .delete(ResourceController::delete_resource),
        )
        .route(
            "/api/categories/:categoryId/resources",
            get(ResourceController::list_by_category),
        )
        .route(
            "/api/resources/:resourceId/ratings",
            axum::routing::post(ResourceController::rate_resource),
        )
        .route(
            "/api/resources/:resourceId/tags",
            get(ResourceController::get_tags).post(ResourceController::add_tag),
        )
        .route(
            "/api/resources/:resourceId/tags/:tag",
            axum::routing::delete(ResourceController::remove_tag),
        )
        .with_state(resource_controller.clone());

    // User interest routes
    let interest_routes = Router::new()
        .route(
            "/api/users/:userId/interests",
            get(UserInterestController::get_interests).put(UserInterestController::set_interest),
        )
        .route(
            "/api/users/:userId/interests/:categoryId",
            axum::routing::delete(UserInterestController::remove_interest),
        )
        .with_state(interest_controller.clone());

    // Recommendation routes
    let recommendation_routes = Router::new()
        .route(
            "/api/users/:userId/recommendations",
            get(RecommendationController::get_recommendations),
        )
        .with_state(recommendation_controller.clone());

    // Build application routes
    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool.clone())
        .merge(category_routes)
        .merge(resource_routes)
        .merge(interest_routes)
        .merge(recommendation_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
