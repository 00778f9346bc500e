use resourcehub_backend::infrastructure::config::{Config, LogFormat};
use resourcehub_backend::infrastructure::db::{check_connection, create_pool};
use resourcehub_backend::infrastructure::http::start_http_server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting ResourceHub Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool)
    tracing::info!("Instantiating repositories...");
    let category_repo = Arc::new(
        resourcehub_backend::infrastructure::repositories::CategoryRepository::new(pool.clone()),
    );
    let resource_repo = Arc::new(
        resourcehub_backend::infrastructure::repositories::ResourceRepository::new(pool.clone()),
    );
    let tag_repo = Arc::new(resourcehub_backend::infrastructure::repositories::TagRepository::new(
        pool.clone(),
    ));
    let interest_repo = Arc::new(
        resourcehub_backend::infrastructure::repositories::UserInterestRepository::new(
            pool.clone(),
        ),
    );
    let candidate_repo = Arc::new(
        resourcehub_backend::infrastructure::repositories::CandidateRepository::new(pool.clone()),
    );

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let category_service = Arc::new(resourcehub_backend::domain::category::CategoryService::new(
        category_repo.clone(),
    ));
    let resource_service = Arc::new(resourcehub_backend::domain::resource::ResourceService::new(
        resource_repo.clone(),
        category_repo.clone(),
        tag_repo.clone(),
    ));
    let interest_service = Arc::new(
        resourcehub_backend::domain::user_interest::UserInterestService::new(
            interest_repo.clone(),
            category_repo.clone(),
        ),
    );
    let recommendation_service = Arc::new(
        resourcehub_backend::domain::recommendation::RecommendationService::new(
            candidate_repo.clone(),
            interest_repo.clone(),
        ),
    );

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let category_controller = Arc::new(
        resourcehub_backend::controllers::category::CategoryController::new(category_service),
    );
    let resource_controller = Arc::new(
        resourcehub_backend::controllers::resource::ResourceController::new(resource_service),
    );
    let interest_controller = Arc::new(
        resourcehub_backend::controllers::user_interest::UserInterestController::new(
            interest_service,
        ),
    );
    let recommendation_controller = Arc::new(
        resourcehub_backend::controllers::recommendation::RecommendationController::new(
            recommendation_service,
        ),
    );

    // Start HTTP server with all routes
    start_http_server(
        pool,
        config,
        category_controller,
        resource_controller,
        interest_controller,
        recommendation_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "resourcehub_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "resourcehub_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
