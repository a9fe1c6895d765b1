// src/main.rs
use learning_backend::api::{app_router, AppState};
use learning_backend::config::AppConfig;
use learning_backend::db::create_db_pool;
use learning_backend::logging::init_tracing;
use learning_backend::repository::analytics_data_source::DatabaseAnalyticsDataSource;
use learning_backend::service::analytics_service::AnalyticsService;
use learning_backend::utils::jwt::JwtManager;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing();

    tracing::info!("Starting Learning Backend server...");

    // 設定を読み込む
    let app_config = Arc::new(AppConfig::from_env()?);
    tracing::info!(
        environment = %app_config.environment,
        schema = ?app_config.db_schema,
        time_zone = %app_config.analytics_time_zone,
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    if app_config.run_migrations {
        Migrator::up(&db_pool, None).await?;
        tracing::info!("Migrations applied.");
    }

    // サービスの作成
    let data_source = Arc::new(DatabaseAnalyticsDataSource::new(db_pool));
    let analytics_service = Arc::new(AnalyticsService::new(
        data_source,
        app_config.analytics_time_zone,
    ));
    let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone())?);

    // ルーターの設定
    let app_router = app_router(AppState::new(
        analytics_service,
        jwt_manager,
        app_config.clone(),
    ));

    // サーバーの起動
    let server_addr = app_config.server_addr();
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
