//! Hostal PMS server
//!
//! REST API for small-hotel front-desk operations.
//! Reads configuration from TOML file (~/.config/hostal-pms/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use hostal_pms::config::AppConfig;
use hostal_pms::infrastructure::crypto::jwt::JwtConfig;
use hostal_pms::{
    create_api_router, default_config_path, init_database, DatabaseConfig, Migrator,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PMS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Hostal PMS...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus metrics recorder: {}", e))?;
    info!("Prometheus metrics recorder installed");

    // ── Build sub-configs from AppConfig ───────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "hostal-pms".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    let repos: Arc<dyn hostal_pms::domain::RepositoryProvider> =
        Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // Create default admin user if no users exist
    create_default_admin(repos.as_ref(), &app_cfg).await;

    // ── REST API server ────────────────────────────────────────
    let api_router = create_api_router(repos, db.clone(), jwt_config, prometheus_handle);

    let api_addr = app_cfg.bind_address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Hostal PMS shutdown complete");
    Ok(())
}

/// Create default admin user if no users exist
async fn create_default_admin(repos: &dyn hostal_pms::domain::RepositoryProvider, cfg: &AppConfig) {
    use hostal_pms::domain::user::{User, UserRole};
    use hostal_pms::infrastructure::crypto::password::hash_password;

    let existing = match repos.users().find_all().await {
        Ok(users) => users,
        Err(e) => {
            error!("Failed to query users: {}", e);
            return;
        }
    };
    if !existing.is_empty() {
        return;
    }

    info!("Creating default admin user...");

    let password_hash = match hash_password(&cfg.admin.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash admin password: {}", e);
            return;
        }
    };

    let admin = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: cfg.admin.username.clone(),
        password_hash,
        full_name: cfg.admin.full_name.clone(),
        role: UserRole::Admin,
        is_active: true,
        created_at: chrono::Utc::now(),
    };

    match repos.users().insert(admin).await {
        Ok(user) => info!("Default admin user '{}' created", user.username),
        Err(e) => error!("Failed to create default admin user: {}", e),
    }
}
