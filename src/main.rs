//! paged-list demo
//!
//! Connects to the configured database, seeds sample posts when empty and
//! logs one page of them.
//! Reads configuration from TOML file (~/.config/paged-list/config.toml).

use tracing::{error, info};

use paged_list::domain::{GetPostsDto, PostRepository};
use paged_list::infrastructure::{seed_posts, SeaOrmPostRepository};
use paged_list::{default_config_path, init_database, AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PAGED_LIST_CONFIG")
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

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };
    seed_posts(&db).await?;

    // ── Page through posts ─────────────────────────────────────
    let page_number = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<i64>())
        .transpose()?;
    let repo = SeaOrmPostRepository::new(db, app_cfg.pagination.clone());
    let page = repo
        .list_posts(GetPostsDto {
            page: page_number,
            ..Default::default()
        })
        .await?;

    info!(
        page = page.page_number(),
        total_pages = page.total_pages(),
        total = page.total_count(),
        has_next = page.has_next_page(),
        has_previous = page.has_previous_page(),
        "Posts page"
    );
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
