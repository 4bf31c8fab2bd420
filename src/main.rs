use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use title_catalog::catalog::handlers::{
    handle_get_title, handle_list_titles, handle_titles_by_category,
};
use title_catalog::catalog::loader::load_catalog;
use title_catalog::catalog::store::CatalogState;
use title_catalog::config::{Command, Config, USAGE};
use title_catalog::pages::handle_index;
use title_catalog::search::handlers::handle_search_by_description;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::from_args(std::env::args().skip(1))? {
        Command::Run(config) => config,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if config.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    // 1. Catalog (loaded once, never replaced):
    tracing::info!("Loading catalog from {}", config.data_path.display());
    let state = CatalogState::from_load(load_catalog(&config.data_path));
    match &state {
        CatalogState::Ready(catalog) => {
            tracing::info!("Catalog ready with {} titles", catalog.len())
        }
        CatalogState::Unavailable { reason } => {
            tracing::error!("Catalog failed to load, serving in degraded mode: {}", reason)
        }
    }
    let state = Arc::new(state);

    // 2. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_index))
        .route("/titles", get(handle_list_titles))
        .route("/titles/:id", get(handle_get_title))
        .route("/titles/category/:category", get(handle_titles_by_category))
        .route(
            "/titles/description/:description",
            get(handle_search_by_description),
        )
        .layer(Extension(state));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
