use anyhow::Context;
use blog_search::config::Config;
use blog_search::content::loader::load_posts;
use blog_search::server::build_router;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match Config::from_env_and_args() {
        Ok(config) => config,
        Err(e) => {
            let program = std::env::args().next().unwrap_or_else(|| "blog-search".to_string());
            eprintln!("Error: {:#}", e);
            eprintln!(
                "Usage: {} --posts <file.json|dir> [--bind <addr:port>] [--max-results <n>]",
                program
            );
            eprintln!("Example: {} --posts ./_posts --bind 127.0.0.1:3000", program);
            std::process::exit(1);
        }
    };

    let posts = load_posts(&config.posts_path)
        .with_context(|| format!("Failed to load posts from {}", config.posts_path.display()))?;
    let app = build_router(Arc::new(posts), config.search);

    tracing::info!("Search server listening on {}", config.bind_addr);
    tracing::info!(
        "Listing at most {} results per query",
        config.search.max_results
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
