use blog_api::{
    config::Config,
    infrastructure::database::pool::{create_pool, run_migrations},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,blog_api=debug,sqlx=warn"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    run_migrations(&db, config.ignore_missing_migrations).await?;
    tracing::info!("Schema is up to date");

    let state = AppState::new(db, config);

    for name in &state.config.seed_categories {
        let category = state.categories.ensure_category(name).await?;
        tracing::info!("Category '{}' ready (id {})", category.name, category.id);
    }

    let posts = state.posts.get_all_posts().await?;
    tracing::info!(
        "Blog store ready: {} posts, {} seeded categories",
        posts.len(),
        state.config.seed_categories.len()
    );

    state.db.close().await;
    Ok(())
}
