use anyhow::Context;
use storefront::{Config, Snapshot, init_logger_with_file, load_catalog};

fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();

    // 2. Configuration, then logging
    let config = Config::from_env()?;
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!(dataset = %config.dataset, "Storefront catalog starting...");

    // 3. Load and validate
    let catalog = load_catalog(&config).context("failed to load catalog")?;

    // 4. Render every view
    let snapshot = Snapshot::build(&catalog, config.featured_limit, &config.category);
    let json = serde_json::to_string_pretty(&snapshot)?;
    println!("{json}");

    tracing::info!(
        products = catalog.len(),
        featured = snapshot.featured.len(),
        "Snapshot written"
    );
    Ok(())
}
