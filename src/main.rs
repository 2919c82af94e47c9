use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use psi_directory::utils::{logger, validation::Validate};
use psi_directory::{
    CliConfig, ConfigProvider, DirectoryEngine, FilterCriteria, HttpListingStore, PageWindow,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting psi-directory");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = HttpListingStore::from_config(&config);
    let engine = DirectoryEngine::new(store);

    if let Some(slug) = &config.slug {
        let listing = engine
            .detail_view(slug)
            .await
            .with_context(|| format!("resolving slug '{}'", slug))?;
        println!(
            "{} ({}) — {}",
            listing.display_name,
            listing.registration_code,
            listing.areas.join(", ")
        );
        println!("share link: /listing/{}", engine.share_slug(&listing));
        return Ok(());
    }

    let criteria = FilterCriteria {
        query: config.query.clone(),
        areas: config.areas.clone(),
        approaches: config.approaches.clone(),
        audiences: config.audiences.clone(),
    };
    let window = PageWindow::new(config.page_size())?;

    // The daily ordering is keyed on the server clock in UTC.
    let today = Utc::now().date_naive();
    let view = engine
        .directory_view(&criteria, &window, today)
        .await
        .context("evaluating directory view")?;

    println!("Directory for {} ({} shown):", today, view.listings.len());
    for listing in &view.listings {
        println!(
            "  {} ({}) — /listing/{}",
            listing.display_name,
            listing.registration_code,
            engine.share_slug(listing)
        );
    }
    if view.has_more {
        println!("  … more available (increase --page-size to see further)");
    }

    Ok(())
}
