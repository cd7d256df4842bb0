use emcartaz::browser::CatalogBrowser;
use emcartaz::catalog::loader::load_catalog;
use emcartaz::config::env_loader::load_config;
use emcartaz::tracing::setup_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    setup_tracing();

    let config = load_config();

    let mut records = load_catalog(&config.data_path).await.unwrap_or_else(|err| {
        warn!("Couldn't load the catalog ({err:?}). Starting empty.");
        Vec::new()
    });

    if let Some(limit) = config.debug_config.event_limit {
        records.truncate(limit);
    }

    let mut browser = CatalogBrowser::new(config.page_size);
    browser.replace_all(records);
    browser.set_query(config.query);
    browser.set_tag_tokens(config.tag_tokens);
    browser.set_date_preset(config.date_preset);

    info!(
        "Showing {} of {} event(s)",
        browser.visible().len(),
        browser.total_filtered()
    );

    browser.visible().iter().for_each(|event| {
        info!(
            "Em cartaz: {} ({})",
            event.title,
            event.date.as_deref().unwrap_or("sem data")
        )
    });
}
