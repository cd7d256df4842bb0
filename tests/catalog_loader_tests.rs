use emcartaz::catalog::loader::load_catalog;
use emcartaz::catalog::store::CatalogError;

#[test_log::test(tokio::test)]
async fn should_load_the_bundled_catalog() {
    let records = load_catalog("data/events.json").await.unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].title, "Festival de Cultura Popular");
    assert_eq!(records[1].title, "Oficina de Teatro para Jovens");
    assert_eq!(records[1].tags.as_deref(), Some("teatro,educação 4"));
    assert_eq!(
        records[0].post_url.as_deref(),
        Some("https://www.instagram.com/p/Cx4mPl0/")
    );
}

#[test_log::test(tokio::test)]
async fn should_surface_a_missing_source() {
    let result = load_catalog("data/nao-existe.json").await;

    assert_eq!(result, Err(CatalogError::UnreadableSource));
}
