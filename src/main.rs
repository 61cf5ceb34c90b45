use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use env_logger::Env;
use gsearch::configuration::get_configuration;
use gsearch::services::{term_loader, Browser, CategoryRules};
use gsearch::startup::{report_results_by_content_type, report_results_by_term, run};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let pool_options = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10));
    let connection_pool = pool_options.connect_lazy_with(configuration.database.with_db());

    sqlx::migrate!()
        .run(&connection_pool)
        .await
        .context("failed to run database migrations")?;

    let terms = term_loader::load_terms(&configuration.application.terms_file)?;
    log::info!("Loaded {} search terms", terms.len());

    let rules = CategoryRules::from_file(&configuration.application.category_rules_file)?;

    let browser = Browser::connect(&configuration.webdriver)
        .await
        .context("failed to start a browser session")?;

    let run_result = run(
        &connection_pool,
        &browser.driver,
        &configuration.application.search_engine_url,
        &rules,
        &terms,
    )
    .await;

    // The browser session is released on every exit path before the run's
    // own outcome is reported.
    if let Err(e) = browser.quit().await {
        log::error!("Failed to close the browser session: {e}");
    }
    run_result?;

    let term = prompt("Enter the search term to query")?;
    report_results_by_term(&connection_pool, &term).await?;

    let label = prompt("Enter the content type to query (e.g. 'News')")?;
    report_results_by_content_type(&connection_pool, &label).await?;

    Ok(())
}

fn prompt(label: &str) -> std::io::Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
