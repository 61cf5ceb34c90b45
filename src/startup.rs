use std::time::Duration;

use anyhow::Context;
use rand::Rng;
use sqlx::PgPool;
use thirtyfour::WebDriver;

use crate::dal::query_db::{self, QueryOutcome};
use crate::dal::{result_db, term_db};
use crate::domain::SearchTerm;
use crate::error::SessionError;
use crate::services::extractor;
use crate::services::{CategoryRules, SearchPageLocators, SearchSession};

/// Runs the whole scrape: truncates the previous run's data, loads the home
/// page, then processes the terms one at a time. A term that fails is logged
/// and abandoned; only an unreachable home page or an unrecorded term aborts
/// the run.
pub async fn run(
    pool: &PgPool,
    driver: &WebDriver,
    home_url: &str,
    rules: &CategoryRules,
    terms: &[String],
) -> anyhow::Result<()> {
    term_db::truncate_all(pool)
        .await
        .context("failed to reset the term and result tables")?;
    log::info!("Search term and result tables truncated");

    let mut session = SearchSession::new(driver, SearchPageLocators::google(), home_url);
    session
        .load()
        .await
        .context("could not establish a search session")?;

    for term in terms {
        let search_term = term_db::insert_term(pool, term)
            .await
            .with_context(|| format!("failed to record search term '{term}'"))?;

        if let Err(e) = process_term(pool, &mut session, rules, &search_term).await {
            log::error!("Giving up on term '{}': {e}", search_term.text);
        }
    }

    Ok(())
}

/// One term end to end: search, settle, filter to the web tab, extract,
/// categorize, persist. Extraction and insert faults are contained to the
/// single item; session faults bubble up and end this term.
async fn process_term(
    pool: &PgPool,
    session: &mut SearchSession<'_>,
    rules: &CategoryRules,
    term: &SearchTerm,
) -> Result<(), SessionError> {
    session.search(&term.text).await?;
    pacing_delay().await;
    session.wait_for_results().await?;
    session.filter_to_web_tab().await?;
    session.wait_for_results().await?;

    let containers = session.get_results().await?;
    log::info!("Found {} results for '{}'", containers.len(), term.text);

    for (index, container) in containers.iter().enumerate() {
        let raw = extractor::read_container(container, session.locators()).await;
        let record = match extractor::extract(raw) {
            Ok(record) => record,
            Err(e) => {
                log::error!("Skipping result {} for '{}': {e}", index + 1, term.text);
                continue;
            }
        };

        let category = rules.categorize(&record.url, &record.description);

        match result_db::insert_result(pool, term.id, category, &record).await {
            Ok(()) => log::info!(
                "Inserted result: term_id={}, category={}, headline={}, url={}",
                term.id,
                category.label(),
                record.headline,
                record.url
            ),
            Err(e) => log::error!(
                "Error inserting result '{}' for term_id={}: {e}",
                record.headline,
                term.id
            ),
        }
    }

    Ok(())
}

/// Irregular 2-5s gap between submitting the query and polling for results,
/// so the engine sees no fixed automation cadence.
async fn pacing_delay() {
    let millis = rand::thread_rng().gen_range(2_000..=5_000u64);
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

pub async fn report_results_by_term(pool: &PgPool, term: &str) -> Result<(), sqlx::Error> {
    match query_db::results_by_term(pool, term).await? {
        QueryOutcome::NotFound => {
            println!("No results for the term '{term}'");
            log::info!("No results for the term '{term}'");
        }
        QueryOutcome::Found(rows) => {
            for row in rows {
                println!(
                    "Headline: {}, URL: {}, Description: {}, Content Type: {}",
                    row.headline, row.url, row.description, row.content_type
                );
                log::info!(
                    "Headline: {}, URL: {}, Description: {}, Content Type: {}",
                    row.headline,
                    row.url,
                    row.description,
                    row.content_type
                );
            }
        }
    }

    Ok(())
}

pub async fn report_results_by_content_type(
    pool: &PgPool,
    label: &str,
) -> Result<(), sqlx::Error> {
    match query_db::results_by_content_type(pool, label).await? {
        QueryOutcome::NotFound => {
            println!("No results for content type '{label}'");
            log::info!("No results for content type '{label}'");
        }
        QueryOutcome::Found(rows) => {
            for row in rows {
                println!(
                    "Headline: {}, URL: {}, Description: {}, Search Term: {}",
                    row.headline, row.url, row.description, row.search_term
                );
                log::info!(
                    "Headline: {}, URL: {}, Description: {}, Search Term: {}",
                    row.headline,
                    row.url,
                    row.description,
                    row.search_term
                );
            }
        }
    }

    Ok(())
}
