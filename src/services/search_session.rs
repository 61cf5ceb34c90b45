use std::future::Future;
use std::time::Duration;

use thirtyfour::error::WebDriverResult;
use thirtyfour::prelude::*;
use thirtyfour::Key;

use crate::error::SessionError;

const RESULTS_TIMEOUT: Duration = Duration::from_secs(10);
const TAB_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// How to find each element the session touches. The result page's markup
/// varies by locale and experiment bucket, so the selectors live in one
/// swappable bundle instead of being scattered through the session; tests
/// and alternate locales plug in their own.
#[derive(Debug, Clone)]
pub struct SearchPageLocators {
    pub search_box: By,
    pub result_container: By,
    pub web_tab: By,
    pub overflow_menu: By,
    pub overflow_web_option: By,
    pub headline: By,
    pub link: By,
    pub description: By,
}

impl SearchPageLocators {
    /// Selectors for the live Google results page (Hebrew locale).
    pub fn google() -> Self {
        Self {
            search_box: By::Name("q"),
            result_container: By::Css("div.g.Ww4FFb.vt6azd.tF2Cxc.asEBEc"),
            web_tab: By::XPath("//div[text()='אינטרנט']"),
            overflow_menu: By::Css(r#"div[jscontroller="xdV1C"]"#),
            overflow_web_option: By::Css("a.d4DFfb.nPDzT.T3FoJb div.eJWNqc.YmvwI"),
            headline: By::Css("h3.LC20lb.MBeuO.DKV0Md"),
            link: By::Css("a"),
            description: By::Css("div.VwiC3b.yXK7lf.p4wth.r025kc.hJNv6b.Hdw6tb"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Init,
    Loaded,
    Searched,
    ResultsVisible,
    TabFiltered,
    Ready,
    Failed,
}

impl SessionState {
    /// A new query re-enters the machine from any state that has a page to
    /// type into. That includes `Failed`: the next term starts fresh on the
    /// same page.
    pub(crate) fn can_submit_query(self) -> bool {
        self != SessionState::Init
    }

    /// Where a successful results wait lands, given where it started.
    pub(crate) fn after_results_appear(self) -> Option<SessionState> {
        match self {
            SessionState::Searched => Some(SessionState::ResultsVisible),
            SessionState::TabFiltered => Some(SessionState::Ready),
            _ => None,
        }
    }

    pub(crate) fn can_read_results(self) -> bool {
        matches!(self, SessionState::ResultsVisible | SessionState::Ready)
    }
}

/// Which tier of the tab-filter protocol succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabFilterPath {
    Primary,
    Fallback,
}

pub(crate) enum FallbackOutcome<T, E> {
    Primary(T),
    Fallback { value: T, primary_err: E },
    Exhausted { primary_err: E, fallback_err: E },
}

/// Runs `primary`; on failure runs `fallback` once. `FnOnce` bounds make a
/// second attempt of either tier unrepresentable.
pub(crate) async fn with_fallback<T, E, P, PF, F, FF>(
    primary: P,
    fallback: F,
) -> FallbackOutcome<T, E>
where
    P: FnOnce() -> PF,
    PF: Future<Output = Result<T, E>>,
    F: FnOnce() -> FF,
    FF: Future<Output = Result<T, E>>,
{
    match primary().await {
        Ok(value) => FallbackOutcome::Primary(value),
        Err(primary_err) => match fallback().await {
            Ok(value) => FallbackOutcome::Fallback { value, primary_err },
            Err(fallback_err) => FallbackOutcome::Exhausted {
                primary_err,
                fallback_err,
            },
        },
    }
}

/// One browser session driven through the search flow:
/// `Init → Loaded → Searched → ResultsVisible → TabFiltered → Ready`,
/// with `Failed` absorbing any step that gives up on the current term.
pub struct SearchSession<'d> {
    driver: &'d WebDriver,
    locators: SearchPageLocators,
    home_url: String,
    state: SessionState,
}

impl<'d> SearchSession<'d> {
    pub fn new(
        driver: &'d WebDriver,
        locators: SearchPageLocators,
        home_url: impl Into<String>,
    ) -> Self {
        Self {
            driver,
            locators,
            home_url: home_url.into(),
            state: SessionState::Init,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn locators(&self) -> &SearchPageLocators {
        &self.locators
    }

    /// Navigates to the engine's home page. This is the one failure the run
    /// cannot survive.
    pub async fn load(&mut self) -> Result<(), SessionError> {
        match self.driver.goto(&self.home_url).await {
            Ok(()) => {
                self.state = SessionState::Loaded;
                log::info!("Search engine home page loaded");
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::Failed;
                Err(SessionError::Navigation(e))
            }
        }
    }

    /// Submits `term`, replacing whatever the previous query left in the
    /// search box.
    pub async fn search(&mut self, term: &str) -> Result<(), SessionError> {
        if !self.state.can_submit_query() {
            return Err(SessionError::OutOfOrder {
                state: self.state,
                operation: "submit a query",
            });
        }

        match self.submit_query(term).await {
            Ok(()) => {
                self.state = SessionState::Searched;
                log::info!("Searching for: {term}");
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::Failed;
                Err(e.into())
            }
        }
    }

    async fn submit_query(&self, term: &str) -> WebDriverResult<()> {
        let search_box = self
            .driver
            .query(self.locators.search_box.clone())
            .wait(RESULTS_TIMEOUT, POLL_INTERVAL)
            .first()
            .await?;

        search_box.clear().await?;
        search_box.send_keys(term).await?;
        search_box
            .send_keys(String::from(char::from(Key::Enter)))
            .await
    }

    /// Blocks until at least one raw result container is present, or the
    /// 10 s bound elapses.
    pub async fn wait_for_results(&mut self) -> Result<(), SessionError> {
        let next =
            self.state
                .after_results_appear()
                .ok_or_else(|| SessionError::OutOfOrder {
                    state: self.state,
                    operation: "wait for results",
                })?;

        match self
            .driver
            .query(self.locators.result_container.clone())
            .wait(RESULTS_TIMEOUT, POLL_INTERVAL)
            .first()
            .await
        {
            Ok(_) => {
                self.state = next;
                Ok(())
            }
            Err(source) => {
                self.state = SessionState::Failed;
                Err(SessionError::ResultsTimeout {
                    timeout: RESULTS_TIMEOUT,
                    source,
                })
            }
        }
    }

    /// Narrows results to the generic web vertical. Primary path clicks the
    /// named tab control; if that locator never matches, the overflow menu
    /// is opened and its web option clicked instead, each tier bounded.
    pub async fn filter_to_web_tab(&mut self) -> Result<TabFilterPath, SessionError> {
        if self.state != SessionState::ResultsVisible {
            return Err(SessionError::OutOfOrder {
                state: self.state,
                operation: "filter to the web tab",
            });
        }

        let driver = self.driver;
        let locators = &self.locators;

        let primary = || async move { click_when_present(driver, locators.web_tab.clone()).await };
        let fallback = || async move {
            click_when_present(driver, locators.overflow_menu.clone()).await?;
            click_when_present(driver, locators.overflow_web_option.clone()).await
        };

        match with_fallback(primary, fallback).await {
            FallbackOutcome::Primary(()) => {
                self.state = SessionState::TabFiltered;
                log::info!("Clicked the web tab");
                Ok(TabFilterPath::Primary)
            }
            FallbackOutcome::Fallback { primary_err, .. } => {
                self.state = SessionState::TabFiltered;
                log::error!("Web tab control did not match: {primary_err}");
                log::info!("Clicked the web option behind the overflow menu");
                Ok(TabFilterPath::Fallback)
            }
            FallbackOutcome::Exhausted {
                primary_err,
                fallback_err,
            } => {
                self.state = SessionState::Failed;
                Err(SessionError::TabFilterFailure {
                    primary: primary_err,
                    fallback: fallback_err,
                })
            }
        }
    }

    /// The ordered result containers currently visible. An empty list means
    /// the term yielded nothing, which is not an error.
    pub async fn get_results(&self) -> Result<Vec<WebElement>, SessionError> {
        if !self.state.can_read_results() {
            return Err(SessionError::OutOfOrder {
                state: self.state,
                operation: "read result containers",
            });
        }

        Ok(self
            .driver
            .find_all(self.locators.result_container.clone())
            .await?)
    }
}

async fn click_when_present(driver: &WebDriver, by: By) -> WebDriverResult<()> {
    let element = driver
        .query(by)
        .wait(TAB_TIMEOUT, POLL_INTERVAL)
        .first()
        .await?;
    element.click().await
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{with_fallback, FallbackOutcome, SessionState};

    #[test]
    fn query_submission_needs_a_loaded_page() {
        assert!(!SessionState::Init.can_submit_query());
        assert!(SessionState::Loaded.can_submit_query());
        assert!(SessionState::Ready.can_submit_query());
        // the next term re-enters after a per-term failure
        assert!(SessionState::Failed.can_submit_query());
    }

    #[test]
    fn results_wait_advances_from_searched_and_tab_filtered_only() {
        assert_eq!(
            SessionState::Searched.after_results_appear(),
            Some(SessionState::ResultsVisible)
        );
        assert_eq!(
            SessionState::TabFiltered.after_results_appear(),
            Some(SessionState::Ready)
        );
        assert_eq!(SessionState::Loaded.after_results_appear(), None);
        assert_eq!(SessionState::Failed.after_results_appear(), None);
    }

    #[test]
    fn results_readable_once_visible() {
        assert!(SessionState::ResultsVisible.can_read_results());
        assert!(SessionState::Ready.can_read_results());
        assert!(!SessionState::Searched.can_read_results());
    }

    #[tokio::test]
    async fn fallback_is_not_invoked_when_primary_succeeds() {
        let fallback_calls = Cell::new(0u32);
        let calls = &fallback_calls;

        let outcome = with_fallback(
            || async { Ok::<(), &str>(()) },
            move || async move {
                calls.set(calls.get() + 1);
                Ok(())
            },
        )
        .await;

        assert!(matches!(outcome, FallbackOutcome::Primary(())));
        assert_eq!(fallback_calls.get(), 0);
    }

    #[tokio::test]
    async fn fallback_runs_exactly_once_when_primary_fails() {
        let fallback_calls = Cell::new(0u32);
        let calls = &fallback_calls;

        let outcome = with_fallback(
            || async { Err::<(), &str>("tab control missing") },
            move || async move {
                calls.set(calls.get() + 1);
                Ok(())
            },
        )
        .await;

        assert!(matches!(
            outcome,
            FallbackOutcome::Fallback {
                primary_err: "tab control missing",
                ..
            }
        ));
        assert_eq!(fallback_calls.get(), 1);
    }

    #[tokio::test]
    async fn both_tiers_failing_reports_both_errors() {
        let outcome = with_fallback(
            || async { Err::<(), &str>("no tab") },
            || async { Err::<(), &str>("no overflow menu") },
        )
        .await;

        match outcome {
            FallbackOutcome::Exhausted {
                primary_err,
                fallback_err,
            } => {
                assert_eq!(primary_err, "no tab");
                assert_eq!(fallback_err, "no overflow menu");
            }
            _ => panic!("expected both tiers to fail"),
        }
    }
}
