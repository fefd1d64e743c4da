//! Search session: the view state behind the dashboard and the single
//! transition that drives it.

use tracing::debug;

use crate::model::WeatherSnapshot;
use crate::provider::WeatherProvider;
use crate::theme::{self, Background};

/// The one error message users ever see, whatever actually went wrong.
pub const CITY_NOT_FOUND: &str = "City not found";

/// View state of the dashboard. A snapshot and an error are never
/// displayed together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// Nothing searched yet.
    #[default]
    Idle,
    /// Last search succeeded; previous error (if any) is gone.
    Success(WeatherSnapshot),
    /// Last search failed; previous snapshot (if any) is gone.
    Error(String),
}

impl SearchState {
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            SearchState::Success(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SearchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// One dashboard: a provider plus the state of the latest search.
///
/// `submit` takes `&mut self` and awaits the request to completion, so
/// searches are strictly serialized; there is never a second request in
/// flight whose response could race the first.
#[derive(Debug)]
pub struct Session {
    provider: Box<dyn WeatherProvider>,
    state: SearchState,
}

impl Session {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider, state: SearchState::Idle }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.state.snapshot()
    }

    /// Background for the current state; flat default until the first
    /// successful search.
    pub fn background(&self) -> Background {
        theme::background_for(self.snapshot())
    }

    /// Submit a search. Empty (or whitespace-only) input is a no-op:
    /// no request, no transition. Otherwise exactly one request is made
    /// and the state is replaced wholesale with its outcome.
    pub async fn submit(&mut self, city: &str) -> &SearchState {
        let city = city.trim();
        if city.is_empty() {
            return &self.state;
        }

        match self.provider.current(city).await {
            Ok(snapshot) => self.state = SearchState::Success(snapshot),
            Err(err) => {
                debug!(error = %err, %city, "weather lookup failed");
                self.state = SearchState::Error(CITY_NOT_FOUND.to_string());
            }
        }

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::model::{Condition, Current, Location};
    use crate::provider::ProviderError;

    fn sample_snapshot(city: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location: Location {
                name: city.to_string(),
                country: "Testland".to_string(),
                localtime: "2024-03-10 13:00".to_string(),
            },
            current: Current {
                temp_c: 21.0,
                temp_f: 69.8,
                condition: Condition {
                    text: "Sunny".to_string(),
                    icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".to_string(),
                },
                humidity: 40,
                wind_kph: 6.5,
            },
        }
    }

    /// Provider stub that counts calls and answers from a fixed script.
    #[derive(Debug)]
    struct StubProvider {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl StubProvider {
        fn new(fail: bool) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (Self { calls: Arc::clone(&calls), fail }, calls)
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current(&self, city: &str) -> Result<WeatherSnapshot, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ProviderError::Status {
                    status: reqwest::StatusCode::BAD_REQUEST,
                    body: r#"{"error":{"code":1006,"message":"No matching location found."}}"#
                        .to_string(),
                })
            } else {
                Ok(sample_snapshot(city))
            }
        }
    }

    #[tokio::test]
    async fn starts_idle_with_flat_default_background() {
        let (provider, _) = StubProvider::new(false);
        let session = Session::new(Box::new(provider));

        assert_eq!(*session.state(), SearchState::Idle);
        assert_eq!(session.background(), Background::Flat(theme::LIGHT_SKY_BLUE));
    }

    #[tokio::test]
    async fn empty_input_is_a_no_op() {
        let (provider, calls) = StubProvider::new(false);
        let mut session = Session::new(Box::new(provider));

        session.submit("").await;
        session.submit("   ").await;
        session.submit("\t\n").await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(*session.state(), SearchState::Idle);
    }

    #[tokio::test]
    async fn successful_search_stores_snapshot() {
        let (provider, calls) = StubProvider::new(false);
        let mut session = Session::new(Box::new(provider));

        session.submit("Lisbon").await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let snapshot = session.snapshot().expect("snapshot present");
        assert_eq!(snapshot.location.name, "Lisbon");
        assert_eq!(session.state().error_message(), None);
    }

    #[tokio::test]
    async fn failed_search_clears_snapshot_and_sets_message() {
        let (ok_provider, _) = StubProvider::new(false);
        let mut session = Session::new(Box::new(ok_provider));
        session.submit("Lisbon").await;
        assert!(session.snapshot().is_some());

        // Swap in a failing provider to drive the Success -> Error edge.
        let (failing, _) = StubProvider::new(true);
        session.provider = Box::new(failing);
        session.submit("Nowhereville").await;

        assert_eq!(session.snapshot(), None);
        assert_eq!(session.state().error_message(), Some(CITY_NOT_FOUND));
    }

    #[tokio::test]
    async fn success_after_failure_clears_error_and_replaces_whole_snapshot() {
        let (failing, _) = StubProvider::new(true);
        let mut session = Session::new(Box::new(failing));
        session.submit("Nowhereville").await;
        assert_eq!(session.state().error_message(), Some(CITY_NOT_FOUND));

        let (ok_provider, _) = StubProvider::new(false);
        session.provider = Box::new(ok_provider);
        session.submit("Porto").await;

        assert_eq!(session.state().error_message(), None);
        assert_eq!(session.snapshot().map(|s| s.location.name.as_str()), Some("Porto"));
    }

    #[tokio::test]
    async fn whitespace_around_city_is_trimmed_before_lookup() {
        let (provider, calls) = StubProvider::new(false);
        let mut session = Session::new(Box::new(provider));

        session.submit("  Madrid  ").await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.snapshot().map(|s| s.location.name.as_str()), Some("Madrid"));
    }

    #[tokio::test]
    async fn background_follows_latest_snapshot() {
        let (provider, _) = StubProvider::new(false);
        let mut session = Session::new(Box::new(provider));

        session.submit("Rome").await;

        // Sunny at 13:00 -> noon/gold gradient.
        assert_eq!(
            session.background(),
            Background::Gradient(theme::NOON, theme::GOLD)
        );
    }
}
