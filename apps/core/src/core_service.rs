use std::time::Duration;

use crate::catalog::{CatalogError, CatalogSnapshot};
use crate::config::{validate, Config};
use crate::contract::{CoreRequest, CoreResponse, SearchResponse, SelectionResponse, SuggestionDto};
use crate::debounce::{Clock, Debouncer, SystemClock};
use crate::model::{Hit, Selection};
use crate::navigation::{resolve_target, LogNavigator, NavigationError, Navigator};
use crate::selection::{SelectionAction, SelectionEvent, SelectionState};

#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Catalog(CatalogError),
    Navigation(NavigationError),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Catalog(error) => write!(f, "catalog error: {error}"),
            Self::Navigation(error) => write!(f, "navigation error: {error}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<CatalogError> for ServiceError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<NavigationError> for ServiceError {
    fn from(value: NavigationError) -> Self {
        Self::Navigation(value)
    }
}

/// One search surface: the catalog snapshot, the debounced query, the
/// suggestion selection and the navigator that receives confirmed entries.
pub struct CoreService<C: Clock = SystemClock, N: Navigator = LogNavigator> {
    snapshot: CatalogSnapshot,
    selection: SelectionState,
    debouncer: Debouncer<String, C>,
    navigator: N,
}

impl CoreService {
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        let snapshot = CatalogSnapshot::load(&config.catalog_path, config.index_path.as_deref())?;
        log::info!(
            "catalog loaded songs={} compact_index={}",
            snapshot.catalog.songs.len(),
            snapshot.index.is_some()
        );
        Self::with_snapshot(config, snapshot)
    }

    pub fn with_snapshot(config: Config, snapshot: CatalogSnapshot) -> Result<Self, ServiceError> {
        Self::with_parts(config, snapshot, SystemClock::default(), LogNavigator)
    }
}

impl<C: Clock, N: Navigator> CoreService<C, N> {
    pub fn with_parts(
        config: Config,
        snapshot: CatalogSnapshot,
        clock: C,
        navigator: N,
    ) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        Ok(Self {
            snapshot,
            selection: SelectionState::default(),
            debouncer: Debouncer::new(clock, Duration::from_millis(config.debounce_ms)),
            navigator,
        })
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn search(&self, query: &str) -> Vec<Hit> {
        crate::search::search(&self.snapshot, query)
    }

    pub fn on_query_changed(&mut self, query: &str) {
        self.debouncer.schedule(query.to_string());
    }

    pub fn is_pass_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn time_until_pass(&self) -> Option<Duration> {
        self.debouncer.time_until_due()
    }

    /// Runs the pending search pass if its quiet interval has elapsed.
    pub fn poll(&mut self) -> Option<SelectionAction> {
        let query = self.debouncer.poll()?;
        Some(self.run_pass(&query))
    }

    pub fn flush(&mut self) -> Option<SelectionAction> {
        let query = self.debouncer.flush()?;
        Some(self.run_pass(&query))
    }

    pub fn handle_event(&mut self, event: SelectionEvent) -> Result<SelectionAction, ServiceError> {
        if matches!(event, SelectionEvent::QueryCleared) {
            self.debouncer.cancel_pending();
        }

        let action = self.selection.handle(event);
        log::debug!("selection action={action:?}");
        if let SelectionAction::Confirmed(selection) = &action {
            self.navigate(selection)?;
        }
        Ok(action)
    }

    pub fn handle_command(&mut self, request: CoreRequest) -> Result<CoreResponse, ServiceError> {
        let action = match request {
            CoreRequest::Search(request) => {
                let suggestions = self
                    .search(&request.query)
                    .iter()
                    .map(SuggestionDto::from)
                    .collect();
                return Ok(CoreResponse::Search(SearchResponse { suggestions }));
            }
            CoreRequest::Input(request) => {
                self.on_query_changed(&request.query);
                self.poll()
            }
            CoreRequest::Flush => self.flush(),
            CoreRequest::Event(event) => Some(self.handle_event(event.into())?),
        };

        Ok(CoreResponse::Selection(self.selection_response(action)))
    }

    /// Snapshot of the surface after `action`, for hosts that mirror it.
    pub fn selection_response(&self, action: Option<SelectionAction>) -> SelectionResponse {
        let confirmed = match action {
            Some(SelectionAction::Confirmed(selection)) => Some(selection),
            _ => None,
        };
        let target = confirmed
            .as_ref()
            .and_then(|selection| resolve_target(&self.snapshot.catalog, selection));

        SelectionResponse {
            open: self.selection.is_open(),
            active_index: self.selection.active_index(),
            pass_pending: self.debouncer.is_pending(),
            suggestions: self.selection.results().iter().map(SuggestionDto::from).collect(),
            confirmed,
            target,
        }
    }

    fn run_pass(&mut self, query: &str) -> SelectionAction {
        if query.trim().is_empty() {
            return self.selection.handle(SelectionEvent::QueryCleared);
        }

        let hits = self.search(query);
        log::debug!("search pass query={query:?} hits={}", hits.len());
        self.selection.handle(SelectionEvent::Results(hits))
    }

    fn navigate(&mut self, selection: &Selection) -> Result<(), ServiceError> {
        match resolve_target(&self.snapshot.catalog, selection) {
            Some(target) => self.navigator.navigate(&target).map_err(ServiceError::from),
            None => {
                log::warn!(
                    "no navigation target for kind={:?} reference={}",
                    selection.kind,
                    selection.reference
                );
                Ok(())
            }
        }
    }
}
