use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;
use futures::future::{self, BoxFuture, FutureExt};
use fxdash_market_data::{MarketDataError, RatesProvider, RatesSnapshot, SeriesPoint};
use tokio::sync::watch;

use super::dashboard_model::DashboardView;
use super::dashboard_traits::DashboardServiceTrait;
use crate::constants::{DEFAULT_HISTORY_DAYS, RATES_ERROR_MESSAGE, SERIES_ERROR_MESSAGE};
use crate::events::{DashboardEvent, DashboardEventSink, NoOpDashboardEventSink};
use crate::rates::{reconcile_selection, RatesStore};
use crate::reactive::{schedule, ChangeSet, Observer, StateInput};
use crate::selection::{normalize, DateRange, SelectionState};
use crate::series::{SeriesOrchestrator, SeriesPlan, SeriesStore, SeriesTicket, SettleOutcome};
use crate::views::{available_codes, filtered_rates, selected_currency, series_label, DerivedViews};

/// Future driving the fetches issued by one command.
///
/// It is lazy: nothing reaches the provider until it is polled.
pub type Settlement = BoxFuture<'static, ()>;

/// All mutable dashboard state. Guarded by a single mutex.
struct DashboardState {
    selection: SelectionState,
    rates: RatesStore,
    series: SeriesStore,
    orchestrator: SeriesOrchestrator,
    views: DerivedViews,
}

impl DashboardState {
    fn new(date_range: DateRange) -> Self {
        let selection = SelectionState::new(date_range);
        let views = DerivedViews::compute(&[], &selection);
        Self {
            selection,
            rates: RatesStore::new(),
            series: SeriesStore::new(),
            orchestrator: SeriesOrchestrator::new(),
            views,
        }
    }

    fn view(&self) -> DashboardView {
        DashboardView {
            rates: self.rates.resource.clone(),
            last_updated: self.rates.last_updated.clone(),
            series: self.series.resource.clone(),
            series_phase: self.orchestrator.phase(),
            selection: self.selection.clone(),
            views: self.views.clone(),
        }
    }

    /// Reruns every observer reading one of `changes`.
    ///
    /// Returns the series fetch to perform, if the loader issued one.
    fn propagate(
        &mut self,
        changes: &ChangeSet,
        events: &mut Vec<DashboardEvent>,
    ) -> Option<SeriesTicket> {
        let mut fetch = None;
        for observer in schedule(changes) {
            match observer {
                Observer::AvailableCodes => {
                    self.views.available_codes = available_codes(self.rates.rates());
                }
                Observer::FilteredRates => {
                    self.views.filtered_rates =
                        filtered_rates(self.rates.rates(), &self.selection.filter_term);
                }
                Observer::SelectedCurrency => {
                    let code = self.selection.selected_code.as_deref();
                    let currency = selected_currency(self.rates.rates(), code);
                    self.views.series_label = series_label(currency.as_ref(), code);
                    self.views.selected_currency = currency;
                }
                Observer::SeriesLoader => {
                    let key = self.selection.series_key();
                    match self.orchestrator.on_key_change(key, &mut self.series) {
                        SeriesPlan::Idle => {
                            log::debug!("No currency selected, series cleared");
                            events.push(DashboardEvent::SeriesCleared);
                        }
                        SeriesPlan::Fetch(ticket) => {
                            log::debug!(
                                "Issuing series fetch #{} for {} {}..{}",
                                ticket.generation,
                                ticket.code,
                                ticket.start(),
                                ticket.end()
                            );
                            events.push(DashboardEvent::series_requested(
                                ticket.code.clone(),
                                ticket.start(),
                                ticket.end(),
                            ));
                            fetch = Some(ticket);
                        }
                    }
                }
            }
        }
        fetch
    }
}

/// Reactive controller of the FX dashboard.
///
/// Commands are the only writers of base state. Each one applies its change,
/// recomputes the affected views synchronously and hands back a [`Settlement`]
/// for the fetches it issued. Outcomes of superseded fetches are dropped, so
/// the state always reflects the most recently issued request of each kind.
#[derive(Clone)]
pub struct Dashboard {
    provider: Arc<dyn RatesProvider>,
    state: Arc<Mutex<DashboardState>>,
    view_tx: Arc<watch::Sender<DashboardView>>,
    event_sink: Arc<dyn DashboardEventSink>,
}

impl Dashboard {
    /// Dashboard whose range covers the trailing history window ending today.
    pub fn new(provider: Arc<dyn RatesProvider>) -> Self {
        Self::with_history_days(provider, DEFAULT_HISTORY_DAYS)
    }

    pub fn with_history_days(provider: Arc<dyn RatesProvider>, days: i64) -> Self {
        let today = Local::now().date_naive();
        Self::with_date_range(provider, DateRange::trailing_days(today, days))
    }

    pub fn with_date_range(provider: Arc<dyn RatesProvider>, date_range: DateRange) -> Self {
        let state = DashboardState::new(date_range);
        let (view_tx, _) = watch::channel(state.view());
        Self {
            provider,
            state: Arc::new(Mutex::new(state)),
            view_tx: Arc::new(view_tx),
            event_sink: Arc::new(NoOpDashboardEventSink),
        }
    }

    /// Sets the event sink for this dashboard.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DashboardEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    fn lock(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one state transition.
    ///
    /// `apply` returns `None` when it left the state untouched. Otherwise the
    /// reported changes are propagated and a new view is published. Events are
    /// emitted after the lock is released.
    fn mutate<F>(&self, apply: F) -> Option<SeriesTicket>
    where
        F: FnOnce(&mut DashboardState, &mut Vec<DashboardEvent>) -> Option<ChangeSet>,
    {
        let mut events = Vec::new();
        let fetch = {
            let mut state = self.lock();
            match apply(&mut *state, &mut events) {
                Some(changes) => {
                    let fetch = state.propagate(&changes, &mut events);
                    self.view_tx.send_replace(state.view());
                    fetch
                }
                None => None,
            }
        };
        if !events.is_empty() {
            self.event_sink.emit_batch(events);
        }
        fetch
    }

    fn load_series(&self, ticket: Option<SeriesTicket>) -> Settlement {
        let Some(ticket) = ticket else {
            return future::ready(()).boxed();
        };
        let this = self.clone();
        async move {
            let outcome = this
                .provider
                .fetch_series(&ticket.code, ticket.start(), ticket.end())
                .await;
            this.settle_series(&ticket, outcome);
        }
        .boxed()
    }

    fn settle_series(
        &self,
        ticket: &SeriesTicket,
        outcome: Result<Vec<SeriesPoint>, MarketDataError>,
    ) {
        self.mutate(|state, events| {
            let count = outcome.as_ref().map(Vec::len).ok();
            if let Err(e) = &outcome {
                if state.orchestrator.accepts(ticket) {
                    log::warn!(
                        "Series fetch for {} failed ({}): {}",
                        ticket.code,
                        e.kind(),
                        e
                    );
                }
            }
            match state
                .orchestrator
                .settle(ticket, outcome, &mut state.series)
            {
                SettleOutcome::Discarded => {
                    log::debug!(
                        "Discarding superseded series fetch #{} for {}",
                        ticket.generation,
                        ticket.code
                    );
                    events.push(DashboardEvent::series_discarded(ticket.code.clone()));
                    None
                }
                SettleOutcome::Loaded => {
                    events.push(DashboardEvent::series_loaded(
                        ticket.code.clone(),
                        count.unwrap_or_default(),
                    ));
                    Some(ChangeSet::new())
                }
                SettleOutcome::Failed => {
                    events.push(DashboardEvent::series_failed(
                        ticket.code.clone(),
                        SERIES_ERROR_MESSAGE,
                    ));
                    Some(ChangeSet::new())
                }
            }
        });
    }

    fn settle_latest(
        &self,
        generation: u64,
        outcome: Result<RatesSnapshot, MarketDataError>,
    ) -> Option<SeriesTicket> {
        self.mutate(|state, events| {
            if !state.rates.is_current(generation) {
                log::debug!("Discarding superseded rates refresh #{}", generation);
                events.push(DashboardEvent::RatesDiscarded);
                return None;
            }

            match outcome {
                Ok(snapshot) => {
                    log::info!(
                        "Loaded {} rates effective {}",
                        snapshot.rates.len(),
                        snapshot.effective_date
                    );
                    events.push(DashboardEvent::rates_loaded(
                        snapshot.effective_date.clone(),
                        snapshot.rates.len(),
                    ));
                    state.rates.apply_snapshot(snapshot);
                }
                Err(e) => {
                    log::warn!("Latest rates refresh failed ({}): {}", e.kind(), e);
                    events.push(DashboardEvent::rates_failed(RATES_ERROR_MESSAGE));
                    state.rates.apply_failure();
                }
            }

            let mut changes = ChangeSet::of(&[StateInput::Rates]);
            let reconciled = reconcile_selection(
                state.rates.rates(),
                state.selection.selected_code.as_deref(),
            );
            if reconciled != state.selection.selected_code {
                state.selection.selected_code = reconciled.clone();
                events.push(DashboardEvent::selection_changed(reconciled));
                changes.insert(StateInput::SelectedCode);
            }
            Some(changes)
        })
    }

    /// Current state.
    pub fn view(&self) -> DashboardView {
        self.lock().view()
    }

    /// Receiver that observes a new view after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.view_tx.subscribe()
    }

    /// Selects a currency, or clears the selection with `None`.
    ///
    /// Codes not present in the table are accepted; the selected currency
    /// view then resolves to nothing while the series is still fetched.
    pub fn select_code(&self, code: Option<String>) -> Settlement {
        let ticket = self.mutate(|state, events| {
            if state.selection.selected_code == code {
                return None;
            }
            state.selection.selected_code = code.clone();
            events.push(DashboardEvent::selection_changed(code));
            Some(ChangeSet::of(&[StateInput::SelectedCode]))
        });
        self.load_series(ticket)
    }

    pub fn set_filter(&self, term: impl Into<String>) -> Settlement {
        let term = term.into();
        self.mutate(|state, _| {
            if state.selection.filter_term == term {
                return None;
            }
            state.selection.filter_term = term;
            Some(ChangeSet::of(&[StateInput::FilterTerm]))
        });
        future::ready(()).boxed()
    }

    /// Normalizes `range` against the current range and applies it.
    pub fn set_date_range(&self, range: DateRange) -> Settlement {
        let ticket = self.mutate(|state, _| {
            let normalized = normalize(&range, &state.selection.date_range);
            if normalized == state.selection.date_range {
                return None;
            }
            state.selection.date_range = normalized;
            Some(ChangeSet::of(&[StateInput::DateRange]))
        });
        self.load_series(ticket)
    }

    /// Re-fetches both the series for the unchanged key and the latest table.
    pub fn trigger_manual_refresh(&self) -> Settlement {
        let ticket = self.mutate(|state, _| {
            state.selection.refresh_token += 1;
            Some(ChangeSet::of(&[StateInput::RefreshToken]))
        });
        let series = self.load_series(ticket);
        let latest = self.refresh_latest();
        async move {
            futures::join!(series, latest);
        }
        .boxed()
    }

    /// Fetches the latest rates table.
    ///
    /// The settlement completes once the table is applied and any series
    /// fetch caused by the resulting selection change has settled.
    pub fn refresh_latest(&self) -> Settlement {
        let mut generation = 0;
        self.mutate(|state, events| {
            generation = state.rates.begin_refresh();
            log::debug!("Issuing latest rates refresh #{}", generation);
            events.push(DashboardEvent::RatesRequested);
            Some(ChangeSet::new())
        });

        let this = self.clone();
        async move {
            let outcome = this.provider.fetch_latest_table().await;
            let ticket = this.settle_latest(generation, outcome);
            this.load_series(ticket).await;
        }
        .boxed()
    }
}

impl DashboardServiceTrait for Dashboard {
    fn view(&self) -> DashboardView {
        Dashboard::view(self)
    }

    fn subscribe(&self) -> watch::Receiver<DashboardView> {
        Dashboard::subscribe(self)
    }

    fn select_code(&self, code: Option<String>) -> Settlement {
        Dashboard::select_code(self, code)
    }

    fn set_filter(&self, term: String) -> Settlement {
        Dashboard::set_filter(self, term)
    }

    fn set_date_range(&self, range: DateRange) -> Settlement {
        Dashboard::set_date_range(self, range)
    }

    fn trigger_manual_refresh(&self) -> Settlement {
        Dashboard::trigger_manual_refresh(self)
    }

    fn refresh_latest(&self) -> Settlement {
        Dashboard::refresh_latest(self)
    }
}
