//! Observer graph of the dashboard.
//!
//! Base state is split into [`StateInput`]s. Each [`Observer`] declares the
//! inputs it reads; a command reports what it changed as a [`ChangeSet`] and
//! [`schedule`] returns the observers to rerun, derivations first.

use std::collections::BTreeSet;

/// A piece of base state written only by commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateInput {
    Rates,
    SelectedCode,
    FilterTerm,
    DateRange,
    RefreshToken,
}

/// Inputs changed by one command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    inputs: BTreeSet<StateInput>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(inputs: &[StateInput]) -> Self {
        Self {
            inputs: inputs.iter().copied().collect(),
        }
    }

    pub fn insert(&mut self, input: StateInput) {
        self.inputs.insert(input);
    }

    pub fn extend(&mut self, other: ChangeSet) {
        self.inputs.extend(other.inputs);
    }

    pub fn contains(&self, input: StateInput) -> bool {
        self.inputs.contains(&input)
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// A computation rerun when one of its inputs changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Observer {
    AvailableCodes,
    FilteredRates,
    SelectedCurrency,
    /// Effect: (re)issues the series fetch for the current dependency key.
    SeriesLoader,
}

impl Observer {
    /// Every observer in execution order. Pure derivations precede effects.
    pub const ALL: [Observer; 4] = [
        Observer::AvailableCodes,
        Observer::FilteredRates,
        Observer::SelectedCurrency,
        Observer::SeriesLoader,
    ];

    pub fn inputs(self) -> &'static [StateInput] {
        match self {
            Observer::AvailableCodes => &[StateInput::Rates],
            Observer::FilteredRates => &[StateInput::Rates, StateInput::FilterTerm],
            Observer::SelectedCurrency => &[StateInput::Rates, StateInput::SelectedCode],
            Observer::SeriesLoader => &[
                StateInput::SelectedCode,
                StateInput::DateRange,
                StateInput::RefreshToken,
            ],
        }
    }

    pub fn is_effect(self) -> bool {
        matches!(self, Observer::SeriesLoader)
    }

    fn reads_any(self, changes: &ChangeSet) -> bool {
        self.inputs().iter().any(|input| changes.contains(*input))
    }
}

/// Observers affected by `changes`, each at most once, in execution order.
pub fn schedule(changes: &ChangeSet) -> Vec<Observer> {
    Observer::ALL
        .into_iter()
        .filter(|observer| observer.reads_any(changes))
        .collect()
}
