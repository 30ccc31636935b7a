//! Reactive module - explicit dependency graph between base state and the
//! views and effects derived from it.

mod graph;

pub use graph::{schedule, ChangeSet, Observer, StateInput};
