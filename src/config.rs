use crate::cell::Movement;
use crate::solver::Heuristic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag for stopping a running search from another thread. The search polls it once per
/// expansion.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Settings for a single path query.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Neighbourhood used for expansion (default: orthogonal)
    pub movement: Movement,
    /// Estimate of the remaining cost (default: squared Euclidean)
    pub heuristic: Heuristic,
    /// Reject disconnected endpoints with a union-find pass before searching (default: false)
    pub component_check: bool,
    /// Stop with [PathError::Cancelled](crate::PathError::Cancelled) after this many expansions
    /// (default: none)
    pub max_expansions: Option<usize>,
    /// Token checked before each expansion to stop the search from another thread (default: none)
    pub cancel: Option<CancelToken>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            movement: Movement::Orthogonal,
            heuristic: Heuristic::SquaredEuclidean,
            component_check: false,
            max_expansions: None,
            cancel: None,
        }
    }
}

impl SearchConfig {
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
    pub fn with_component_check(mut self, component_check: bool) -> Self {
        self.component_check = component_check;
        self
    }
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Whether the search should stop before expanding another node.
    pub(crate) fn should_stop(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
            || self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}
