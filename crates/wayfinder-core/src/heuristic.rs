//! The heuristic contract.

use std::sync::Arc;

/// An estimate of remaining cost-to-goal used to guide informed search.
///
/// Implementations are pure: evaluation has no side effects and returns a
/// non-negative value. Any lookup tables are precomputed at construction
/// and treated as read-only afterwards, so a heuristic can be shared
/// across simultaneous searches on independent problem instances.
pub trait Heuristic<S> {
    /// Returns the estimated remaining cost from `state` to a goal.
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, H: Heuristic<S> + ?Sized> Heuristic<S> for &H {
    fn evaluate(&self, state: &S) -> f64 {
        (**self).evaluate(state)
    }
}

impl<S, H: Heuristic<S> + ?Sized> Heuristic<S> for Arc<H> {
    fn evaluate(&self, state: &S) -> f64 {
        (**self).evaluate(state)
    }
}

/// Adapter implementing [`Heuristic`] for a plain closure.
///
/// # Example
///
/// ```
/// use wayfinder_core::{FnHeuristic, Heuristic};
///
/// let distance_to_ten = FnHeuristic::new(|state: &i64| (10 - state).abs() as f64);
/// assert_eq!(distance_to_ten.evaluate(&7), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct FnHeuristic<F>(F);

impl<F> FnHeuristic<F> {
    /// Wraps `f` as a heuristic.
    pub fn new<S>(f: F) -> Self
    where
        F: Fn(&S) -> f64,
    {
        Self(f)
    }
}

impl<S, F: Fn(&S) -> f64> Heuristic<S> for FnHeuristic<F> {
    fn evaluate(&self, state: &S) -> f64 {
        (self.0)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_adapter_evaluates() {
        let h = FnHeuristic::new(|state: &u32| f64::from(*state) * 2.0);
        assert_eq!(h.evaluate(&3), 6.0);
    }

    #[test]
    fn shared_heuristic_evaluates_through_arc() {
        let h = Arc::new(FnHeuristic::new(|state: &u32| f64::from(*state)));
        let shared = Arc::clone(&h);
        assert_eq!(shared.evaluate(&5), 5.0);
        assert_eq!(h.evaluate(&5), 5.0);
    }
}
