//! # Selector Memoization
//!
//! Explicit cache structs for derived selectors. Each cache is owned by the
//! selector set that uses it (see [`crate::cart::CartSelectors`]) and is
//! read with the current state snapshot.
//!
//! ## Cache Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Memo          state identity unchanged ─► cached result               │
//! │                                                                         │
//! │  ShallowMemo   as Memo, and a recomputed result equal to the previous  │
//! │                one returns the PREVIOUS Arc (stable identity)           │
//! │                                                                         │
//! │  DerivedMemo   state identity unchanged ─► cached result               │
//! │                inputs equal to last inputs ─► cached result            │
//! │                otherwise recompute, then shallow-equal check           │
//! │                                                                         │
//! │  ParamMemo     one entry per parameter, bounded capacity               │
//! │                hit  = same parameter AND same state identity           │
//! │                stale entry (same parameter, other state) is recomputed │
//! │                in place; overflow evicts the oldest-inserted entry     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! State identity is `Arc::ptr_eq`: reducers return the same `Arc` when a
//! transition leaves a slice untouched, so pointer equality implies no
//! change. Results are handed out as `Arc<R>` so consumers can use the same
//! identity test to skip redundant work.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

type Compute<S, R> = Box<dyn Fn(&S) -> R + Send + Sync>;
type ComputeWith<S, P, R> = Box<dyn Fn(&S, &P) -> R + Send + Sync>;

// =============================================================================
// Memo
// =============================================================================

/// Single-entry cache keyed on state identity.
pub struct Memo<S, R> {
    compute: Compute<S, R>,
    last: Option<(Arc<S>, Arc<R>)>,
    recomputations: usize,
}

impl<S, R> Memo<S, R> {
    pub fn new(compute: impl Fn(&S) -> R + Send + Sync + 'static) -> Self {
        Memo {
            compute: Box::new(compute),
            last: None,
            recomputations: 0,
        }
    }

    pub fn select(&mut self, state: &Arc<S>) -> Arc<R> {
        if let Some((last_state, last_result)) = &self.last {
            if Arc::ptr_eq(last_state, state) {
                return Arc::clone(last_result);
            }
        }

        let result = Arc::new((self.compute)(state));
        self.recomputations += 1;
        self.last = Some((Arc::clone(state), Arc::clone(&result)));
        result
    }

    /// Number of times the compute function has run.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

impl<S, R> fmt::Debug for Memo<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("cached", &self.last.is_some())
            .field("recomputations", &self.recomputations)
            .finish()
    }
}

// =============================================================================
// Shallow Memo
// =============================================================================

/// Single-entry cache that also stabilises result identity.
pub struct ShallowMemo<S, R> {
    compute: Compute<S, R>,
    last_state: Option<Arc<S>>,
    last_result: Option<Arc<R>>,
    recomputations: usize,
}

impl<S, R: PartialEq> ShallowMemo<S, R> {
    pub fn new(compute: impl Fn(&S) -> R + Send + Sync + 'static) -> Self {
        ShallowMemo {
            compute: Box::new(compute),
            last_state: None,
            last_result: None,
            recomputations: 0,
        }
    }

    pub fn select(&mut self, state: &Arc<S>) -> Arc<R> {
        if let (Some(last_state), Some(last_result)) = (&self.last_state, &self.last_result) {
            if Arc::ptr_eq(last_state, state) {
                return Arc::clone(last_result);
            }
        }

        let fresh = (self.compute)(state);
        self.recomputations += 1;
        self.last_state = Some(Arc::clone(state));
        stabilise(&mut self.last_result, fresh)
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

impl<S, R> fmt::Debug for ShallowMemo<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShallowMemo")
            .field("cached", &self.last_result.is_some())
            .field("recomputations", &self.recomputations)
            .finish()
    }
}

// =============================================================================
// Derived Memo
// =============================================================================

/// Cache for a selector derived from several input selectors.
///
/// `inputs` extracts the input values from the state; `combine` derives the
/// result from them. `combine` only runs when the inputs differ from the
/// previous call.
pub struct DerivedMemo<S, I, R> {
    inputs: Compute<S, I>,
    combine: Box<dyn Fn(&I) -> R + Send + Sync>,
    last_state: Option<Arc<S>>,
    last_inputs: Option<I>,
    last_result: Option<Arc<R>>,
    recomputations: usize,
}

impl<S, I: PartialEq, R: PartialEq> DerivedMemo<S, I, R> {
    pub fn new(
        inputs: impl Fn(&S) -> I + Send + Sync + 'static,
        combine: impl Fn(&I) -> R + Send + Sync + 'static,
    ) -> Self {
        DerivedMemo {
            inputs: Box::new(inputs),
            combine: Box::new(combine),
            last_state: None,
            last_inputs: None,
            last_result: None,
            recomputations: 0,
        }
    }

    pub fn select(&mut self, state: &Arc<S>) -> Arc<R> {
        if let (Some(last_state), Some(last_result)) = (&self.last_state, &self.last_result) {
            if Arc::ptr_eq(last_state, state) {
                return Arc::clone(last_result);
            }
        }

        let inputs = (self.inputs)(state);
        self.last_state = Some(Arc::clone(state));

        if let (Some(last_inputs), Some(last_result)) = (&self.last_inputs, &self.last_result) {
            if *last_inputs == inputs {
                return Arc::clone(last_result);
            }
        }

        let fresh = (self.combine)(&inputs);
        self.recomputations += 1;
        self.last_inputs = Some(inputs);
        stabilise(&mut self.last_result, fresh)
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

impl<S, I, R> fmt::Debug for DerivedMemo<S, I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedMemo")
            .field("cached", &self.last_result.is_some())
            .field("recomputations", &self.recomputations)
            .finish()
    }
}

// =============================================================================
// Parameterized Memo
// =============================================================================

struct ParamEntry<S, P, R> {
    param: P,
    state: Arc<S>,
    result: Arc<R>,
}

/// Bounded per-parameter cache, e.g. "cart item by product id".
///
/// Entries keep their insertion position when refreshed; once the cache
/// holds more than `capacity` entries the oldest-inserted one is dropped.
pub struct ParamMemo<S, P, R> {
    compute: ComputeWith<S, P, R>,
    capacity: usize,
    entries: VecDeque<ParamEntry<S, P, R>>,
    recomputations: usize,
}

impl<S, P: PartialEq + Clone, R> ParamMemo<S, P, R> {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize, compute: impl Fn(&S, &P) -> R + Send + Sync + 'static) -> Self {
        let capacity = capacity.max(1);
        ParamMemo {
            compute: Box::new(compute),
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
            recomputations: 0,
        }
    }

    pub fn select(&mut self, state: &Arc<S>, param: &P) -> Arc<R> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.param == *param) {
            if Arc::ptr_eq(&entry.state, state) {
                return Arc::clone(&entry.result);
            }

            let result = Arc::new((self.compute)(state, param));
            self.recomputations += 1;
            entry.state = Arc::clone(state);
            entry.result = Arc::clone(&result);
            return result;
        }

        let result = Arc::new((self.compute)(state, param));
        self.recomputations += 1;
        self.entries.push_back(ParamEntry {
            param: param.clone(),
            state: Arc::clone(state),
            result: Arc::clone(&result),
        });

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }

        result
    }

    /// Whether an entry exists for `param`, stale or not.
    pub fn contains(&self, param: &P) -> bool {
        self.entries.iter().any(|e| e.param == *param)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

impl<S, P, R> fmt::Debug for ParamMemo<S, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamMemo")
            .field("entries", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("recomputations", &self.recomputations)
            .finish()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Stores `fresh` unless it equals the cached result, in which case the
/// cached `Arc` is kept and returned.
fn stabilise<R: PartialEq>(slot: &mut Option<Arc<R>>, fresh: R) -> Arc<R> {
    match slot {
        Some(previous) if **previous == fresh => Arc::clone(previous),
        _ => {
            let result = Arc::new(fresh);
            *slot = Some(Arc::clone(&result));
            result
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
