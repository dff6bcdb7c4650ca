//! Reference-identity memoization for derived state.
//!
//! Store slices wrap their collections in `Arc`s and replace the `Arc` on every
//! mutation, so two pointer-equal `Arc`s are guaranteed to hold identical data.
//! The selector types here cache the last `(input, output)` pair and hand back
//! the cached `Arc<O>` whenever the inputs are pointer-equal to the previous
//! call, giving downstream consumers a stable reference they can compare cheaply.
//!
//! The cached input `Arc`s are kept alive inside the cache, so a hit can never
//! be caused by an allocator reusing a freed address.

use std::cell::RefCell;
use std::sync::Arc;

/// A memoized derivation over a single slice.
///
/// `select` recomputes only when the input `Arc` differs by pointer from the one
/// seen on the previous call; otherwise it returns a clone of the cached output
/// `Arc`, which is pointer-identical to the previously returned value.
pub struct Selector<I, O> {
    compute: fn(&I) -> O,
    cache: RefCell<Option<(Arc<I>, Arc<O>)>>,
}

impl<I, O> Selector<I, O> {
    pub fn new(compute: fn(&I) -> O) -> Self {
        Self {
            compute,
            cache: RefCell::new(None),
        }
    }

    pub fn select(&self, input: &Arc<I>) -> Arc<O> {
        if let Some((cached_input, cached_output)) = self.cache.borrow().as_ref() {
            if Arc::ptr_eq(cached_input, input) {
                return Arc::clone(cached_output);
            }
        }

        let output = Arc::new((self.compute)(input));
        *self.cache.borrow_mut() = Some((Arc::clone(input), Arc::clone(&output)));
        output
    }
}

/// A memoized derivation over two slices.
///
/// Both inputs must be pointer-equal to the previously seen pair for the cache
/// to hit; a change to either slice forces recomputation.
pub struct Selector2<A, B, O> {
    compute: fn(&A, &B) -> O,
    cache: RefCell<Option<(Arc<A>, Arc<B>, Arc<O>)>>,
}

impl<A, B, O> Selector2<A, B, O> {
    pub fn new(compute: fn(&A, &B) -> O) -> Self {
        Self {
            compute,
            cache: RefCell::new(None),
        }
    }

    pub fn select(&self, a: &Arc<A>, b: &Arc<B>) -> Arc<O> {
        if let Some((cached_a, cached_b, cached_output)) = self.cache.borrow().as_ref() {
            if Arc::ptr_eq(cached_a, a) && Arc::ptr_eq(cached_b, b) {
                return Arc::clone(cached_output);
            }
        }

        let output = Arc::new((self.compute)(a, b));
        *self.cache.borrow_mut() = Some((Arc::clone(a), Arc::clone(b), Arc::clone(&output)));
        output
    }
}

/// A memoized derivation over one slice plus a by-value parameter.
///
/// The parameter participates in the cache key through `PartialEq` rather than
/// pointer identity; pagination is the typical caller.
pub struct KeyedSelector<I, P, O>
where
    P: Clone + PartialEq,
{
    compute: fn(&I, &P) -> O,
    cache: RefCell<Option<(Arc<I>, P, Arc<O>)>>,
}

impl<I, P, O> KeyedSelector<I, P, O>
where
    P: Clone + PartialEq,
{
    pub fn new(compute: fn(&I, &P) -> O) -> Self {
        Self {
            compute,
            cache: RefCell::new(None),
        }
    }

    pub fn select(&self, input: &Arc<I>, param: &P) -> Arc<O> {
        if let Some((cached_input, cached_param, cached_output)) = self.cache.borrow().as_ref() {
            if Arc::ptr_eq(cached_input, input) && cached_param == param {
                return Arc::clone(cached_output);
            }
        }

        let output = Arc::new((self.compute)(input, param));
        *self.cache.borrow_mut() = Some((Arc::clone(input), param.clone(), Arc::clone(&output)));
        output
    }
}
