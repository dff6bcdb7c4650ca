//! Memoized read-projections from store slices into UI-ready derived values.
//!
//! Selectors are pure: they never mutate a slice, never perform I/O, and never
//! fail. Absent or malformed inputs degrade to safe defaults (zero, `false`,
//! empty collections, `None`, or a documented fallback object). The only hidden
//! state is the per-selector memoization cache described in [`memo`], keyed on
//! the identity of the specific sub-slices a selector consumes rather than on
//! the state tree as a whole.
//!
//! Time-dependent derivations ([`user::trip_history`],
//! [`payment::should_refresh`]) take `now` explicitly and skip memoization.

pub mod checkout;
pub mod events;
pub mod memo;
pub mod payment;
pub mod trips;
pub mod user;


pub use checkout::CheckoutSelectors;
pub use events::EventSelectors;
pub use trips::TripSelectors;
pub use user::UserSelectors;

/// All memoized selector families, bundled for the component tree.
///
/// The [`crate::client::App`] root provides one instance as an
/// `Rc<StorefrontSelectors>` context so every component shares the same caches.
/// Selector caches use `RefCell` internally, which is fine under the
/// single-threaded UI event loop.
#[derive(Default)]
pub struct StorefrontSelectors {
    pub checkout: CheckoutSelectors,
    pub events: EventSelectors,
    pub trips: TripSelectors,
    pub user: UserSelectors,
}

impl StorefrontSelectors {
    pub fn new() -> Self {
        Self::default()
    }
}
