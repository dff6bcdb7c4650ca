//! Client-side state slices.
//!
//! Each slice is a plain struct provided to the component tree as a
//! `Signal<T>` context from the [`crate::client::App`] root. Collections inside
//! a slice are `Arc`-wrapped: mutation helpers replace the `Arc` wholesale, so
//! the selector layer can use pointer identity to decide whether a derivation
//! needs recomputing.

pub mod checkout;
pub mod events;
pub mod language;
pub mod payment;
pub mod trips;
pub mod user;


pub use checkout::CheckoutState;
pub use events::EventsState;
pub use language::{Language, LanguageState};
pub use payment::PaymentKeysState;
pub use trips::TripsState;
pub use user::UserState;
