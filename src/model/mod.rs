pub mod api;
pub mod cart;
pub mod event;
pub mod payment;
pub mod purchase;
pub mod trip;
pub mod user;
