pub mod app;
pub mod components;
pub mod router;
pub mod routes;
pub mod selectors;
pub mod store;
pub mod util;

pub use app::App;
