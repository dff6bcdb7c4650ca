pub mod footer;
pub mod language_switcher;
pub mod loading_mask;
pub mod navbar;
pub mod page;
pub mod store_title;
pub mod trips_table;


pub use footer::Footer;
pub use language_switcher::LanguageSwitcher;
pub use loading_mask::{
    GlobalLoading, GlobalLoadingHost, GlobalLoadingState, LoadingMask, LoadingVariant,
};
pub use navbar::Navbar;
pub use page::Page;
pub use store_title::StoreTitleButton;
pub use trips_table::TripsTable;
