pub mod home;
pub mod my_trips;
pub mod not_found;

pub use home::Home;
pub use my_trips::MyTrips;
pub use not_found::NotFound;
