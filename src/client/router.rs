use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, MyTrips, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/trips")]
    MyTrips {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
