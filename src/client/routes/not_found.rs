use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(div { class: "p-6 flex flex-col gap-2",
        h1 { class: "text-xl font-bold", "Page not found" }
        p { class: "text-sm opacity-70", "No route matches /{path}" }
    })
}
