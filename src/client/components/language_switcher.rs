use dioxus::prelude::*;

use crate::client::store::{Language, LanguageState};

/// Dropdown that switches the storefront display language.
#[component]
pub fn LanguageSwitcher() -> Element {
    let mut language = use_context::<Signal<LanguageState>>();
    let current = language.read().current;
    let current_label = current.label();

    rsx!(
        div { class: "dropdown dropdown-end",
            div {
                tabindex: "0",
                role: "button",
                class: "btn btn-ghost btn-sm",
                "{current_label}"
            }
            ul {
                tabindex: "0",
                class: "dropdown-content menu bg-base-200 rounded-box z-10 w-36 p-2 shadow",
                {Language::ALL.into_iter().map(|option| {
                    let label = option.label();
                    rsx! {
                        li {
                            button {
                                class: if option == current { "active" },
                                onclick: move |_| language.write().current = option,
                                "{label}"
                            }
                        }
                    }
                })}
            }
        }
    )
}
