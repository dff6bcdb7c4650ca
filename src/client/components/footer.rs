use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaInstagram, FaTwitter};
use dioxus_free_icons::Icon;

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer {
            class: "footer footer-center bg-base-200 text-base-content p-6 gap-4",
            nav { class: "grid grid-flow-col gap-4",
                a { href: "/about", class: "link link-hover", "About" }
                a { href: "/terms", class: "link link-hover", "Terms" }
                a { href: "/privacy", class: "link link-hover", "Privacy" }
                a { href: "/support", class: "link link-hover", "Support" }
            }
            nav { class: "grid grid-flow-col gap-4",
                a { href: "https://twitter.com/matchdaystore",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaTwitter
                    }
                }
                a { href: "https://instagram.com/matchdaystore",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaInstagram
                    }
                }
            }
            aside {
                p { "© 2026 Matchday. All match tickets subject to availability." }
            }
        }
    )
}
