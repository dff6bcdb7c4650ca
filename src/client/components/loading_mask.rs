//! Blocking loading overlay.
//!
//! The mask has exactly two observable states, hidden and visible, driven by the
//! `visible` prop. It owns no timers; a caller that wants auto-dismiss hides it
//! itself. In local mode the mask is absolutely positioned over its still-rendered
//! children, optionally blurring them in place. The global mode goes through
//! [`GlobalLoading`] and a single [`GlobalLoadingHost`] mounted at the App root,
//! which renders the mask fixed over the whole viewport so it stacks above every
//! other region no matter where the caller sits in the tree.

use dioxus::prelude::*;

/// Visual style of the busy indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingVariant {
    #[default]
    Spinner,
    Dots,
    Bar,
}

impl LoadingVariant {
    fn class(self) -> &'static str {
        match self {
            LoadingVariant::Spinner => "loading loading-spinner loading-lg",
            LoadingVariant::Dots => "loading loading-dots loading-lg",
            LoadingVariant::Bar => "progress w-56",
        }
    }
}

/// Overlay mask rendered over its children while `visible` is set.
#[component]
pub fn LoadingMask(
    visible: bool,
    variant: Option<LoadingVariant>,
    label: Option<String>,
    blur: Option<bool>,
    children: Element,
) -> Element {
    let indicator_class = variant.unwrap_or_default().class();
    let content_class = if visible && blur.unwrap_or(false) {
        "blur-sm pointer-events-none"
    } else {
        ""
    };

    rsx!(
        div { class: "relative",
            div { class: "{content_class}",
                {children}
            }
            if visible {
                div {
                    class: "absolute inset-0 z-40 flex flex-col items-center justify-center gap-2 bg-base-100/60",
                    span { class: "{indicator_class}" }
                    if let Some(label) = label.as_ref() {
                        p { class: "text-sm",
                            "{label}"
                        }
                    }
                }
            }
        }
    )
}

/// State behind the application-wide loading mask.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlobalLoadingState {
    pub visible: bool,
    pub label: Option<String>,
    pub variant: LoadingVariant,
}

impl GlobalLoadingState {
    /// The state while a blocking operation is in flight.
    pub fn shown(label: Option<String>) -> Self {
        Self {
            visible: true,
            label,
            variant: LoadingVariant::default(),
        }
    }
}

/// Handle for toggling the application-wide loading mask.
///
/// Obtained with `use_context::<GlobalLoading>()` anywhere below the App root.
#[derive(Clone, Copy)]
pub struct GlobalLoading {
    state: Signal<GlobalLoadingState>,
}

impl GlobalLoading {
    pub fn new(state: Signal<GlobalLoadingState>) -> Self {
        Self { state }
    }

    pub fn show(&mut self, label: Option<String>) {
        self.state.set(GlobalLoadingState::shown(label));
    }

    pub fn hide(&mut self) {
        self.state.set(GlobalLoadingState::default());
    }

    pub fn is_visible(&self) -> bool {
        self.state.read().visible
    }
}

/// Renders the global mask fixed over the viewport. Mounted once, at the App
/// root, so its stacking never depends on where `show` was called from.
#[component]
pub fn GlobalLoadingHost() -> Element {
    let global = use_context::<GlobalLoading>();
    let state = global.state.read();
    let indicator_class = state.variant.class();

    rsx!(
        if state.visible {
            div {
                class: "fixed inset-0 z-50 flex flex-col items-center justify-center gap-2 bg-base-100/60",
                span { class: "{indicator_class}" }
                if let Some(label) = state.label.as_ref() {
                    p { class: "text-sm",
                        "{label}"
                    }
                }
            }
        }
    )
}
