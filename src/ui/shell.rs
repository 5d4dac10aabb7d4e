use dioxus::prelude::*;

use crate::app::{CompareStore, Route};
use crate::domain::{FavoriteIds, MAX_COMPARE};
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let store = use_context::<Signal<CompareStore>>();
    let favorites = use_context::<Signal<FavoriteIds>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let selected = store.with(|st| st.len());
    let compare_label = if selected == 0 {
        "Comparer".to_string()
    } else {
        format!("Comparer ({selected}/{MAX_COMPARE})")
    };

    let favorites_label = favorites.with(|ids| {
        if ids.is_empty() {
            "Favoris".to_string()
        } else {
            format!("Favoris ({})", ids.len())
        }
    });

    rsx! {
        div { class: "min-h-screen bg-slate-50 text-slate-900 font-sans",
            header { class: "piol-header border-b border-slate-200 bg-white/95 px-6 py-4 backdrop-blur",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-baseline gap-3",
                        h1 { class: "text-xl font-semibold tracking-tight text-teal-800", "{APP_NAME}" }
                        span { class: "text-xs text-slate-400", "{version_label()}" }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Browse {}),
                            onclick: move |_| { nav.push(Route::Browse {}); },
                            label: "Rechercher".to_string(),
                        }
                        NavButton {
                            active: matches!(current_route, Route::Favorites {}),
                            onclick: move |_| { nav.push(Route::Favorites {}); },
                            label: favorites_label,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Compare {}),
                            onclick: move |_| { nav.push(Route::Compare {}); },
                            label: compare_label,
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: String) -> Element {
    let class = if active {
        "piol-nav-active min-w-[6rem] rounded-lg px-4 py-2 font-semibold"
    } else {
        "min-w-[6rem] rounded-lg border border-transparent px-4 py-2 text-slate-500 transition hover:border-slate-200 hover:bg-slate-100 hover:text-slate-800"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
