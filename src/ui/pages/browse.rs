use std::time::Duration;

use dioxus::prelude::*;
use tracing::debug;

use crate::{
    app::CompareStore,
    domain::{FavoriteIds, Property, MAX_COMPARE},
    infra::api::{CacheStatus, PiolClient, PropertyFilters},
    ui::{
        components::property_card::PropertyCard,
        hooks::{use_compare_toggle, use_favorite_toggle},
    },
};

const PAGE_SIZE: u32 = 24;

#[component]
pub fn BrowsePage() -> Element {
    let store = use_context::<Signal<CompareStore>>();
    let favorites = use_context::<Signal<FavoriteIds>>();
    let client = use_context::<Option<PiolClient>>();

    let mut search_input = use_signal(String::new);
    let mut max_price_input = use_signal(String::new);
    let mut furnished_only = use_signal(|| false);
    let mut filters = use_signal(|| PropertyFilters {
        limit: Some(PAGE_SIZE),
        ..PropertyFilters::default()
    });

    let mut listings = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let filters = filters();
            async move {
                let Some(client) = client else {
                    return Err("Client API indisponible".to_string());
                };
                client
                    .get_properties(&filters)
                    .await
                    .map_err(|err| err.to_string())
            }
        }
    });

    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        let max_price = max_price_input()
            .trim()
            .replace(' ', "")
            .parse::<f64>()
            .ok()
            .filter(|price| *price > 0.0);
        let next = PropertyFilters {
            search: Some(search_input().trim().to_string()),
            max_price,
            furnished: furnished_only().then_some(true),
            limit: Some(PAGE_SIZE),
            ..PropertyFilters::default()
        };
        debug!(?next, "listing filters updated");
        filters.set(next);
    };

    let on_toggle = use_compare_toggle();
    let on_favorite = use_favorite_toggle();

    let on_reload = move |_| {
        let client = client.clone();
        spawn(async move {
            if let Some(client) = client {
                client.clear_cache().await;
            }
            listings.restart();
        });
    };

    let can_add = store.with(|st| st.can_add_more());

    let body = match &*listings.read() {
        None => rsx! {
            p { class: "py-16 text-center text-sm text-slate-500", "Chargement des annonces..." }
        },
        Some(Err(err)) => rsx! {
            div { class: "rounded-xl border border-rose-200 bg-rose-50 p-6 text-sm text-rose-800",
                "Impossible de charger les annonces : {err}"
            }
        },
        Some(Ok(payload)) if payload.data.properties.is_empty() => rsx! {
            p { class: "py-16 text-center text-sm text-slate-500", "Aucune propriété ne correspond à votre recherche." }
        },
        Some(Ok(payload)) => {
            let stale = (payload.status == CacheStatus::Stale).then(|| format_age(payload.age()));
            let total = payload.data.total;
            let favorite_ids = favorites();
            let cards: Vec<(Property, bool, bool)> = store.with(|st| {
                payload
                    .data
                    .properties
                    .iter()
                    .map(|property| {
                        (
                            property.clone(),
                            st.contains(&property.id),
                            favorite_ids.contains(&property.id),
                        )
                    })
                    .collect()
            });
            rsx! {
                div { class: "space-y-4",
                    div { class: "flex items-center justify-between text-xs text-slate-500",
                        span { "{total} annonce(s)" }
                        div { class: "flex items-center gap-2",
                            if let Some(age) = stale {
                                span { class: "rounded bg-amber-50 px-2 py-0.5 text-amber-700", "Données en cache ({age})" }
                            }
                            button {
                                class: "rounded px-2 py-0.5 text-teal-700 hover:bg-teal-50",
                                onclick: on_reload,
                                "Actualiser"
                            }
                        }
                    }
                    div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for (property, in_compare, favorite) in cards {
                            PropertyCard {
                                in_compare,
                                can_add,
                                favorite,
                                on_toggle,
                                on_favorite,
                                property,
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            header {
                h1 { class: "text-2xl font-medium text-slate-900", "Trouver un logement" }
                p { class: "text-sm text-slate-500",
                    "Ajoutez jusqu'à {MAX_COMPARE} propriétés pour les comparer côte à côte."
                }
            }
            form {
                class: "flex flex-wrap items-end gap-4 rounded-2xl border border-slate-200 bg-white p-4",
                onsubmit: on_search,
                div { class: "min-w-[220px] flex-1",
                    label { class: "block text-xs font-medium uppercase text-slate-500", "Recherche" }
                    input {
                        class: "mt-1 w-full rounded-lg border border-slate-300 px-3 py-2 text-sm focus:border-teal-600 focus:outline-none",
                        value: search_input(),
                        oninput: move |evt| search_input.set(evt.value()),
                        placeholder: "Quartier, ville, type...",
                    }
                }
                div { class: "w-40",
                    label { class: "block text-xs font-medium uppercase text-slate-500", "Loyer max" }
                    input {
                        class: "mt-1 w-full rounded-lg border border-slate-300 px-3 py-2 text-sm focus:border-teal-600 focus:outline-none",
                        inputmode: "numeric",
                        value: max_price_input(),
                        oninput: move |evt| max_price_input.set(evt.value()),
                        placeholder: "150000",
                    }
                }
                label { class: "flex items-center gap-2 text-sm text-slate-600",
                    input {
                        r#type: "checkbox",
                        checked: furnished_only(),
                        onchange: move |evt| furnished_only.set(evt.checked()),
                    }
                    "Meublé"
                }
                button {
                    class: "rounded-lg bg-teal-700 px-4 py-2 text-sm font-medium text-white hover:bg-teal-600",
                    r#type: "submit",
                    "Rechercher"
                }
            }
            {body}
        }
    }
}

/// Short French label for how old a cached page is.
fn format_age(age: Duration) -> String {
    let minutes = age.as_secs() / 60;
    match minutes {
        0 => "à l'instant".to_string(),
        1..=59 => format!("il y a {minutes} min"),
        _ => format!("il y a {} h", minutes / 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_age_is_rounded_down() {
        assert_eq!(format_age(Duration::from_secs(20)), "à l'instant");
        assert_eq!(format_age(Duration::from_secs(125)), "il y a 2 min");
        assert_eq!(format_age(Duration::from_secs(2 * 3600 + 5)), "il y a 2 h");
    }
}
