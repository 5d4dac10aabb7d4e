use dioxus::prelude::*;

use crate::{
    app::{CompareStore, Route},
    domain::{FavoriteIds, Property},
    infra::api::PiolClient,
    ui::{
        components::property_card::PropertyCard,
        hooks::{use_compare_toggle, use_favorite_toggle},
    },
    util::config::AppConfig,
};

#[component]
pub fn FavoritesPage() -> Element {
    let store = use_context::<Signal<CompareStore>>();
    let mut favorites = use_context::<Signal<FavoriteIds>>();
    let client = use_context::<Option<PiolClient>>();
    let config = use_context::<AppConfig>();
    let nav = use_navigator();

    let on_toggle = use_compare_toggle();
    let on_favorite = use_favorite_toggle();

    let signed_in = config.api_token.is_some();
    let listings = use_resource(move || {
        let client = client.clone();
        async move {
            if !signed_in {
                return Ok(Vec::new());
            }
            let Some(client) = client else {
                return Err("Client API indisponible".to_string());
            };
            let listings = client
                .get_favorites()
                .await
                .map_err(|err| err.to_string())?;
            favorites.set(FavoriteIds::from_properties(&listings));
            Ok(listings)
        }
    });

    if !signed_in {
        return rsx! {
            FavoritesHeader {}
            p { class: "rounded-xl border border-slate-200 bg-white p-6 text-sm text-slate-600",
                "Les favoris sont liés à votre compte. Renseignez PIOL_API_TOKEN pour les afficher."
            }
        };
    }

    let can_add = store.with(|st| st.can_add_more());

    let body = match &*listings.read() {
        None => rsx! {
            p { class: "py-16 text-center text-sm text-slate-500", "Chargement..." }
        },
        Some(Err(err)) => rsx! {
            div { class: "rounded-xl border border-rose-200 bg-rose-50 p-6 text-sm text-rose-800",
                "Erreur lors du chargement des favoris : {err}"
            }
        },
        Some(Ok(listings)) => {
            let favorite_ids = favorites();
            // Unfavorited listings disappear without waiting for a refetch.
            let cards: Vec<(Property, bool)> = store.with(|st| {
                listings
                    .iter()
                    .filter(|property| favorite_ids.contains(&property.id))
                    .map(|property| (property.clone(), st.contains(&property.id)))
                    .collect()
            });
            if cards.is_empty() {
                rsx! {
                    div { class: "flex flex-col items-center rounded-2xl border border-slate-200 bg-white py-16",
                        p { class: "mb-4 text-sm text-slate-600", "Aucun favori pour le moment." }
                        button {
                            class: "rounded-lg bg-teal-700 px-4 py-2 text-sm font-medium text-white hover:bg-teal-600",
                            onclick: move |_| { nav.push(Route::Browse {}); },
                            "Rechercher des propriétés"
                        }
                    }
                }
            } else {
                rsx! {
                    div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for (property, in_compare) in cards {
                            PropertyCard {
                                in_compare,
                                can_add,
                                favorite: true,
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
            FavoritesHeader {}
            {body}
        }
    }
}

#[component]
fn FavoritesHeader() -> Element {
    rsx! {
        header { class: "mb-6",
            h1 { class: "text-2xl font-medium text-slate-900", "Mes favoris" }
            p { class: "text-sm text-slate-500", "Vos propriétés favorites" }
        }
    }
}
