//! Callbacks shared by the listing pages.

use dioxus::prelude::*;
use tracing::warn;

use crate::{
    app::CompareStore,
    domain::{AddRejection, FavoriteIds, Property, MAX_COMPARE},
    infra::api::PiolClient,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
};

/// Adds a listing to the comparison, or removes it when already selected.
pub fn use_compare_toggle() -> Callback<Property> {
    let mut store = use_context::<Signal<CompareStore>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    use_callback(move |property: Property| {
        let id = property.id.clone();
        if store.with(|st| st.contains(&id)) {
            store.with_mut(|st| st.remove(&id));
            push_toast(toasts, ToastKind::Info, "Retiré de la comparaison.");
            return;
        }

        let title = property.title.clone();
        match store.with_mut(|st| st.try_add(property)) {
            Ok(()) => push_toast(
                toasts,
                ToastKind::Success,
                format!("« {title} » ajouté à la comparaison."),
            ),
            Err(AddRejection::CapacityReached) => push_toast(
                toasts,
                ToastKind::Warning,
                format!("Vous pouvez comparer au maximum {MAX_COMPARE} propriétés."),
            ),
            Err(AddRejection::AlreadySelected) => push_toast(
                toasts,
                ToastKind::Info,
                "Cette propriété est déjà dans la comparaison.",
            ),
        }
    })
}

/// Flips a listing's favorite flag on the backend and mirrors the answer locally.
pub fn use_favorite_toggle() -> Callback<Property> {
    let mut favorites = use_context::<Signal<FavoriteIds>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<Option<PiolClient>>();

    use_callback(move |property: Property| {
        let client = client.clone();
        spawn(async move {
            let Some(client) = client else {
                push_toast(toasts, ToastKind::Error, "Client API indisponible.");
                return;
            };
            match client.toggle_favorite(&property.id).await {
                Ok(toggle) => {
                    favorites.with_mut(|ids| ids.set(&property.id, toggle.is_favorite));
                    let fallback = if toggle.is_favorite {
                        "Ajouté aux favoris."
                    } else {
                        "Favori retiré."
                    };
                    let text = toggle
                        .message
                        .filter(|message| !message.trim().is_empty())
                        .unwrap_or_else(|| fallback.to_string());
                    push_toast(toasts, ToastKind::Success, text);
                }
                Err(err) => {
                    warn!(property = %property.id, error = %err, "failed to toggle favorite");
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        "Erreur lors de la modification du favori.",
                    );
                }
            }
        });
    })
}
