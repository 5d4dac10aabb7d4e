use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::{FavoriteIds, SelectionSetStore},
    infra::{api::PiolClient, storage::FileStore},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{BrowsePage, ComparePage, FavoritesPage},
        shell::Shell,
    },
    util::{assets, config::AppConfig},
};

/// The comparison shortlist as held for the lifetime of the window.
pub type CompareStore = SelectionSetStore<FileStore>;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Browse {},
    #[route("/compare")]
    Compare {},
    #[route("/favorites")]
    Favorites {},
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    use_context_provider(|| config.clone());

    let store = use_signal({
        let config = config.clone();
        move || CompareStore::load(FileStore::from_config(&config))
    });
    use_context_provider(|| store);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let favorites = use_signal(FavoriteIds::default);
    use_context_provider(|| favorites);

    let client = use_hook({
        let config = config.clone();
        move || match PiolClient::from_config(&config) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, url = %config.api_base_url, "failed to build API client");
                None
            }
        }
    });
    use_context_provider(|| client.clone());

    let _health = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { check_backend(client, toasts).await }
        }
    });

    let _favorites = use_resource({
        let client = client.clone();
        let signed_in = config.api_token.is_some();
        move || {
            let client = client.clone();
            async move {
                if signed_in {
                    sync_favorites(client, favorites).await;
                }
            }
        }
    });

    rsx! {
        document::Style { "{assets::tailwind_css()}" }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

async fn check_backend(client: Option<PiolClient>, toasts: Signal<Vec<ToastMessage>>) {
    let Some(client) = client else {
        push_toast(
            toasts,
            ToastKind::Error,
            "Impossible d'initialiser le client API.",
        );
        return;
    };

    match client.health_check().await {
        Ok(()) => info!("backend reachable"),
        Err(err) => {
            warn!(error = %err, "backend health check failed");
            push_toast(
                toasts,
                ToastKind::Warning,
                "Serveur injoignable : les annonces peuvent être indisponibles.",
            );
        }
    }
}

async fn sync_favorites(client: Option<PiolClient>, mut favorites: Signal<FavoriteIds>) {
    let Some(client) = client else {
        return;
    };

    match client.get_favorites().await {
        Ok(listings) => favorites.set(FavoriteIds::from_properties(&listings)),
        Err(err) => warn!(error = %err, "failed to load favorites"),
    }
}

#[component]
pub fn Browse() -> Element {
    rsx! { Shell { BrowsePage {} } }
}

#[component]
pub fn Compare() -> Element {
    rsx! { Shell { ComparePage {} } }
}

#[component]
pub fn Favorites() -> Element {
    rsx! { Shell { FavoritesPage {} } }
}
