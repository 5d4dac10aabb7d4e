use dioxus::prelude::*;
use tracing::warn;

use crate::{
    app::{CompareStore, Route},
    domain::{
        budget::DEFAULT_MONTHS, comparison_sections, format_money, score_selection, MAX_COMPARE,
    },
    infra::api::PiolClient,
    ui::components::{
        budget_panel::BudgetPanel,
        neighborhood_card::NeighborhoodCard,
        toast::{push_toast, ToastKind, ToastMessage},
        value_badge::ValueBadge,
    },
};

/// One rendered table row: label plus `(text, highlighted)` per column.
type RowView = (&'static str, Vec<(String, bool)>);

#[component]
pub fn ComparePage() -> Element {
    let mut store = use_context::<Signal<CompareStore>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let client = use_context::<Option<PiolClient>>();
    let nav = use_navigator();

    let mut months_input = use_signal(|| DEFAULT_MONTHS.to_string());
    let mut refreshing = use_signal(|| false);

    let properties = store.with(|st| st.current().to_vec());

    if properties.is_empty() {
        return rsx! {
            div { class: "flex flex-col items-center justify-center rounded-2xl border border-slate-200 bg-white py-20 shadow-sm",
                div { class: "mb-6 flex h-20 w-20 items-center justify-center rounded-full bg-teal-50 text-4xl", "🏠" }
                h2 { class: "mb-2 text-xl font-medium text-slate-900", "Aucune propriété à comparer" }
                p { class: "mb-8 max-w-md text-center text-sm text-slate-600",
                    "Sélectionnez 2 à {MAX_COMPARE} propriétés depuis la recherche pour les comparer."
                }
                button {
                    class: "rounded-lg bg-teal-700 px-6 py-2.5 text-sm font-medium text-white hover:bg-teal-600",
                    onclick: move |_| { nav.push(Route::Browse {}); },
                    "Rechercher des propriétés"
                }
            }
        };
    }

    let report = score_selection(&properties);
    let best_flags: Vec<bool> = properties
        .iter()
        .map(|property| report.is_best(&property.id))
        .collect();
    let sections: Vec<(&'static str, Vec<RowView>)> = comparison_sections(&properties)
        .into_iter()
        .map(|section| {
            let rows = section
                .rows
                .into_iter()
                .map(|row| {
                    let cells = row.cells.into_iter().zip(best_flags.iter().copied()).collect();
                    (row.label, cells)
                })
                .collect();
            (section.title, rows)
        })
        .collect();
    let score_row: Vec<(String, bool)> = report
        .scores
        .iter()
        .map(|score| {
            let text = score
                .value
                .map(|value| format!("{value:.2}"))
                .unwrap_or_else(|| "—".to_string());
            (text, report.is_best(&score.property_id))
        })
        .collect();
    let headers: Vec<(String, String, String)> = properties
        .iter()
        .map(|p| (p.id.clone(), p.title.clone(), format_money(p.price)))
        .collect();
    let neighborhoods: Vec<(String, _)> = properties
        .iter()
        .filter_map(|p| {
            let score = p.neighborhood_score()?.clone();
            let name = p.neighborhood_name().unwrap_or_default().to_string();
            Some((name, score))
        })
        .collect();
    let months = months_input()
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|months| *months > 0)
        .unwrap_or(DEFAULT_MONTHS);
    let column_count = properties.len() + 1;
    let ids: Vec<String> = properties.iter().map(|p| p.id.clone()).collect();

    let on_refresh = move |_| {
        let client = client.clone();
        let ids = ids.clone();
        refreshing.set(true);
        spawn(async move {
            let Some(client) = client else {
                push_toast(toasts, ToastKind::Error, "Client API indisponible.");
                refreshing.set(false);
                return;
            };
            let mut failed = 0_usize;
            for id in ids {
                match client.get_property(&id).await {
                    Ok(fresh) => {
                        store.with_mut(|st| st.replace(fresh));
                    }
                    Err(err) => {
                        warn!(property = %id, error = %err, "failed to refresh listing");
                        failed += 1;
                    }
                }
            }
            refreshing.set(false);
            if failed == 0 {
                push_toast(toasts, ToastKind::Success, "Comparaison actualisée.");
            } else {
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    format!("{failed} propriété(s) n'ont pas pu être actualisées."),
                );
            }
        });
    };

    rsx! {
        div { class: "space-y-6",
            header { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-medium text-slate-900", "Comparaison ({properties.len()})" }
                div { class: "flex gap-2",
                    button {
                        class: "rounded-lg px-4 py-2 text-sm font-medium text-teal-700 hover:bg-teal-50",
                        disabled: refreshing(),
                        onclick: on_refresh,
                        if refreshing() { "Actualisation..." } else { "Actualiser" }
                    }
                    button {
                        class: "rounded-lg px-4 py-2 text-sm font-medium text-red-600 hover:bg-red-50",
                        onclick: move |_| store.with_mut(|st| st.clear()),
                        "Tout effacer"
                    }
                }
            }

            if let Some(best) = report.best().cloned() {
                ValueBadge { best }
            } else if properties.len() < 2 {
                p { class: "rounded-xl border border-slate-200 bg-white p-4 text-sm text-slate-500",
                    "Ajoutez au moins une autre propriété pour obtenir une recommandation."
                }
            }

            div { class: "overflow-x-auto rounded-2xl border border-slate-100 bg-white p-6 shadow-md",
                div {
                    class: "grid gap-4 border-b border-slate-100 pb-4",
                    style: "grid-template-columns: repeat({column_count}, minmax(0, 1fr));",
                    div {}
                    for (id, title, price) in headers {
                        div { class: "space-y-1 text-center",
                            h3 { class: "text-sm font-medium text-slate-900 line-clamp-2", "{title}" }
                            p { class: "text-base font-medium text-teal-700", "{price}" }
                            button {
                                class: "text-xs text-red-600 hover:underline",
                                onclick: move |_| store.with_mut(|st| st.remove(&id)),
                                "Retirer"
                            }
                        }
                    }
                }
                for (title, rows) in sections {
                    h2 { class: "mb-2 mt-6 text-lg font-medium text-slate-900", "{title}" }
                    for (label, cells) in rows {
                        CompareRowView { label: label.to_string(), cells, column_count }
                    }
                }
                h2 { class: "mb-2 mt-6 text-lg font-medium text-slate-900", "Rapport qualité/prix" }
                CompareRowView { label: "Score".to_string(), cells: score_row, column_count }
            }

            if !neighborhoods.is_empty() {
                section { class: "grid gap-4 md:grid-cols-3",
                    for (name, score) in neighborhoods {
                        NeighborhoodCard { name, score }
                    }
                }
            }

            section { class: "space-y-4",
                div { class: "flex items-end justify-between",
                    h2 { class: "text-lg font-medium text-slate-900", "Budget estimé" }
                    label { class: "text-xs text-slate-500",
                        "Durée (mois) "
                        input {
                            class: "ml-2 w-16 rounded-lg border border-slate-300 px-2 py-1 text-sm",
                            inputmode: "numeric",
                            value: months_input(),
                            oninput: move |evt| months_input.set(evt.value()),
                        }
                    }
                }
                div { class: "grid gap-4 md:grid-cols-3",
                    for property in properties.iter().cloned() {
                        BudgetPanel { property, months }
                    }
                }
                p { class: "text-xs text-slate-500",
                    "Ces estimations vous aident à planifier votre budget. Les coûts réels peuvent varier selon votre consommation."
                }
            }
        }
    }
}

#[component]
fn CompareRowView(label: String, cells: Vec<(String, bool)>, column_count: usize) -> Element {
    rsx! {
        div {
            class: "grid gap-4 border-b border-slate-100 py-3 last:border-b-0",
            style: "grid-template-columns: repeat({column_count}, minmax(0, 1fr));",
            span { class: "text-sm font-medium text-slate-700", "{label}" }
            for (text, best) in cells {
                div {
                    class: if best { "compare-cell-best rounded-lg px-3 py-2 text-center text-sm font-medium" } else { "rounded-lg bg-slate-50 px-3 py-2 text-center text-sm text-slate-900" },
                    "{text}"
                }
            }
        }
    }
}
