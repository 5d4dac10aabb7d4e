use dioxus::prelude::*;

use crate::domain::NeighborhoodScore;

#[component]
pub fn NeighborhoodCard(name: String, score: NeighborhoodScore) -> Element {
    let criteria = score
        .criteria()
        .into_iter()
        .map(|criterion| {
            let value = format!("{:.1}", criterion.value);
            let width = format!("width: {:.0}%", criterion.percentage);
            (criterion.label, value, width)
        })
        .collect::<Vec<_>>();
    let ratings = score.ratings_label();
    let overall = format!("{:.1}", score.overall);

    rsx! {
        div { class: "rounded-2xl border border-slate-200 bg-white p-5 shadow-sm",
            div { class: "mb-4 flex items-start justify-between",
                div {
                    h3 { class: "text-sm font-medium text-slate-900", "Score du Quartier" }
                    p { class: "text-xs text-slate-500", "{name}" }
                }
                div { class: "text-right",
                    span { class: "text-2xl font-semibold text-slate-900", "{overall}" }
                    p { class: "text-xs text-slate-500", "{ratings}" }
                }
            }
            div { class: "space-y-3",
                for (label, value, width) in criteria {
                    div { key: "{label}",
                        div { class: "mb-1 flex justify-between text-xs text-slate-600",
                            span { "{label}" }
                            span { "{value}" }
                        }
                        div { class: "rating-bar",
                            span { style: "{width}" }
                        }
                    }
                }
            }
            if let Some(description) = score.description.clone() {
                p { class: "mt-4 text-xs text-slate-600", "{description}" }
            }
            if !score.highlights.is_empty() {
                div { class: "mt-3 flex flex-wrap gap-2",
                    for highlight in score.highlights.iter() {
                        span { class: "rounded-full bg-emerald-50 px-2 py-0.5 text-xs text-emerald-700", "{highlight}" }
                    }
                }
            }
        }
    }
}
