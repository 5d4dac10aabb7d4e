use dioxus::prelude::*;

use crate::domain::ValueScore;

/// Banner naming the best value-for-money listing.
#[component]
pub fn ValueBadge(best: ValueScore) -> Element {
    let score = format!("{:.2}", best.value.unwrap_or_default());
    rsx! {
        div {
            class: "value-badge mb-6 flex items-center gap-4 p-6 shadow-sm",
            div { class: "flex h-12 w-12 items-center justify-center rounded-xl bg-yellow-100 text-2xl", "🏆" }
            div { class: "flex-1",
                h3 { class: "mb-1 text-base font-medium", "Meilleur rapport qualité/prix" }
                p { class: "text-sm font-medium", "{best.title}" }
                p { class: "mt-1 text-xs opacity-80", "Score : {score}" }
            }
        }
    }
}
