use dioxus::prelude::*;

use crate::domain::{estimate_budget, format_money, BudgetInputs, Property};

/// Move-in plus running costs for one listing over `months`.
#[component]
pub fn BudgetPanel(property: Property, months: u32) -> Element {
    let inputs = BudgetInputs::for_property(&property).with_months(months);
    let budget = estimate_budget(&property, &inputs);

    let lines = [
        ("Caution", budget.deposit),
        ("Frais d'agence", budget.agency_fees),
        ("Premier loyer", budget.monthly_rent),
        ("Coûts initiaux", budget.initial_costs),
        ("Charges mensuelles", budget.monthly_recurring),
        ("Loyers", budget.total_rent),
        ("Électricité", budget.total_electricity),
        ("Eau", budget.total_water),
        ("Transport", budget.total_transport),
    ];

    rsx! {
        div { class: "rounded-xl border border-slate-200 bg-white p-4",
            h4 { class: "mb-3 text-sm font-medium text-slate-900 line-clamp-1", "{property.title}" }
            dl { class: "space-y-1 text-xs text-slate-600",
                for (label, amount) in lines {
                    if label != "Frais d'agence" || amount > 0.0 {
                        div { class: "flex justify-between",
                            dt { "{label}" }
                            dd { class: "font-medium text-slate-800", "{format_money(amount)}" }
                        }
                    }
                }
            }
            div { class: "mt-3 flex justify-between border-t border-slate-100 pt-3 text-sm",
                span { class: "font-medium", "Total sur {budget.months} mois" }
                span { class: "font-semibold text-teal-700", "{format_money(budget.grand_total)}" }
            }
        }
    }
}
