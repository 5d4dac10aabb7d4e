use dioxus::prelude::*;

use crate::domain::{format_money, Property};

#[component]
pub fn PropertyCard(
    property: Property,
    in_compare: bool,
    can_add: bool,
    favorite: bool,
    on_toggle: EventHandler<Property>,
    on_favorite: EventHandler<Property>,
) -> Element {
    let location = [property.neighborhood_name(), property.city_name()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    let listed = property.listed_on().map(|at| {
        format!("{:02}/{:02}/{}", at.day(), u8::from(at.month()), at.year())
    });
    let button_class = if in_compare {
        "rounded-lg bg-teal-700 px-3 py-1.5 text-xs font-medium text-white"
    } else if can_add {
        "rounded-lg border border-teal-700 px-3 py-1.5 text-xs font-medium text-teal-700 hover:bg-teal-50"
    } else {
        "rounded-lg border border-slate-200 px-3 py-1.5 text-xs text-slate-400 cursor-not-allowed"
    };
    let button_label = if in_compare { "✓ Comparé" } else { "⇄ Comparer" };
    let price = format_money(property.price);
    let toggled = property.clone();
    let favorited = property.clone();
    let (heart, heart_title) = if favorite {
        ("♥", "Retirer des favoris")
    } else {
        ("♡", "Ajouter aux favoris")
    };

    rsx! {
        article { class: "property-card relative overflow-hidden",
            button {
                class: "favorite-toggle absolute right-3 top-3 h-10 w-10 rounded-full shadow-sm",
                title: "{heart_title}",
                onclick: move |_| on_favorite.call(favorited.clone()),
                "{heart}"
            }
            if let Some(src) = property.cover_image() {
                img { class: "h-40 w-full object-cover", src: "{src}", alt: "{property.title}" }
            } else {
                div { class: "flex h-40 items-center justify-center bg-slate-100 text-4xl", "🏠" }
            }
            div { class: "space-y-2 p-4",
                div { class: "flex items-start justify-between gap-2",
                    h3 { class: "text-sm font-medium text-slate-900 line-clamp-2", "{property.title}" }
                    if property.is_premium {
                        span { class: "rounded-full bg-amber-100 px-2 py-0.5 text-[10px] font-semibold uppercase text-amber-700", "Premium" }
                    }
                }
                p { class: "text-lg font-medium text-teal-700", "{price} / mois" }
                p { class: "text-xs text-slate-500",
                    "{property.kind_label()} · {property.bedrooms} ch. · {property.bathrooms} sdb · {property.area} m²"
                }
                if !location.is_empty() {
                    p { class: "text-xs text-slate-500", "📍 {location}" }
                }
                div { class: "flex items-center justify-between pt-2",
                    if let Some(listed) = listed {
                        span { class: "text-[11px] text-slate-400", "Publié le {listed}" }
                    } else {
                        span {}
                    }
                    button {
                        class: "{button_class}",
                        disabled: !in_compare && !can_add,
                        onclick: move |_| on_toggle.call(toggled.clone()),
                        "{button_label}"
                    }
                }
            }
        }
    }
}
