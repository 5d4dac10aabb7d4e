//! Side-by-side comparison table, one column per selected listing.

use super::property::Property;

pub const CURRENCY: &str = "FCFA";
const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Debug, PartialEq)]
pub struct CompareSection {
    pub title: &'static str,
    pub rows: Vec<CompareRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompareRow {
    pub label: &'static str,
    /// One cell per listing, in selection order.
    pub cells: Vec<String>,
}

impl CompareRow {
    fn new(label: &'static str, properties: &[Property], cell: impl Fn(&Property) -> String) -> Self {
        Self {
            label,
            cells: properties.iter().map(cell).collect(),
        }
    }
}

pub fn comparison_sections(properties: &[Property]) -> Vec<CompareSection> {
    let mut sections = vec![
        CompareSection {
            title: "Prix et Frais",
            rows: vec![
                CompareRow::new("Loyer mensuel", properties, |p| format_money(p.price)),
                CompareRow::new("Caution", properties, |p| format_money(p.effective_deposit())),
                CompareRow::new("Frais d'agence", properties, |p| match p.fees {
                    Some(fees) if fees > 0.0 => format_money(fees),
                    _ => "Inclus".to_string(),
                }),
                CompareRow::new("Total initial", properties, |p| format_money(p.move_in_cost())),
            ],
        },
        CompareSection {
            title: "Caractéristiques",
            rows: vec![
                CompareRow::new("Type", properties, |p| p.kind_label().to_string()),
                CompareRow::new("Chambres", properties, |p| p.bedrooms.to_string()),
                CompareRow::new("Salles de bain", properties, |p| p.bathrooms.to_string()),
                CompareRow::new("Surface", properties, |p| format!("{} m²", p.area)),
            ],
        },
        CompareSection {
            title: "Équipements",
            rows: vec![
                CompareRow::new("Meublé", properties, |p| yes_no(p.furnished)),
                CompareRow::new("Climatisé", properties, |p| yes_no(p.air_conditioned)),
                CompareRow::new("Parking", properties, |p| yes_no(p.parking)),
                CompareRow::new("Sécurité", properties, |p| yes_no(p.security)),
                CompareRow::new("Internet", properties, |p| yes_no(p.internet)),
            ],
        },
        CompareSection {
            title: "Localisation",
            rows: vec![
                CompareRow::new("Ville", properties, |p| or_na(p.city_name())),
                CompareRow::new("Quartier", properties, |p| or_na(p.neighborhood_name())),
                CompareRow::new("Adresse", properties, |p| or_na(Some(p.address.as_str()))),
            ],
        },
    ];

    if properties.iter().any(|p| p.neighborhood_score().is_some()) {
        sections.push(CompareSection {
            title: "Score du Quartier",
            rows: vec![
                CompareRow::new("Score global", properties, |p| {
                    rating(p.neighborhood_score().map(|s| s.overall))
                }),
                CompareRow::new("Sécurité", properties, |p| {
                    rating(p.neighborhood_score().map(|s| s.security))
                }),
                CompareRow::new("Transport", properties, |p| {
                    rating(p.neighborhood_score().map(|s| s.accessibility))
                }),
            ],
        });
    }

    sections
}

/// Whole currency units with French digit grouping, e.g. `1 250 000 FCFA`.
pub fn format_money(amount: f64) -> String {
    format!("{} {CURRENCY}", group_thousands(amount.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "Oui" } else { "Non" };
    label.to_string()
}

fn or_na(value: Option<&str>) -> String {
    value
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Ratings of zero are treated as "not rated yet".
fn rating(value: Option<f64>) -> String {
    match value {
        Some(score) if score > 0.0 => format!("{score:.1}/5"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::property::{fixtures::{listing, rated}, NamedRef};

    fn row<'a>(sections: &'a [CompareSection], title: &str, label: &str) -> &'a CompareRow {
        sections
            .iter()
            .find(|section| section.title == title)
            .and_then(|section| section.rows.iter().find(|row| row.label == label))
            .unwrap()
    }

    #[test]
    fn groups_digits_french_style() {
        assert_eq!(format_money(0.0), "0 FCFA");
        assert_eq!(format_money(950.0), "950 FCFA");
        assert_eq!(format_money(100_000.0), "100 000 FCFA");
        assert_eq!(format_money(1_250_000.4), "1 250 000 FCFA");
        assert_eq!(format_money(-4_500.0), "-4 500 FCFA");
    }

    #[test]
    fn cost_rows_apply_fallbacks() {
        let a = listing("a", 100_000.0, 2, 1, 50.0);
        let mut b = listing("b", 150_000.0, 3, 2, 80.0);
        b.deposit = Some(150_000.0);
        b.fees = Some(50_000.0);
        let sections = comparison_sections(&[a, b]);

        assert_eq!(
            row(&sections, "Prix et Frais", "Caution").cells,
            vec!["200 000 FCFA", "150 000 FCFA"]
        );
        assert_eq!(
            row(&sections, "Prix et Frais", "Frais d'agence").cells,
            vec!["Inclus", "50 000 FCFA"]
        );
        assert_eq!(
            row(&sections, "Prix et Frais", "Total initial").cells,
            vec!["300 000 FCFA", "350 000 FCFA"]
        );
    }

    #[test]
    fn features_and_location_cells() {
        let mut a = listing("a", 1.0, 2, 1, 42.5);
        a.parking = true;
        a.city = Some(NamedRef {
            id: "c".to_string(),
            name: "Douala".to_string(),
        });
        let sections = comparison_sections(&[a]);

        assert_eq!(row(&sections, "Caractéristiques", "Surface").cells, vec!["42.5 m²"]);
        assert_eq!(row(&sections, "Équipements", "Parking").cells, vec!["Oui"]);
        assert_eq!(row(&sections, "Équipements", "Meublé").cells, vec!["Non"]);
        assert_eq!(row(&sections, "Localisation", "Ville").cells, vec!["Douala"]);
        assert_eq!(row(&sections, "Localisation", "Adresse").cells, vec!["N/A"]);
    }

    #[test]
    fn neighborhood_section_only_when_rated() {
        let plain = listing("a", 1.0, 0, 0, 0.0);
        assert_eq!(comparison_sections(&[plain.clone()]).len(), 4);

        let mut scored = listing("b", 1.0, 0, 0, 0.0);
        scored.neighborhood = Some(rated(4.3));
        let sections = comparison_sections(&[plain, scored]);
        assert_eq!(sections.len(), 5);
        assert_eq!(
            row(&sections, "Score du Quartier", "Score global").cells,
            vec!["N/A", "4.3/5"]
        );
    }
}
