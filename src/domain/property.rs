//! Listing data as served by the Piol backend.

use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Identifier for listings returned by the backend.
pub type PropertyId = String;

/// Fallback deposit, expressed in months of rent.
pub const DEFAULT_DEPOSIT_MONTHS: f64 = 2.0;

/// A rental listing. Read-only on the client side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Backend kind code (`STUDIO`, `VILLA`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Monthly rent.
    pub price: f64,
    #[serde(default)]
    pub deposit: Option<f64>,
    #[serde(default)]
    pub fees: Option<f64>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    /// Living area in m².
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub air_conditioned: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub security: bool,
    #[serde(default)]
    pub internet: bool,
    #[serde(default)]
    pub water: bool,
    #[serde(default)]
    pub electricity: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub city: Option<NamedRef>,
    #[serde(default)]
    pub neighborhood: Option<NeighborhoodField>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_available() -> bool {
    true
}

impl Property {
    /// Deposit as listed, or two months of rent when the listing leaves it out.
    pub fn effective_deposit(&self) -> f64 {
        self.deposit
            .unwrap_or(self.price * DEFAULT_DEPOSIT_MONTHS)
    }

    pub fn effective_fees(&self) -> f64 {
        self.fees.unwrap_or(0.0)
    }

    /// Up-front cost of moving in: first rent, deposit and agency fees.
    pub fn move_in_cost(&self) -> f64 {
        self.price + self.effective_deposit() + self.effective_fees()
    }

    pub fn neighborhood_score(&self) -> Option<&NeighborhoodScore> {
        self.neighborhood.as_ref().and_then(NeighborhoodField::score)
    }

    /// Overall neighborhood rating, 0 when the backend has none.
    pub fn neighborhood_overall(&self) -> f64 {
        self.neighborhood_score()
            .map(|score| score.overall)
            .unwrap_or(0.0)
    }

    pub fn city_name(&self) -> Option<&str> {
        self.city.as_ref().map(|city| city.name.as_str())
    }

    pub fn neighborhood_name(&self) -> Option<&str> {
        self.neighborhood.as_ref().map(NeighborhoodField::name)
    }

    pub fn kind_label(&self) -> &str {
        match self.kind.as_str() {
            "STUDIO" => "Studio",
            "APPARTEMENT" => "Appartement",
            "MAISON" => "Maison",
            "CHAMBRE" => "Chambre",
            "VILLA" => "Villa",
            "DUPLEX" => "Duplex",
            other => other,
        }
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Publication timestamp, if the backend sent a parseable one.
    pub fn listed_on(&self) -> Option<OffsetDateTime> {
        self.created_at
            .as_deref()
            .and_then(|raw| OffsetDateTime::parse(raw, &Rfc3339).ok())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// The backend sends the neighborhood either as a bare name or as a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NeighborhoodField {
    Detailed(Neighborhood),
    Name(String),
}

impl NeighborhoodField {
    pub fn name(&self) -> &str {
        match self {
            NeighborhoodField::Detailed(neighborhood) => &neighborhood.name,
            NeighborhoodField::Name(name) => name,
        }
    }

    pub fn score(&self) -> Option<&NeighborhoodScore> {
        match self {
            NeighborhoodField::Detailed(neighborhood) => neighborhood.score.as_ref(),
            NeighborhoodField::Name(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: Option<NeighborhoodScore>,
}

/// Community ratings for a neighborhood, each on a 0–5 scale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NeighborhoodScore {
    pub security: f64,
    pub accessibility: f64,
    pub amenities: f64,
    pub nightlife: f64,
    pub internet: f64,
    pub overall: f64,
    pub total_ratings: u32,
    pub description: Option<String>,
    pub highlights: Vec<String>,
    pub concerns: Vec<String>,
    pub average_rent: Option<f64>,
    pub transport_cost: Option<f64>,
    pub popular_for: Vec<String>,
}

pub const SCORE_SCALE: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Criterion {
    pub label: &'static str,
    pub value: f64,
    /// Fill of the rating bar, 0–100.
    pub percentage: f64,
}

impl NeighborhoodScore {
    pub fn criteria(&self) -> Vec<Criterion> {
        [
            ("Sécurité", self.security),
            ("Accessibilité", self.accessibility),
            ("Commodités", self.amenities),
            ("Vie nocturne", self.nightlife),
            ("Internet", self.internet),
        ]
        .into_iter()
        .map(|(label, value)| Criterion {
            label,
            value,
            percentage: (value / SCORE_SCALE * 100.0).clamp(0.0, 100.0),
        })
        .collect()
    }

    pub fn ratings_label(&self) -> String {
        if self.total_ratings > 1 {
            format!("{} évaluations", self.total_ratings)
        } else {
            format!("{} évaluation", self.total_ratings)
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Bare listing: no amenities, no optional costs, no neighborhood.
    pub fn listing(id: &str, price: f64, bedrooms: u32, bathrooms: u32, area: f64) -> Property {
        Property {
            id: id.to_string(),
            title: format!("Listing {id}"),
            description: String::new(),
            kind: "APPARTEMENT".to_string(),
            price,
            deposit: None,
            fees: None,
            address: String::new(),
            latitude: None,
            longitude: None,
            bedrooms,
            bathrooms,
            area,
            furnished: false,
            air_conditioned: false,
            parking: false,
            security: false,
            internet: false,
            water: false,
            electricity: false,
            images: Vec::new(),
            status: None,
            is_available: true,
            is_premium: false,
            city: None,
            neighborhood: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn rated(overall: f64) -> NeighborhoodField {
        NeighborhoodField::Detailed(Neighborhood {
            id: "n-1".to_string(),
            name: "Bastos".to_string(),
            score: Some(NeighborhoodScore {
                overall,
                ..NeighborhoodScore::default()
            }),
        })
    }
}
