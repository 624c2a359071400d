//! Static service and activity catalogs
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::activities::Activity;

const DEFAULT_CATALOG_DATA: &str =
    include_str!("../../deskaway-web/static/assets/data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A weekly community event the user can RSVP to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventListing {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub time: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticsService {
    pub id: u32,
    pub label: String,
    pub price: String,
    pub tagline: String,
}

/// Workplace gear rented for the length of a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedTrek {
    pub title: String,
    pub description: String,
    pub price: String,
}

/// Everything the dashboard can offer. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub events: Vec<EventListing>,
    #[serde(default)]
    pub logistics: Vec<LogisticsService>,
    #[serde(default)]
    pub equipment: Vec<EquipmentItem>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub volcano_trek: FeaturedTrek,
}

impl Catalog {
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_CATALOG_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_catalog() -> &'static Self {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn event(&self, id: u32) -> Option<&EventListing> {
        self.events.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn logistic(&self, id: u32) -> Option<&LogisticsService> {
        self.logistics.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn equipment(&self, id: u32) -> Option<&EquipmentItem> {
        self.equipment.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn activity(&self, id: u32) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }
}
