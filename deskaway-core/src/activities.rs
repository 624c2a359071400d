//! Activity records and the faceted activity filter
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Work,
    Physical,
    Wellness,
    Art,
    Eats,
}

impl ActivityType {
    pub const ALL: [Self; 5] = [
        Self::Work,
        Self::Physical,
        Self::Wellness,
        Self::Art,
        Self::Eats,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Physical => "Physical",
            Self::Wellness => "Wellness",
            Self::Art => "Art",
            Self::Eats => "Eats",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BestTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationBucket {
    #[serde(rename = "<1hr")]
    UnderOneHour,
    #[serde(rename = "1-3hrs")]
    OneToThreeHours,
    #[serde(rename = "3hrs+")]
    FullDay,
}

impl DurationBucket {
    pub const ALL: [Self; 3] = [Self::UnderOneHour, Self::OneToThreeHours, Self::FullDay];

    /// Wire value, as stored in catalog data.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderOneHour => "<1hr",
            Self::OneToThreeHours => "1-3hrs",
            Self::FullDay => "3hrs+",
        }
    }

    /// Human-facing name for selectors.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::UnderOneHour => "1 Hour",
            Self::OneToThreeHours => "3 Hours",
            Self::FullDay => "Full Day",
        }
    }
}

/// Distance ranges: `< 1`, `1..=5`, `> 5` kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceBucket {
    #[serde(rename = "<1km")]
    UnderOneKm,
    #[serde(rename = "1-5km")]
    OneToFiveKm,
    #[serde(rename = ">5km")]
    OverFiveKm,
}

impl DistanceBucket {
    pub const ALL: [Self; 3] = [Self::UnderOneKm, Self::OneToFiveKm, Self::OverFiveKm];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderOneKm => "<1km",
            Self::OneToFiveKm => "1-5km",
            Self::OverFiveKm => ">5km",
        }
    }

    /// No clamping: negative distances land in the first bucket.
    #[must_use]
    pub fn contains(self, distance_km: f64) -> bool {
        match self {
            Self::UnderOneKm => distance_km < 1.0,
            Self::OneToFiveKm => (1.0..=5.0).contains(&distance_km),
            Self::OverFiveKm => distance_km > 5.0,
        }
    }
}

/// Either free or a preformatted price tag such as `"$"` or `"$50"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Price {
    Free,
    Amount(String),
}

impl Price {
    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }
}

impl From<String> for Price {
    fn from(raw: String) -> Self {
        if raw.eq_ignore_ascii_case("free") {
            Self::Free
        } else {
            Self::Amount(raw)
        }
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        match price {
            Price::Free => "Free".to_string(),
            Price::Amount(amount) => amount,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("Free"),
            Self::Amount(amount) => f.write_str(amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub name: String,
    /// Free-form category tag shown on the card, e.g. `Work/Eats` or `Tour`.
    pub category: String,
    pub activity_type: ActivityType,
    #[serde(default)]
    pub best_time: SmallVec<[BestTime; 2]>,
    pub duration: DurationBucket,
    #[serde(default)]
    pub work_vibe: String,
    pub distance_km: f64,
    pub price: Price,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown {facet} value: {value}")]
pub struct FacetParseError {
    pub facet: &'static str,
    pub value: String,
}

impl FacetParseError {
    fn new(facet: &'static str, value: &str) -> Self {
        Self {
            facet,
            value: value.to_string(),
        }
    }
}

impl FromStr for ActivityType {
    type Err = FacetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FacetParseError::new("type", s))
    }
}

impl FromStr for DurationBucket {
    type Err = FacetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s || d.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FacetParseError::new("duration", s))
    }
}

impl FromStr for DistanceBucket {
    type Err = FacetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| FacetParseError::new("distance", s))
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for DistanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single-select duration facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationSelection {
    #[default]
    All,
    Only(DurationBucket),
}

impl DurationSelection {
    #[must_use]
    pub fn admits(self, bucket: DurationBucket) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == bucket,
        }
    }
}

impl FromStr for DurationSelection {
    type Err = FacetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for DurationSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(bucket) => f.write_str(bucket.label()),
        }
    }
}

/// Facet selections narrowing the activity catalog.
///
/// Facets combine with AND. Within the type and distance facets any selected
/// value may match, and an empty selection places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    duration: DurationSelection,
    types: SmallVec<[ActivityType; 5]>,
    distances: SmallVec<[DistanceBucket; 3]>,
}

impl ActivityFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn duration(&self) -> DurationSelection {
        self.duration
    }

    #[must_use]
    pub fn types(&self) -> &[ActivityType] {
        &self.types
    }

    #[must_use]
    pub fn distances(&self) -> &[DistanceBucket] {
        &self.distances
    }

    pub fn set_duration(&mut self, duration: DurationSelection) {
        self.duration = duration;
    }

    /// Flip membership of `activity_type`. Returns whether it is now selected.
    pub fn toggle_type(&mut self, activity_type: ActivityType) -> bool {
        toggle(&mut self.types, activity_type)
    }

    /// Flip membership of `bucket`. Returns whether it is now selected.
    pub fn toggle_distance(&mut self, bucket: DistanceBucket) -> bool {
        toggle(&mut self.distances, bucket)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.duration == DurationSelection::All && self.types.is_empty() && self.distances.is_empty()
    }

    #[must_use]
    pub fn matches(&self, activity: &Activity) -> bool {
        self.duration.admits(activity.duration)
            && (self.types.is_empty() || self.types.contains(&activity.activity_type))
            && (self.distances.is_empty()
                || self
                    .distances
                    .iter()
                    .any(|bucket| bucket.contains(activity.distance_km)))
    }

    /// Matching activities in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        activities.iter().filter(|a| self.matches(a)).collect()
    }
}

fn toggle<A>(selected: &mut SmallVec<A>, value: A::Item) -> bool
where
    A: smallvec::Array,
    A::Item: PartialEq,
{
    if let Some(idx) = selected.iter().position(|v| *v == value) {
        selected.remove(idx);
        false
    } else {
        selected.push(value);
        true
    }
}
