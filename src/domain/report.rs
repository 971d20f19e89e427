use crate::domain::model::Category;
use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLocation {
    #[serde(rename = "type")]
    pub category: Category,
    pub name: String,
    pub location: String,
    pub gca_score: f64,
    pub target_demographic: String,
    pub best_times: String,
    pub weekly_frequency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub top_3: Vec<ScoredLocation>,
    pub average_gca_score: f64,
    pub total_locations: usize,
}

/// Category summaries in the order each category first appears in the ranked list.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(Vec<(Category, CategorySummary)>);

impl CategoryBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &Category) -> Option<&CategorySummary> {
        self.0
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, summary)| summary)
    }

    pub fn contains_key(&self, category: &Category) -> bool {
        self.get(category).is_some()
    }

    pub fn push(&mut self, category: Category, summary: CategorySummary) {
        match self.0.iter_mut().find(|(key, _)| *key == category) {
            Some(entry) => entry.1 = summary,
            None => self.0.push((category, summary)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().map(|(category, _)| *category)
    }

    pub fn values(&self) -> impl Iterator<Item = &CategorySummary> {
        self.0.iter().map(|(_, summary)| summary)
    }
}

impl Index<&Category> for CategoryBreakdown {
    type Output = CategorySummary;

    fn index(&self, category: &Category) -> &CategorySummary {
        match self.get(category) {
            Some(summary) => summary,
            None => panic!("no summary for category {}", category),
        }
    }
}

impl FromIterator<(Category, CategorySummary)> for CategoryBreakdown {
    fn from_iter<I: IntoIterator<Item = (Category, CategorySummary)>>(iter: I) -> Self {
        let mut breakdown = Self::new();
        for (category, summary) in iter {
            breakdown.push(category, summary);
        }
        breakdown
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, summary) in &self.0 {
            map.serialize_entry(category, summary)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = CategoryBreakdown;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of category summaries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut breakdown = CategoryBreakdown::new();
                while let Some((category, summary)) =
                    access.next_entry::<Category, CategorySummary>()?
                {
                    breakdown.push(category, summary);
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub time: String,
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Fixed Monday to Sunday plan; field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub monday: ScheduleSlot,
    pub tuesday: ScheduleSlot,
    pub wednesday: ScheduleSlot,
    pub thursday: ScheduleSlot,
    pub friday: ScheduleSlot,
    pub saturday: ScheduleSlot,
    pub sunday: ScheduleSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessMetrics {
    pub weekly_interactions_target: u32,
    pub gca_filter1_pass_rate_target: f64,
    pub location_efficiency_target: f64,
    pub monthly_new_locations_target: u32,
    pub follow_up_rate_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetingReport {
    pub top_10_locations: Vec<ScoredLocation>,
    pub by_category: CategoryBreakdown,
    pub optimal_schedule: WeeklySchedule,
    pub success_metrics: SuccessMetrics,
    pub total_locations: usize,
    pub data_freshness: DateTime<Utc>,
}
