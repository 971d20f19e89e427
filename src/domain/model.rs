use crate::utils::error::{GcaError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 四種記錄類別，順序即輸出順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MeetupGroups,
    ClimbingGyms,
    UniversityPrograms,
    CoworkingSpaces,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::MeetupGroups,
        Category::ClimbingGyms,
        Category::UniversityPrograms,
        Category::CoworkingSpaces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MeetupGroups => "meetup_groups",
            Category::ClimbingGyms => "climbing_gyms",
            Category::UniversityPrograms => "university_programs",
            Category::CoworkingSpaces => "coworking_spaces",
        }
    }

    /// Human readable label, e.g. "Climbing Gyms".
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::MeetupGroups => "Meetup Groups",
            Category::ClimbingGyms => "Climbing Gyms",
            Category::UniversityPrograms => "University Programs",
            Category::CoworkingSpaces => "Coworking Spaces",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GcaError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
            .ok_or_else(|| GcaError::InvalidConfigValueError {
                field: "types".to_string(),
                value: name.to_string(),
                reason: format!(
                    "Unknown category. Valid categories: {}",
                    Category::ALL.map(|c| c.as_str()).join(", ")
                ),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compatibility {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM-HIGH")]
    MediumHigh,
    #[serde(rename = "MEDIUM")]
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetupGroup {
    pub name: String,
    pub category: String,
    pub member_count: u32,
    pub description: String,
    pub location: String,
    pub organizer: String,
    pub gca_compatibility: Compatibility,
    pub target_demographic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbingGym {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub description: String,
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_pricing: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub programs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    pub demographics: String,
    pub gca_compatibility: Compatibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityProgram {
    pub institution: String,
    pub program_name: String,
    pub degree_type: String,
    pub total_enrollment: u32,
    pub female_enrollment_pct: f64,
    pub evening_classes: bool,
    pub networking_events: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholarships: Option<String>,
    pub gca_compatibility: Compatibility,
    pub target_demographic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoworkingSpace {
    pub name: String,
    pub address: String,
    pub membership_count: u32,
    pub industry_mix: String,
    pub pricing: String,
    pub amenities: Vec<String>,
    pub events: String,
    pub gca_compatibility: Compatibility,
    pub target_demographic: String,
}

/// Uniform view over the four record kinds, used by scoring.
pub trait Listing {
    fn name(&self) -> &str;
    fn location(&self) -> &str;
    fn target_demographic(&self) -> String;
}

impl Listing for MeetupGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn target_demographic(&self) -> String {
        format!(
            "Members: {}, Category: {}",
            self.member_count, self.category
        )
    }
}

impl Listing for ClimbingGym {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> &str {
        &self.address
    }

    fn target_demographic(&self) -> String {
        self.demographics.clone()
    }
}

impl Listing for UniversityProgram {
    fn name(&self) -> &str {
        &self.program_name
    }

    fn location(&self) -> &str {
        &self.institution
    }

    fn target_demographic(&self) -> String {
        format!("{:.1}% female enrollment", self.female_enrollment_pct)
    }
}

impl Listing for CoworkingSpace {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> &str {
        &self.address
    }

    fn target_demographic(&self) -> String {
        self.industry_mix.clone()
    }
}

/// 單一類別收集到的全部記錄
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSet {
    MeetupGroups(Vec<MeetupGroup>),
    ClimbingGyms(Vec<ClimbingGym>),
    UniversityPrograms(Vec<UniversityProgram>),
    CoworkingSpaces(Vec<CoworkingSpace>),
}

/// A record as persisted to the document and flat-file stores.
#[derive(Debug, Serialize)]
struct Document<'a, T: Serialize> {
    #[serde(flatten)]
    record: &'a T,
    scraped_date: String,
}

impl RecordSet {
    pub fn category(&self) -> Category {
        match self {
            RecordSet::MeetupGroups(_) => Category::MeetupGroups,
            RecordSet::ClimbingGyms(_) => Category::ClimbingGyms,
            RecordSet::UniversityPrograms(_) => Category::UniversityPrograms,
            RecordSet::CoworkingSpaces(_) => Category::CoworkingSpaces,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordSet::MeetupGroups(items) => items.len(),
            RecordSet::ClimbingGyms(items) => items.len(),
            RecordSet::UniversityPrograms(items) => items.len(),
            RecordSet::CoworkingSpaces(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn listings(&self) -> Vec<&dyn Listing> {
        match self {
            RecordSet::MeetupGroups(items) => items.iter().map(|i| i as &dyn Listing).collect(),
            RecordSet::ClimbingGyms(items) => items.iter().map(|i| i as &dyn Listing).collect(),
            RecordSet::UniversityPrograms(items) => {
                items.iter().map(|i| i as &dyn Listing).collect()
            }
            RecordSet::CoworkingSpaces(items) => items.iter().map(|i| i as &dyn Listing).collect(),
        }
    }

    /// Serializes every record with a `scraped_date` field attached.
    pub fn to_documents(&self, scraped_at: DateTime<Utc>) -> Result<Vec<serde_json::Value>> {
        let scraped_date = format_timestamp(scraped_at);
        match self {
            RecordSet::MeetupGroups(items) => stamp(items, &scraped_date),
            RecordSet::ClimbingGyms(items) => stamp(items, &scraped_date),
            RecordSet::UniversityPrograms(items) => stamp(items, &scraped_date),
            RecordSet::CoworkingSpaces(items) => stamp(items, &scraped_date),
        }
    }
}

fn stamp<T: Serialize>(items: &[T], scraped_date: &str) -> Result<Vec<serde_json::Value>> {
    items
        .iter()
        .map(|record| {
            let document = Document {
                record,
                scraped_date: scraped_date.to_string(),
            };
            Ok(serde_json::to_value(document)?)
        })
        .collect()
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_gym() -> ClimbingGym {
        ClimbingGym {
            name: "Test Gym".to_string(),
            address: "Kansas City, MO".to_string(),
            phone: None,
            description: "Bouldering".to_string(),
            amenities: vec!["yoga".to_string()],
            membership_pricing: None,
            programs: vec![],
            hours: None,
            demographics: "Serious climbers".to_string(),
            gca_compatibility: Compatibility::High,
        }
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            "climbing_gyms".parse::<Category>().unwrap(),
            Category::ClimbingGyms
        );
        assert_eq!(
            " coworking_spaces ".parse::<Category>().unwrap(),
            Category::CoworkingSpaces
        );
        assert!("bowling_alleys".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_order_matches_all() {
        let mut sorted = Category::ALL.to_vec();
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, Category::ALL.to_vec());
    }

    #[test]
    fn test_university_listing_uses_program_name_and_institution() {
        let program = UniversityProgram {
            institution: "Rockhurst University".to_string(),
            program_name: "Management MBA".to_string(),
            degree_type: "MBA".to_string(),
            total_enrollment: 100,
            female_enrollment_pct: 50.0,
            evening_classes: true,
            networking_events: "Community service".to_string(),
            scholarships: None,
            gca_compatibility: Compatibility::High,
            target_demographic: "Leaders".to_string(),
        };

        assert_eq!(program.name(), "Management MBA");
        assert_eq!(program.location(), "Rockhurst University");
        assert_eq!(program.target_demographic(), "50.0% female enrollment");
    }

    #[test]
    fn test_documents_carry_scraped_date() {
        let set = RecordSet::ClimbingGyms(vec![sample_gym()]);
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let documents = set.to_documents(at).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["name"], "Test Gym");
        assert_eq!(documents[0]["gca_compatibility"], "HIGH");
        assert_eq!(documents[0]["scraped_date"], "2024-05-01T12:00:00Z");
        assert!(documents[0]["phone"].is_null());
        assert!(documents[0].get("hours").is_none());
    }
}
