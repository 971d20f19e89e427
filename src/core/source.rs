use crate::domain::model::{
    Category, ClimbingGym, Compatibility, CoworkingSpace, MeetupGroup, RecordSet, UniversityProgram,
};
use crate::domain::ports::RecordSource;

/// Inventory gathered during the Kansas City research pass. Nothing is fetched at runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl RecordSource for StaticSource {
    fn collect(&self, category: Category) -> RecordSet {
        match category {
            Category::MeetupGroups => RecordSet::MeetupGroups(meetup_groups()),
            Category::ClimbingGyms => RecordSet::ClimbingGyms(climbing_gyms()),
            Category::UniversityPrograms => RecordSet::UniversityPrograms(university_programs()),
            Category::CoworkingSpaces => RecordSet::CoworkingSpaces(coworking_spaces()),
        }
    }
}

/// Collects the requested categories in canonical order. An empty selection means all of them.
pub fn collect_selected<R: RecordSource + ?Sized>(
    source: &R,
    categories: &[Category],
) -> Vec<RecordSet> {
    Category::ALL
        .into_iter()
        .filter(|category| categories.is_empty() || categories.contains(category))
        .map(|category| {
            tracing::info!("Starting {} collection...", category.display_name().to_lowercase());
            let records = source.collect(category);
            tracing::info!("Collected {} {}", records.len(), category.display_name().to_lowercase());
            records
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn meetup_groups() -> Vec<MeetupGroup> {
    let group = |name: &str,
                 category: &str,
                 member_count: u32,
                 description: &str,
                 organizer: &str,
                 gca_compatibility: Compatibility,
                 target_demographic: &str| MeetupGroup {
        name: name.to_string(),
        category: category.to_string(),
        member_count,
        description: description.to_string(),
        location: "Kansas City, MO".to_string(),
        organizer: organizer.to_string(),
        gca_compatibility,
        target_demographic: target_demographic.to_string(),
    };

    vec![
        group(
            "Kansas City Women in Technology",
            "tech",
            2609,
            "Grassroots organization growing women in tech careers in KC",
            "Jennifer Wadella",
            Compatibility::High,
            "Female tech professionals, 25-35",
        ),
        group(
            "Ropes KC Indoor Rock Climbing",
            "fitness",
            671,
            "Regular climbing meetups at various gyms throughout the city",
            "Zin K",
            Compatibility::High,
            "Climbing enthusiasts, goal-oriented individuals",
        ),
        group(
            "Kansas City Adventure Club",
            "outdoor",
            2722,
            "Adventure junkies exploring, exercising, and having fun",
            "Adventure Club",
            Compatibility::Medium,
            "Active professionals, 20s-30s",
        ),
        group(
            "Explorer Chicks of Kansas City",
            "outdoor",
            3172,
            "Women-focused adventure and exploration group",
            "Explorer Chicks",
            Compatibility::Medium,
            "Adventurous women, various ages",
        ),
        // member count is an estimate
        group(
            "Big Data KC",
            "tech",
            1500,
            "Data science community keeping ahead of data tech and trends",
            "Data Community",
            Compatibility::High,
            "Data professionals, analytical thinkers",
        ),
    ]
}

fn climbing_gyms() -> Vec<ClimbingGym> {
    vec![
        ClimbingGym {
            name: "RoKC North Kansas City".to_string(),
            address: "North Kansas City, MO".to_string(),
            phone: None,
            description: "Premier climbing gym with tall climbing, bouldering, auto-belays"
                .to_string(),
            amenities: strings(&["fitness", "yoga", "private events", "youth programs"]),
            membership_pricing: Some("$21/week unlimited".to_string()),
            programs: strings(&["Intro to Climbing", "Top Rope Course", "Lead Course"]),
            hours: None,
            demographics: "Mixed ages, goal-oriented climbers".to_string(),
            gca_compatibility: Compatibility::High,
        },
        ClimbingGym {
            name: "RoKC Olathe".to_string(),
            address: "Olathe, KS".to_string(),
            phone: None,
            description: "Second RoKC location serving Kansas side".to_string(),
            amenities: strings(&["climbing", "fitness", "youth camps"]),
            membership_pricing: Some("$21/week unlimited".to_string()),
            programs: strings(&["Summer camps", "Youth programs"]),
            hours: None,
            demographics: "Family-oriented, suburban professionals".to_string(),
            gca_compatibility: Compatibility::Medium,
        },
        ClimbingGym {
            name: "Sequence Climb".to_string(),
            address: "Kansas City, MO".to_string(),
            phone: None,
            description: "Climbing, yoga & fitness facility with training focus".to_string(),
            amenities: strings(&["Campus board", "Kilter Board", "Tension Board", "yoga"]),
            membership_pricing: None,
            programs: Vec::new(),
            hours: Some("Mon-Fri 10am-10pm, Weekends 10am-8pm".to_string()),
            demographics: "Serious climbers, fitness-focused individuals".to_string(),
            gca_compatibility: Compatibility::High,
        },
        ClimbingGym {
            name: "Rendezvous Climbing Gym".to_string(),
            address: "Kansas City area".to_string(),
            phone: None,
            description: "Local climbing facility".to_string(),
            amenities: strings(&["climbing walls"]),
            membership_pricing: None,
            programs: Vec::new(),
            hours: None,
            demographics: "Local climbing community".to_string(),
            gca_compatibility: Compatibility::Medium,
        },
    ]
}

fn university_programs() -> Vec<UniversityProgram> {
    // enrollment figures other than the UMKC graduate population are estimates
    vec![
        UniversityProgram {
            institution: "UMKC Bloch School of Management".to_string(),
            program_name: "Professional MBA".to_string(),
            degree_type: "MBA".to_string(),
            total_enrollment: 200,
            female_enrollment_pct: 55.0,
            evening_classes: true,
            networking_events: "Signature networking events, industry professionals".to_string(),
            scholarships: Some("$4,000-$15,000 available".to_string()),
            gca_compatibility: Compatibility::High,
            target_demographic: "Working professionals, career advancement focused".to_string(),
        },
        UniversityProgram {
            institution: "UMKC Bloch School of Management".to_string(),
            program_name: "Executive MBA".to_string(),
            degree_type: "EMBA".to_string(),
            total_enrollment: 50,
            female_enrollment_pct: 50.0,
            evening_classes: true,
            networking_events: "Executive networking, industry connections".to_string(),
            scholarships: None,
            gca_compatibility: Compatibility::High,
            target_demographic: "Senior professionals, executives".to_string(),
        },
        UniversityProgram {
            institution: "UMKC School of Nursing".to_string(),
            program_name: "Doctor of Nursing Practice".to_string(),
            degree_type: "DNP".to_string(),
            total_enrollment: 150,
            female_enrollment_pct: 85.0,
            evening_classes: true,
            networking_events: "Healthcare professional events".to_string(),
            scholarships: None,
            gca_compatibility: Compatibility::High,
            target_demographic: "Healthcare professionals, goal-oriented nurses".to_string(),
        },
        UniversityProgram {
            institution: "Rockhurst University".to_string(),
            program_name: "Management MBA".to_string(),
            degree_type: "MBA".to_string(),
            total_enrollment: 100,
            female_enrollment_pct: 50.0,
            evening_classes: true,
            networking_events: "Jesuit leadership focus, community service".to_string(),
            scholarships: None,
            gca_compatibility: Compatibility::High,
            target_demographic: "Service-oriented professionals, leadership focused".to_string(),
        },
        UniversityProgram {
            institution: "UMKC Various Graduate Programs".to_string(),
            program_name: "Graduate Student Population".to_string(),
            degree_type: "Mixed".to_string(),
            total_enrollment: 23384,
            female_enrollment_pct: 55.0,
            evening_classes: true,
            networking_events: "Student organizations, professional associations".to_string(),
            scholarships: None,
            gca_compatibility: Compatibility::MediumHigh,
            target_demographic: "Graduate students, diverse fields".to_string(),
        },
    ]
}

fn coworking_spaces() -> Vec<CoworkingSpace> {
    let space = |name: &str,
                 address: &str,
                 membership_count: u32,
                 industry_mix: &str,
                 pricing: &str,
                 amenities: &[&str],
                 events: &str,
                 target_demographic: &str| CoworkingSpace {
        name: name.to_string(),
        address: address.to_string(),
        membership_count,
        industry_mix: industry_mix.to_string(),
        pricing: pricing.to_string(),
        amenities: strings(amenities),
        events: events.to_string(),
        gca_compatibility: Compatibility::High,
        target_demographic: target_demographic.to_string(),
    };

    // membership counts are estimates
    vec![
        space(
            "WeWork Corrigan Station",
            "1828 Walnut St, 3rd Floor, Kansas City, MO",
            300,
            "Tech, Finance, Consulting, Startups",
            "Hot desk $250/mo, Private office $400+/mo",
            &["WiFi", "Coffee", "Phone booths", "Conference rooms", "Events"],
            "Professional and social events, networking",
            "Young professionals, entrepreneurs",
        ),
        space(
            "Spark Coworking (Two Light)",
            "Power & Light District, Kansas City, MO",
            150,
            "Tech, Startups, Creative",
            "Membership-based",
            &["Private offices", "Shared workspace", "Downtown location"],
            "Entrepreneurial ecosystem events",
            "Entrepreneurs, tech innovators",
        ),
        space(
            "Hive Coworking",
            "River Market, Kansas City, MO",
            100,
            "New professionals, Startups, Small teams",
            "$100/mo open workspace, $300+/mo private",
            &["Fiber internet", "Conference room", "Community kitchen"],
            "Networking events, community building",
            "New professionals, startup founders",
        ),
        space(
            "Industrious Country Club Plaza",
            "420 Nichols Road, Kansas City, MO",
            200,
            "Professional services, Finance, Healthcare",
            "Premium pricing",
            &["Natural light", "Parking garage", "Upscale environment"],
            "Professional networking, client meetings",
            "Established professionals, consultants",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_inventory_sizes() {
        let source = StaticSource;
        assert_eq!(source.collect(Category::MeetupGroups).len(), 5);
        assert_eq!(source.collect(Category::ClimbingGyms).len(), 4);
        assert_eq!(source.collect(Category::UniversityPrograms).len(), 5);
        assert_eq!(source.collect(Category::CoworkingSpaces).len(), 4);
    }

    #[test]
    fn test_collect_selected_empty_means_all() {
        let sets = collect_selected(&StaticSource, &[]);
        let categories: Vec<Category> = sets.iter().map(|s| s.category()).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_collect_selected_keeps_canonical_order() {
        let sets = collect_selected(
            &StaticSource,
            &[Category::CoworkingSpaces, Category::ClimbingGyms],
        );
        let categories: Vec<Category> = sets.iter().map(|s| s.category()).collect();
        assert_eq!(
            categories,
            vec![Category::ClimbingGyms, Category::CoworkingSpaces]
        );
    }
}
