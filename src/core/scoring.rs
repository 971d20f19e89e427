use crate::domain::model::{Category, Listing};
use crate::domain::report::ScoredLocation;

/// Fixed GCA compatibility score per category.
pub fn gca_score(category: Category) -> f64 {
    match category {
        Category::MeetupGroups => 4.0,
        Category::ClimbingGyms => 4.2,
        Category::UniversityPrograms => 4.1,
        Category::CoworkingSpaces => 3.9,
    }
}

pub fn best_times(category: Category) -> &'static str {
    match category {
        Category::MeetupGroups => "Evening events 6-8pm, Weekend activities",
        Category::ClimbingGyms => "Weekday evenings 6-8pm, Weekend mornings 10am-12pm",
        Category::UniversityPrograms => "Evening classes 6-9pm, Library study 7-10pm",
        Category::CoworkingSpaces => "Weekdays 10am-4pm, Networking events 5-7pm",
    }
}

pub fn weekly_frequency(category: Category) -> &'static str {
    match category {
        Category::MeetupGroups => "Weekly/Bi-weekly events",
        Category::ClimbingGyms => "Daily access",
        Category::UniversityPrograms => "Multiple times per week",
        Category::CoworkingSpaces => "Daily access",
    }
}

pub fn score_listing(category: Category, listing: &dyn Listing) -> ScoredLocation {
    ScoredLocation {
        category,
        name: listing.name().to_string(),
        location: listing.location().to_string(),
        gca_score: gca_score(category),
        target_demographic: listing.target_demographic(),
        best_times: best_times(category).to_string(),
        weekly_frequency: weekly_frequency(category).to_string(),
    }
}
