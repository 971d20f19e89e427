use crate::core::scoring::score_listing;
use crate::domain::model::{Category, RecordSet};
use crate::domain::report::{
    CategoryBreakdown, CategorySummary, ScheduleSlot, ScoredLocation, SuccessMetrics, TargetingReport, WeeklySchedule,
};
use chrono::{DateTime, Utc};

const TOP_LOCATIONS: usize = 10;
const TOP_PER_CATEGORY: usize = 3;

/// Scores every record and assembles the targeting report.
pub fn build_report(record_sets: &[RecordSet], generated_at: DateTime<Utc>) -> TargetingReport {
    tracing::info!("Generating targeting report...");

    let mut analysis: Vec<ScoredLocation> = record_sets
        .iter()
        .flat_map(|set| {
            let category = set.category();
            set.listings()
                .into_iter()
                .map(move |listing| score_listing(category, listing))
        })
        .collect();

    // sort_by 是穩定排序，同分時保留輸入順序
    analysis.sort_by(|a, b| b.gca_score.total_cmp(&a.gca_score));

    TargetingReport {
        top_10_locations: analysis.iter().take(TOP_LOCATIONS).cloned().collect(),
        by_category: group_by_category(&analysis),
        optimal_schedule: optimal_schedule(),
        success_metrics: success_metrics(),
        total_locations: analysis.len(),
        data_freshness: generated_at,
    }
}

/// Groups the ranked list; categories keep the order of their first ranked entry.
pub fn group_by_category(analysis: &[ScoredLocation]) -> CategoryBreakdown {
    let mut groups: Vec<(Category, Vec<&ScoredLocation>)> = Vec::new();
    for item in analysis {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, items)) => items.push(item),
            None => groups.push((item.category, vec![item])),
        }
    }

    groups
        .into_iter()
        .map(|(category, items)| {
            let total: f64 = items.iter().map(|item| item.gca_score).sum();
            let summary = CategorySummary {
                top_3: items
                    .iter()
                    .take(TOP_PER_CATEGORY)
                    .map(|item| (*item).clone())
                    .collect(),
                average_gca_score: total / items.len() as f64,
                total_locations: items.len(),
            };
            (category, summary)
        })
        .collect()
}

fn slot(time: &str, activity: &str, kind: &str) -> ScheduleSlot {
    ScheduleSlot {
        time: time.to_string(),
        activity: activity.to_string(),
        kind: kind.to_string(),
    }
}

pub fn optimal_schedule() -> WeeklySchedule {
    WeeklySchedule {
        monday: slot("6:30-8:30 PM", "RoKC Climbing", "fitness"),
        tuesday: slot("6:00-9:00 PM", "UMKC Library Study", "university"),
        wednesday: slot("7:00-9:00 PM", "WeWork Networking", "coworking"),
        thursday: slot("6:30-8:30 PM", "Sequence Climb", "fitness"),
        friday: slot("5:30-7:30 PM", "KC Women in Tech Meetup", "meetup"),
        saturday: slot("10:00 AM-12:00 PM", "Coffee near campus", "university"),
        sunday: slot("2:00-4:00 PM", "Study/work session", "flexible"),
    }
}

pub fn success_metrics() -> SuccessMetrics {
    SuccessMetrics {
        weekly_interactions_target: 20,
        gca_filter1_pass_rate_target: 0.30,
        location_efficiency_target: 2.5,
        monthly_new_locations_target: 2,
        follow_up_rate_target: 0.20,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::{collect_selected, StaticSource};

    fn full_report() -> TargetingReport {
        let sets = collect_selected(&StaticSource, &[]);
        build_report(&sets, Utc::now())
    }

    #[test]
    fn test_top_10_sorted_descending() {
        let report = full_report();

        assert_eq!(report.total_locations, 18);
        assert_eq!(report.top_10_locations.len(), 10);
        for pair in report.top_10_locations.windows(2) {
            assert!(pair[0].gca_score >= pair[1].gca_score);
        }
        assert_eq!(report.top_10_locations[0].name, "RoKC North Kansas City");
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let report = full_report();

        // 4 climbing gyms (4.2), then 5 university programs (4.1), then the first meetup (4.0)
        let names: Vec<&str> = report
            .top_10_locations
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(
            &names[..4],
            &[
                "RoKC North Kansas City",
                "RoKC Olathe",
                "Sequence Climb",
                "Rendezvous Climbing Gym"
            ]
        );
        assert_eq!(names[4], "Professional MBA");
        assert_eq!(names[8], "Graduate Student Population");
        assert_eq!(names[9], "Kansas City Women in Technology");
    }

    #[test]
    fn test_grouping_partitions_all_records() {
        let report = full_report();

        let grouped: usize = report
            .by_category
            .values()
            .map(|summary| summary.total_locations)
            .sum();
        assert_eq!(grouped, report.total_locations);
        assert_eq!(report.by_category.len(), 4);

        let meetups = &report.by_category[&Category::MeetupGroups];
        assert_eq!(meetups.total_locations, 5);
        assert_eq!(meetups.top_3.len(), 3);
        assert!((meetups.average_gca_score - 4.0).abs() < f64::EPSILON);
        assert!(meetups
            .top_3
            .iter()
            .all(|l| l.category == Category::MeetupGroups));
    }

    #[test]
    fn test_categories_follow_ranked_order() {
        let report = full_report();

        let order: Vec<Category> = report.by_category.keys().collect();
        assert_eq!(
            order,
            vec![
                Category::ClimbingGyms,
                Category::UniversityPrograms,
                Category::MeetupGroups,
                Category::CoworkingSpaces,
            ]
        );

        let json = serde_json::to_string(&report.by_category).unwrap();
        let positions: Vec<usize> = order
            .iter()
            .map(|category| json.find(category.as_str()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_group_average_is_arithmetic_mean() {
        let location = |category, score| ScoredLocation {
            category,
            name: "x".to_string(),
            location: "y".to_string(),
            gca_score: score,
            target_demographic: String::new(),
            best_times: String::new(),
            weekly_frequency: String::new(),
        };
        let analysis = vec![
            location(Category::ClimbingGyms, 5.0),
            location(Category::MeetupGroups, 4.0),
            location(Category::ClimbingGyms, 3.0),
            location(Category::ClimbingGyms, 1.0),
        ];

        let groups = group_by_category(&analysis);

        assert!((groups[&Category::ClimbingGyms].average_gca_score - 3.0).abs() < 1e-9);
        assert_eq!(groups[&Category::ClimbingGyms].total_locations, 3);
        assert_eq!(groups[&Category::MeetupGroups].total_locations, 1);
    }

    #[test]
    fn test_subset_report_contains_only_selected_categories() {
        let sets = collect_selected(&StaticSource, &[Category::CoworkingSpaces]);
        let report = build_report(&sets, Utc::now());

        assert_eq!(report.total_locations, 4);
        assert_eq!(report.by_category.len(), 1);
        assert!(report
            .top_10_locations
            .iter()
            .all(|l| l.category == Category::CoworkingSpaces));
    }

    #[test]
    fn test_report_json_shape() {
        let report = full_report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["top_10_locations"][0]["type"], "climbing_gyms");
        assert!(json["by_category"]["university_programs"]["top_3"].is_array());
        assert_eq!(json["optimal_schedule"]["friday"]["type"], "meetup");
        assert_eq!(json["success_metrics"]["weekly_interactions_target"], 20);
        assert_eq!(json["total_locations"], 18);
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let report = build_report(&[], Utc::now());
        assert!(report.top_10_locations.is_empty());
        assert!(report.by_category.is_empty());
        assert_eq!(report.total_locations, 0);
    }
}
