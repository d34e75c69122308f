use crate::{NewReview, ReviewCatalog};

use sd_core::{Department, Rating, ReviewCategory, ReviewFilter, ReviewStatus};

fn sample_submission() -> NewReview {
    NewReview {
        employee_id: "emp-1".to_string(),
        employee_name: "John Technician".to_string(),
        employee_avatar: "👨‍🔧".to_string(),
        department: Department::ItSupport,
        ticket_id: "TKT-2845".to_string(),
        rating: Rating::new(5).unwrap(),
        comment: "Great turnaround.".to_string(),
        categories: vec![ReviewCategory::Timeliness],
        reviewer_name: "Jane Customer".to_string(),
    }
}

#[test]
fn given_seeded_catalog_when_listed_then_four_published_reviews() {
    let catalog = ReviewCatalog::seeded();

    assert_eq!(catalog.all().len(), 4);
    assert!(catalog
        .all()
        .iter()
        .all(|review| review.status == ReviewStatus::Published));
}

#[test]
fn given_submission_when_submitted_then_pending_with_next_number() {
    let mut catalog = ReviewCatalog::seeded();

    let review = catalog.submit(sample_submission());

    assert_eq!(review.id, "REV-005");
    assert_eq!(review.status, ReviewStatus::Pending);
    assert_eq!(catalog.all().len(), 5);
}

#[test]
fn given_rating_facet_when_searched_then_exact_matches_only() {
    let catalog = ReviewCatalog::seeded();
    let filter = ReviewFilter::default().with_rating(Rating::new(5).unwrap());

    let survivors = catalog.search(&filter);

    assert_eq!(survivors.len(), 2);
    assert!(survivors.iter().all(|r| r.rating.value() == 5));
}

#[test]
fn given_seeded_catalog_when_summarized_then_first_seen_order() {
    let catalog = ReviewCatalog::seeded();

    let summaries = catalog.employee_summaries();

    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0].employee_id, "emp-1");
    assert_eq!(summaries[1].employee_id, "emp-2");
    assert_eq!(summaries[2].employee_id, "emp-3");
}

#[test]
fn given_two_five_star_reviews_when_summarized_then_average_and_distribution() {
    let catalog = ReviewCatalog::seeded();

    let summaries = catalog.employee_summaries();
    let john = &summaries[0];

    assert_eq!(john.total_reviews, 2);
    assert_eq!(john.average_rating, 5.0);
    assert_eq!(john.distribution, [0, 0, 0, 0, 2]);
    // Professionalism and problem-solving appear in both reviews
    assert_eq!(john.top_categories.len(), 3);
    assert_eq!(john.top_categories[0], ReviewCategory::ProblemSolving);
    assert_eq!(john.top_categories[1], ReviewCategory::Professionalism);
}

#[test]
fn given_seeded_catalog_when_overall_then_headline_numbers() {
    let catalog = ReviewCatalog::seeded();

    let overall = catalog.overall();

    assert_eq!(overall.total_reviews, 4);
    // Ratings 5, 4, 5, 3 average to 4.25; three of four are >= 4
    assert!((overall.average_rating - 4.25).abs() < f32::EPSILON);
    assert_eq!(overall.satisfaction_rate, 75);
}

#[test]
fn given_empty_catalog_when_overall_then_zeroes() {
    let catalog = ReviewCatalog::new(Vec::new());

    let overall = catalog.overall();

    assert_eq!(overall.total_reviews, 0);
    assert_eq!(overall.average_rating, 0.0);
    assert_eq!(overall.satisfaction_rate, 0);
}
