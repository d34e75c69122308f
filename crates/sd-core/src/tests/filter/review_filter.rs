use crate::{
    Department, Rating, Review, ReviewCategory, ReviewFilter, ReviewStatus,
};

use chrono::Utc;

fn review(id: &str, employee: &str, ticket: &str, rating: u8, department: Department) -> Review {
    Review {
        id: id.to_string(),
        employee_id: "emp-1".to_string(),
        employee_name: employee.to_string(),
        employee_avatar: "👨‍🔧".to_string(),
        department,
        ticket_id: ticket.to_string(),
        rating: Rating::new(rating).unwrap(),
        comment: "Solved the problem quickly.".to_string(),
        categories: vec![ReviewCategory::Professionalism],
        reviewer_name: "Sarah Johnson".to_string(),
        submitted_at: Utc::now(),
        status: ReviewStatus::Published,
    }
}

fn sample_reviews() -> Vec<Review> {
    vec![
        review("REV-001", "John Technician", "TKT-2847", 5, Department::ItSupport),
        review("REV-002", "Mike Wilson", "TKT-2846", 4, Department::Maintenance),
        review("REV-003", "John Technician", "TKT-2845", 5, Department::ItSupport),
    ]
}

#[test]
fn test_identity_law_returns_all_in_order() {
    let reviews = sample_reviews();
    let survivors = ReviewFilter::default().apply(&reviews);

    let ids: Vec<&str> = survivors.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["REV-001", "REV-002", "REV-003"]);
}

#[test]
fn test_query_searches_employee_comment_and_ticket() {
    let reviews = sample_reviews();

    assert_eq!(ReviewFilter::new("mike").apply(&reviews).len(), 1);
    assert_eq!(ReviewFilter::new("quickly").apply(&reviews).len(), 3);
    assert_eq!(ReviewFilter::new("TKT-2845").apply(&reviews).len(), 1);
}

#[test]
fn test_rating_and_department_facets_combine() {
    let reviews = sample_reviews();

    let five_star_it = ReviewFilter::default()
        .with_rating(Rating::new(5).unwrap())
        .with_department(Department::ItSupport);

    assert_eq!(five_star_it.apply(&reviews).len(), 2);
}

#[test]
fn test_filter_is_conjunctive() {
    let reviews = sample_reviews();

    // "mike" matches REV-002, but its rating is 4
    let filter = ReviewFilter::new("mike").with_rating(Rating::new(5).unwrap());

    assert!(filter.apply(&reviews).is_empty());
}
