//! Review collection and the aggregates shown on the reviews dashboard.

use crate::seed::seed_time;

use sd_core::{
    Department, Rating, Review, ReviewCategory, ReviewFilter, ReviewStatus,
};

use std::collections::HashMap;

use chrono::Utc;
use log::info;
use serde::Serialize;

/// Input of the review modal.
///
/// A rating is mandatory; the form keeps the submit button disabled until
/// one is picked, so a `NewReview` always carries a valid [`Rating`].
#[derive(Debug, Clone)]
pub struct NewReview {
    pub employee_id: String,
    pub employee_name: String,
    pub employee_avatar: String,
    pub department: Department,
    pub ticket_id: String,
    pub rating: Rating,
    pub comment: String,
    pub categories: Vec<ReviewCategory>,
    pub reviewer_name: String,
}

/// Per-employee aggregate over every review on file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeReviewSummary {
    pub employee_id: String,
    pub employee_name: String,
    pub employee_avatar: String,
    pub department: Department,
    pub average_rating: f32,
    pub total_reviews: u32,
    /// Count of 1-star through 5-star reviews
    pub distribution: [u32; 5],
    /// Most-called-out categories, most frequent first (up to three)
    pub top_categories: Vec<ReviewCategory>,
}

/// Headline numbers for the reviews dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallReviewStats {
    pub average_rating: f32,
    pub total_reviews: u32,
    /// Share of reviews rated 4 or better, in percent
    pub satisfaction_rate: u8,
}

/// The in-memory review collection.
pub struct ReviewCatalog {
    reviews: Vec<Review>,
}

impl ReviewCatalog {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// The demo data set.
    pub fn seeded() -> Self {
        let reviews = vec![
            Review {
                id: "REV-001".to_string(),
                employee_id: "emp-1".to_string(),
                employee_name: "John Technician".to_string(),
                employee_avatar: "👨‍🔧".to_string(),
                department: Department::ItSupport,
                ticket_id: "TKT-2847".to_string(),
                rating: Rating::clamped(5),
                comment: "Excellent service! John was very professional and solved the printer issue quickly. Great communication throughout the process.".to_string(),
                categories: vec![
                    ReviewCategory::Professionalism,
                    ReviewCategory::Communication,
                    ReviewCategory::Timeliness,
                    ReviewCategory::ProblemSolving,
                ],
                reviewer_name: "Sarah Johnson".to_string(),
                submitted_at: seed_time("2025-01-02T14:30:00Z"),
                status: ReviewStatus::Published,
            },
            Review {
                id: "REV-002".to_string(),
                employee_id: "emp-2".to_string(),
                employee_name: "Mike Wilson".to_string(),
                employee_avatar: "👨‍💼".to_string(),
                department: Department::Maintenance,
                ticket_id: "TKT-2846".to_string(),
                rating: Rating::clamped(4),
                comment: "Good work on the AC repair. Arrived on time and explained the issue clearly. Could improve on cleanup after work.".to_string(),
                categories: vec![
                    ReviewCategory::Timeliness,
                    ReviewCategory::Expertise,
                    ReviewCategory::Communication,
                ],
                reviewer_name: "David Chen".to_string(),
                submitted_at: seed_time("2025-01-02T11:15:00Z"),
                status: ReviewStatus::Published,
            },
            Review {
                id: "REV-003".to_string(),
                employee_id: "emp-1".to_string(),
                employee_name: "John Technician".to_string(),
                employee_avatar: "👨‍🔧".to_string(),
                department: Department::ItSupport,
                ticket_id: "TKT-2845".to_string(),
                rating: Rating::clamped(5),
                comment: "Outstanding technical expertise! Fixed our network issues and provided helpful tips for prevention.".to_string(),
                categories: vec![
                    ReviewCategory::Expertise,
                    ReviewCategory::Professionalism,
                    ReviewCategory::ProblemSolving,
                ],
                reviewer_name: "Lisa Martinez".to_string(),
                submitted_at: seed_time("2025-01-01T16:45:00Z"),
                status: ReviewStatus::Published,
            },
            Review {
                id: "REV-004".to_string(),
                employee_id: "emp-3".to_string(),
                employee_name: "Sarah Wilson".to_string(),
                employee_avatar: "👩‍🔧".to_string(),
                department: Department::Security,
                ticket_id: "TKT-2844".to_string(),
                rating: Rating::clamped(3),
                comment: "Resolved the security issue but took longer than expected. Communication could be better.".to_string(),
                categories: vec![ReviewCategory::ProblemSolving],
                reviewer_name: "Robert Kim".to_string(),
                submitted_at: seed_time("2025-01-01T09:20:00Z"),
                status: ReviewStatus::Published,
            },
        ];

        Self::new(reviews)
    }

    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    /// Visible subset for the reviews view, in collection order.
    pub fn search(&self, filter: &ReviewFilter) -> Vec<&Review> {
        filter.apply(&self.reviews)
    }

    /// Record a fresh review. New submissions queue as pending until an
    /// admin publishes them.
    pub fn submit(&mut self, new_review: NewReview) -> &Review {
        let review = Review {
            id: format!("REV-{:03}", self.next_number()),
            employee_id: new_review.employee_id,
            employee_name: new_review.employee_name,
            employee_avatar: new_review.employee_avatar,
            department: new_review.department,
            ticket_id: new_review.ticket_id,
            rating: new_review.rating,
            comment: new_review.comment,
            categories: new_review.categories,
            reviewer_name: new_review.reviewer_name,
            submitted_at: Utc::now(),
            status: ReviewStatus::Pending,
        };

        info!("Review {} submitted for {}", review.id, review.employee_name);
        self.reviews.push(review);
        &self.reviews[self.reviews.len() - 1]
    }

    /// Per-employee aggregates, in first-seen order.
    pub fn employee_summaries(&self) -> Vec<EmployeeReviewSummary> {
        let mut order: Vec<&str> = Vec::new();
        let mut grouped: HashMap<&str, Vec<&Review>> = HashMap::new();

        for review in &self.reviews {
            let entry = grouped.entry(&review.employee_id).or_default();
            if entry.is_empty() {
                order.push(&review.employee_id);
            }
            entry.push(review);
        }

        order
            .into_iter()
            .filter_map(|employee_id| grouped.get(employee_id))
            .map(|reviews| Self::summarize(reviews))
            .collect()
    }

    /// Headline numbers across every review on file.
    pub fn overall(&self) -> OverallReviewStats {
        let total = self.reviews.len() as u32;
        if total == 0 {
            return OverallReviewStats {
                average_rating: 0.0,
                total_reviews: 0,
                satisfaction_rate: 0,
            };
        }

        let sum: u32 = self
            .reviews
            .iter()
            .map(|review| u32::from(review.rating.value()))
            .sum();
        let satisfied = self
            .reviews
            .iter()
            .filter(|review| review.rating.value() >= 4)
            .count() as u32;

        OverallReviewStats {
            average_rating: sum as f32 / total as f32,
            total_reviews: total,
            satisfaction_rate: (satisfied * 100 / total) as u8,
        }
    }

    fn summarize(reviews: &[&Review]) -> EmployeeReviewSummary {
        let first = reviews[0];
        let total = reviews.len() as u32;

        let mut distribution = [0u32; 5];
        let mut sum = 0u32;
        let mut category_counts: HashMap<ReviewCategory, u32> = HashMap::new();

        for review in reviews {
            let stars = review.rating.value();
            distribution[usize::from(stars) - 1] += 1;
            sum += u32::from(stars);
            for category in &review.categories {
                *category_counts.entry(*category).or_default() += 1;
            }
        }

        let mut categories: Vec<(ReviewCategory, u32)> = category_counts.into_iter().collect();
        categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));

        EmployeeReviewSummary {
            employee_id: first.employee_id.clone(),
            employee_name: first.employee_name.clone(),
            employee_avatar: first.employee_avatar.clone(),
            department: first.department,
            average_rating: sum as f32 / total as f32,
            total_reviews: total,
            distribution,
            top_categories: categories
                .into_iter()
                .take(3)
                .map(|(category, _)| category)
                .collect(),
        }
    }

    fn next_number(&self) -> u32 {
        self.reviews
            .iter()
            .filter_map(|review| review.id.strip_prefix("REV-"))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .map_or(1, |max| max + 1)
    }
}
