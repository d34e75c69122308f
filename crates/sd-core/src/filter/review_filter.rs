use crate::{Department, Rating, Review, TextQuery};

/// Criteria of the reviews view: free text over employee name, comment and
/// ticket number, plus exact rating and department facets.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub query: TextQuery,
    pub rating: Option<Rating>,
    pub department: Option<Department>,
}

impl ReviewFilter {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            query: TextQuery::new(query),
            rating: None,
            department: None,
        }
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    pub fn matches(&self, review: &Review) -> bool {
        let matches_search = self.query.matches_any(&[
            &review.employee_name,
            &review.comment,
            &review.ticket_id,
        ]);
        let matches_rating = self.rating.is_none_or(|rating| review.rating == rating);
        let matches_department = self
            .department
            .is_none_or(|department| review.department == department);
        matches_search && matches_rating && matches_department
    }

    /// Survivors in original collection order.
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        reviews.iter().filter(|review| self.matches(review)).collect()
    }
}
