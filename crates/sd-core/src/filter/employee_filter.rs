use crate::{AvailabilityStatus, Employee, TextQuery};

/// Criteria of the roster view: free text over name, department and email,
/// plus an exact availability facet.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub query: TextQuery,
    pub status: Option<AvailabilityStatus>,
}

impl EmployeeFilter {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            query: TextQuery::new(query),
            status: None,
        }
    }

    pub fn with_status(mut self, status: AvailabilityStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        let matches_search = self.query.matches_any(&[
            &employee.name,
            employee.department.label(),
            &employee.email,
        ]);
        let matches_status = self.status.is_none_or(|status| employee.status == status);
        matches_search && matches_status
    }

    /// Survivors in original collection order.
    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees
            .iter()
            .filter(|employee| self.matches(employee))
            .collect()
    }
}
