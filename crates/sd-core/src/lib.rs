pub mod error;
pub mod filter;
pub mod models;

pub use error::{CoreError, Result};
pub use filter::employee_filter::EmployeeFilter;
pub use filter::review_filter::ReviewFilter;
pub use filter::text_query::TextQuery;
pub use filter::ticket_filter::TicketFilter;
pub use models::availability_status::AvailabilityStatus;
pub use models::department::Department;
pub use models::employee::Employee;
pub use models::geo_location::GeoLocation;
pub use models::geo_point::GeoPoint;
pub use models::identity::Identity;
pub use models::rating::Rating;
pub use models::review::Review;
pub use models::review_category::ReviewCategory;
pub use models::review_status::ReviewStatus;
pub use models::role::Role;
pub use models::service_record::ServiceRecord;
pub use models::ticket::Ticket;
pub use models::ticket_priority::TicketPriority;
pub use models::ticket_status::TicketStatus;

#[cfg(test)]
mod tests;
