pub mod employee_filter;
pub mod review_filter;
pub mod text_query;
pub mod ticket_filter;
