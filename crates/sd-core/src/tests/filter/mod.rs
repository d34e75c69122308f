mod employee_filter;
mod review_filter;
mod text_query;
mod ticket_filter;
