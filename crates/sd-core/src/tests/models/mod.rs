mod rating;
mod role;
mod ticket;
