pub mod admin;
pub mod ratelimit;
