pub mod adaptors;
pub mod auth;
pub mod email;
pub mod ratelimit;
