pub mod analytics;
pub mod guards;
pub mod membership;
pub mod policy;
