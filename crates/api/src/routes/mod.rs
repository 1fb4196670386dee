pub mod count;
pub mod health;
pub mod metrics;
