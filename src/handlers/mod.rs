pub mod auth;
pub mod bonuses;
pub mod earnings;
pub mod payments;
pub mod reports;
pub mod shared;
pub mod work_days;
