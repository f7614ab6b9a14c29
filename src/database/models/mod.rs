pub mod auth;
pub mod bonus;
pub mod payment;
pub mod report;
pub mod user;
pub mod work_day;

// Re-export all models for easy importing
pub use auth::*;
pub use bonus::*;
pub use payment::*;
pub use report::*;
pub use user::*;
pub use work_day::*;
