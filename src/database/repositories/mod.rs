pub mod bonus;
pub mod payment;
pub mod user;
pub mod work_day;

// Re-export all repositories for easy importing
pub use bonus::BonusRepository;
pub use payment::PaymentRepository;
pub use user::UserRepository;
pub use work_day::WorkDayRepository;
