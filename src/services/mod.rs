pub mod auth;
pub mod bookkeeping;
pub mod ledger;

pub use auth::{AuthService, Claims};
pub use bookkeeping::BookkeepingService;
