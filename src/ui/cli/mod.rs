pub mod action;
pub mod drivers;
pub mod wizard;

pub use action::Action;
pub use wizard::run_session;
