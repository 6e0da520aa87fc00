mod wizard;

pub use wizard::run_session;
