pub mod import;
pub mod log;
pub mod mutate;
pub mod query;
pub mod stats;
pub mod suggest;
pub mod validate;
pub mod watch;
