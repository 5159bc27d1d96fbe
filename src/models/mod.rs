pub mod activity;
pub mod activity_type;
pub mod bundle;
pub mod reflection;
pub mod status;
pub mod theme;

pub use activity::{ActivityRecord, Proof};
pub use reflection::Reflection;
pub use status::Status;
