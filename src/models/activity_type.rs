//! Catalog of activity kinds with their declared caps.
//!
//! The caps are informational: the validation engine only checks the global
//! 10h-per-theme limit, never the per-kind `max_count`/`max_hours`.

pub struct ActivityTypeSpec {
    pub name: &'static str,
    /// None = unlimited occurrences
    pub max_count: Option<u32>,
    pub max_hours: u32,
}

pub const ACTIVITY_TYPES: [ActivityTypeSpec; 8] = [
    ActivityTypeSpec {
        name: "Hackathon",
        max_count: Some(3),
        max_hours: 10,
    },
    ActivityTypeSpec {
        name: "Online course",
        max_count: Some(2),
        max_hours: 10,
    },
    ActivityTypeSpec {
        name: "Classroom training",
        max_count: Some(3),
        max_hours: 10,
    },
    ActivityTypeSpec {
        name: "Conference",
        max_count: Some(1),
        max_hours: 10,
    },
    ActivityTypeSpec {
        name: "Company visit",
        max_count: Some(1),
        max_hours: 10,
    },
    ActivityTypeSpec {
        name: "IT fair",
        max_count: Some(1),
        max_hours: 10,
    },
    ActivityTypeSpec {
        name: "Job day",
        max_count: Some(1),
        max_hours: 10,
    },
    ActivityTypeSpec {
        name: "Other",
        max_count: None,
        max_hours: 10,
    },
];

pub fn lookup(name: &str) -> Option<&'static ActivityTypeSpec> {
    ACTIVITY_TYPES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}
