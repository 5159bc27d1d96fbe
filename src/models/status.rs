use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Completed,
    Pending,
    Draft,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::Pending => "pending",
            Status::Draft => "draft",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "completed" => Some(Status::Completed),
            "pending" => Some(Status::Pending),
            "draft" => Some(Status::Draft),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Status::Completed => "🟢",
            Status::Pending => "🔵",
            Status::Draft => "🟡",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::Pending => "In progress",
            Status::Draft => "Draft",
        }
    }
}
