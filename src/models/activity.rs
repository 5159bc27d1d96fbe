use super::{reflection::Reflection, status::Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Evidence attached to an activity.
///
/// The key-value store keeps a plain description string, the JSON bundle an
/// object with an optional attached file. Both deserialize into one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Proof {
    Detailed {
        description: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file: Option<String>,
    },
    Plain(String),
}

impl Default for Proof {
    fn default() -> Self {
        Proof::Plain(String::new())
    }
}

impl Proof {
    pub fn description(&self) -> &str {
        match self {
            Proof::Plain(s) => s,
            Proof::Detailed { description, .. } => description,
        }
    }

    pub fn file(&self) -> Option<&str> {
        match self {
            Proof::Plain(_) => None,
            Proof::Detailed { file, .. } => file.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    pub theme: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hours: u32, // ⇔ 1-10, enforced at the CLI boundary only
    pub date: NaiveDate,
    pub status: Status,
    #[serde(default)]
    pub proof: Proof,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reflection: Reflection,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ActivityRecord {
    /// Fresh opaque id in the historical `act_` format.
    pub fn new_id() -> String {
        format!("act_{}", Uuid::new_v4().simple())
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
