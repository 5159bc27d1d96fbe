use crate::models::ActivityRecord;
use serde::Serialize;

/// Flat row shape used by the CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityExport {
    pub id: String,
    pub date: String,
    pub theme: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hours: u32,
    pub status: String,
    pub proof: String,
    pub skills: String,
}

impl From<&ActivityRecord> for ActivityExport {
    fn from(rec: &ActivityRecord) -> Self {
        Self {
            id: rec.id.clone(),
            date: rec.date_str(),
            theme: rec.theme.clone(),
            title: rec.title.clone(),
            kind: rec.kind.clone(),
            hours: rec.hours,
            status: rec.status.as_str().to_string(),
            proof: rec.proof.description().to_string(),
            skills: rec.skills.join("; "),
        }
    }
}
