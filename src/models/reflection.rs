use serde::{Deserialize, Serialize};

/// Reflective write-up attached to an activity.
///
/// The two persistence backends historically carry different shapes: the
/// key-value store holds a single text/HTML blob, the JSON bundle a
/// five-part structured object. The untagged enum picks the variant at load
/// time so downstream display code handles one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reflection {
    Structured {
        context: String,
        facts: String,
        #[serde(rename = "projectLink")]
        project_link: String,
        skills: String,
        conclusion: String,
    },
    Text(String),
}

impl Default for Reflection {
    fn default() -> Self {
        Reflection::Text(String::new())
    }
}

impl Reflection {
    pub fn is_empty(&self) -> bool {
        match self {
            Reflection::Text(t) => t.trim().is_empty(),
            Reflection::Structured {
                context,
                facts,
                project_link,
                skills,
                conclusion,
            } => [context, facts, project_link, skills, conclusion]
                .iter()
                .all(|s| s.trim().is_empty()),
        }
    }

    /// Normalized view: (section title, body) pairs for display.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        match self {
            Reflection::Text(t) => {
                if t.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![("Reflection", t.as_str())]
                }
            }
            Reflection::Structured {
                context,
                facts,
                project_link,
                skills,
                conclusion,
            } => vec![
                ("Context", context.as_str()),
                ("Facts", facts.as_str()),
                ("Professional project link", project_link.as_str()),
                ("Skills developed", skills.as_str()),
                ("Conclusion", conclusion.as_str()),
            ],
        }
    }
}
