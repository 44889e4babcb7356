use serde::{Deserialize, Serialize};

/// Search keywords driving job discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Keywords {
    /// Target roles, in preference order.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Skills surfaced during discovery.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Seniority band the search aims at.
    #[serde(default)]
    pub experience_level: String,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            roles: vec![
                "Product Manager".to_string(),
                "Delivery Head".to_string(),
                "Project Manager".to_string(),
            ],
            skills: vec![
                "Agile".to_string(),
                "SaaS".to_string(),
                "Team Management".to_string(),
                "Process Improvement".to_string(),
            ],
            experience_level: "Senior".to_string(),
        }
    }
}

impl Keywords {
    /// True when there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty() && self.skills.is_empty()
    }
}
