use serde::{Deserialize, Serialize};

/// One stage of a generated project, as stored by the project source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub learning_focus: Option<String>,
    #[serde(default)]
    pub connection_to_goal: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Step {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn learning_focus(&self) -> Option<&str> {
        non_empty(&self.learning_focus)
    }

    pub fn connection_to_goal(&self) -> Option<&str> {
        non_empty(&self.connection_to_goal)
    }

    pub fn hint(&self, index: usize) -> Option<&str> {
        self.hints
            .get(index)
            .map(String::as_str)
            .filter(|h| !h.trim().is_empty())
    }
}
