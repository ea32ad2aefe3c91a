//! Task types: Task, ChecklistItem, TaskPatch

use serde::{Deserialize, Deserializer, Serialize};

/// A task/card inside a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub checklists: Vec<ChecklistItem>,
}

impl Task {
    /// Create a new task with a title and status
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: status.into(),
            checklists: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = None;
        self
    }

    /// Append a checklist item
    pub fn with_checklist_item(mut self, item: ChecklistItem) -> Self {
        self.checklists.push(item);
        self
    }
}

/// One line of a task's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub title: String,
    pub is_completed: bool,
}

impl ChecklistItem {
    /// Create an open checklist item
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_completed: false,
        }
    }

    /// Create a checklist item that is already ticked
    pub fn completed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_completed: true,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

/// Field updates for an existing task. Absent fields are left unchanged;
/// `"description": null` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `Some(None)` clears, `None` keeps
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklists: Option<Vec<ChecklistItem>>,
}

impl TaskPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn with_checklists(mut self, checklists: Vec<ChecklistItem>) -> Self {
        self.checklists = Some(checklists);
        self
    }

    /// Overwrite the supplied fields on `task`
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(status) = &self.status {
            task.status = status.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(checklists) = &self.checklists {
            task.checklists = checklists.clone();
        }
    }
}

/// A field that is present maps to `Some`, even when it is `null`
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
