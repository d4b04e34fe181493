//! Frontend Models
//!
//! Data structures matching the remote todo API.

use serde::{Deserialize, Serialize};

/// Id reserved for the optimistic placeholder of an in-flight create.
pub const PLACEHOLDER_ID: u32 = 0;

/// Todo record (matches API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub user_id: u32,
}

impl Todo {
    /// Not-yet-persisted todo shown while its create call is in flight.
    pub fn placeholder(title: impl Into<String>, user_id: u32) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            title: title.into(),
            completed: false,
            user_id,
        }
    }

    /// Same record with `completed` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}

/// Create request body; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub user_id: u32,
    pub completed: bool,
}

impl From<&Todo> for NewTodo {
    fn from(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            user_id: todo.user_id,
            completed: todo.completed,
        }
    }
}

/// List filter shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterStatus {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterStatus {
    pub const ALL: [FilterStatus; 3] = [FilterStatus::All, FilterStatus::Active, FilterStatus::Completed];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            FilterStatus::All => true,
            FilterStatus::Active => !todo.completed,
            FilterStatus::Completed => todo.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterStatus::All => "All",
            FilterStatus::Active => "Active",
            FilterStatus::Completed => "Completed",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            FilterStatus::All => "#/",
            FilterStatus::Active => "#/active",
            FilterStatus::Completed => "#/completed",
        }
    }
}
