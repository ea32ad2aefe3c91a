//! Board-level types: Board, Column, BoardFields
//!
//! A board document embeds its whole tree. Columns, tasks and checklist
//! items carry no identifiers of their own; they are addressed by their
//! zero-based position in the parent's list. All positional lookups and
//! splices live here so commands stay load-mutate-save.

use super::ids::BoardId;
use super::task::{ChecklistItem, Task};
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};

/// The kanban board document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(alias = "_id")]
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A column is an ordered list of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Append a task
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }
}

/// The client-editable part of a board: everything but the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardFields {
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl BoardFields {
    /// Create fields for an inactive board with no columns
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: false,
            columns: Vec::new(),
        }
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }
}

impl Board {
    /// Create a board with a freshly generated id
    pub fn new(fields: BoardFields) -> Self {
        Self::with_id(BoardId::new(), fields)
    }

    /// Create a board with a known id
    pub fn with_id(id: BoardId, fields: BoardFields) -> Self {
        Self {
            id,
            name: fields.name,
            is_active: fields.is_active,
            columns: fields.columns,
        }
    }

    /// Overwrite name, active flag and columns, keeping the id
    pub fn replace_fields(&mut self, fields: BoardFields) {
        self.name = fields.name;
        self.is_active = fields.is_active;
        self.columns = fields.columns;
    }

    /// The editable part of this board
    pub fn fields(&self) -> BoardFields {
        BoardFields {
            name: self.name.clone(),
            is_active: self.is_active,
            columns: self.columns.clone(),
        }
    }

    /// Reject documents that decoded but are not storable
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(KanbanError::missing_field("name"));
        }
        Ok(())
    }

    // =========================================================================
    // Positional lookups
    // =========================================================================

    /// Column at `index`
    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or(KanbanError::ColumnNotFound { index })
    }

    /// Mutable column at `index`
    pub fn column_mut(&mut self, index: usize) -> Result<&mut Column> {
        self.columns
            .get_mut(index)
            .ok_or(KanbanError::ColumnNotFound { index })
    }

    /// Task at `(column, index)`
    pub fn task(&self, column: usize, index: usize) -> Result<&Task> {
        self.column(column)?
            .tasks
            .get(index)
            .ok_or(KanbanError::TaskNotFound { column, index })
    }

    /// Mutable task at `(column, index)`
    pub fn task_mut(&mut self, column: usize, index: usize) -> Result<&mut Task> {
        self.column_mut(column)?
            .tasks
            .get_mut(index)
            .ok_or(KanbanError::TaskNotFound { column, index })
    }

    /// Mutable checklist item at `(column, task, index)`
    pub fn checklist_item_mut(
        &mut self,
        column: usize,
        task: usize,
        index: usize,
    ) -> Result<&mut ChecklistItem> {
        self.task_mut(column, task)?
            .checklists
            .get_mut(index)
            .ok_or(KanbanError::ChecklistItemNotFound {
                column,
                task,
                index,
            })
    }

    // =========================================================================
    // Positional mutations
    // =========================================================================

    /// Append a task to a column, returning its new index
    pub fn push_task(&mut self, column: usize, task: Task) -> Result<usize> {
        let tasks = &mut self.column_mut(column)?.tasks;
        tasks.push(task);
        Ok(tasks.len() - 1)
    }

    /// Remove and return the task at `(column, index)`
    pub fn remove_task(&mut self, column: usize, index: usize) -> Result<Task> {
        let tasks = &mut self.column_mut(column)?.tasks;
        if index >= tasks.len() {
            return Err(KanbanError::TaskNotFound { column, index });
        }
        Ok(tasks.remove(index))
    }

    /// Take the task at `(from, index)` out of its column, let `update` edit
    /// it, then put it back.
    ///
    /// When `to == from` the task returns to the same index; otherwise it is
    /// appended to column `to`. Every address is checked before anything is
    /// spliced, so on error the board is unchanged. Returns the task's new
    /// `(column, index)`.
    pub fn relocate_task<F>(
        &mut self,
        from: usize,
        index: usize,
        to: usize,
        update: F,
    ) -> Result<(usize, usize)>
    where
        F: FnOnce(&mut Task),
    {
        self.task(from, index)?;
        self.column(to)?;

        let mut task = self.columns[from].tasks.remove(index);
        update(&mut task);

        if from == to {
            self.columns[from].tasks.insert(index, task);
            Ok((from, index))
        } else {
            let tasks = &mut self.columns[to].tasks;
            tasks.push(task);
            Ok((to, tasks.len() - 1))
        }
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}
