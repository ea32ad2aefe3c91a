//! EditTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{BoardId, TaskPatch};
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::Value;

/// Update a task's fields and optionally move it to another column.
///
/// The task is spliced out of its column, patched, then either put back at
/// the same index (same column) or appended to the destination column.
#[operation(verb = "edit", noun = "task", description = "Edit a task, optionally changing its column")]
#[derive(Debug, Deserialize)]
pub struct EditTask {
    /// The board to edit
    pub board_id: BoardId,
    /// Column currently holding the task
    pub from_column: usize,
    /// Column the task should end up in
    pub to_column: usize,
    /// Position of the task in `from_column`
    pub task: usize,
    /// Fields to overwrite
    #[serde(default)]
    pub patch: TaskPatch,
}

impl EditTask {
    pub fn new(
        board_id: impl Into<BoardId>,
        from_column: usize,
        to_column: usize,
        task: usize,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            from_column,
            to_column,
            task,
            patch: TaskPatch::default(),
        }
    }

    /// Set the field updates
    pub fn with_patch(mut self, patch: TaskPatch) -> Self {
        self.patch = patch;
        self
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for EditTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut board = ctx.read_board(&self.board_id).await?;

        let (column, index) =
            board.relocate_task(self.from_column, self.task, self.to_column, |task| {
                self.patch.apply(task)
            })?;
        tracing::trace!(column, index, "task edited");

        ctx.write_board(&board).await?;
        Ok(serde_json::to_value(&board)?)
    }
}
