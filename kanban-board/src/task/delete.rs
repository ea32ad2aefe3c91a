//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::BoardId;
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::Value;

/// Remove a task from a column
#[operation(verb = "delete", noun = "task", description = "Remove a task from a column")]
#[derive(Debug, Deserialize)]
pub struct DeleteTask {
    /// The board to edit
    pub board_id: BoardId,
    /// Column holding the task
    pub column: usize,
    /// Position of the task in the column
    pub task: usize,
}

impl DeleteTask {
    pub fn new(board_id: impl Into<BoardId>, column: usize, task: usize) -> Self {
        Self {
            board_id: board_id.into(),
            column,
            task,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DeleteTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut board = ctx.read_board(&self.board_id).await?;
        let removed = board.remove_task(self.column, self.task)?;
        tracing::trace!(title = %removed.title, "task removed");

        ctx.write_board(&board).await?;
        Ok(serde_json::to_value(&board)?)
    }
}
