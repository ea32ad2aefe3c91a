//! AddTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{BoardId, Task};
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::Value;

/// Append a task to the end of a column
#[operation(verb = "add", noun = "task", description = "Append a task to a column")]
#[derive(Debug, Deserialize)]
pub struct AddTask {
    /// The board to edit
    pub board_id: BoardId,
    /// Position of the target column
    pub column: usize,
    /// The task to append
    pub task: Task,
}

impl AddTask {
    pub fn new(board_id: impl Into<BoardId>, column: usize, task: Task) -> Self {
        Self {
            board_id: board_id.into(),
            column,
            task,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for AddTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut board = ctx.read_board(&self.board_id).await?;
        let index = board.push_task(self.column, self.task.clone())?;
        tracing::trace!(column = self.column, index, "task appended");

        ctx.write_board(&board).await?;
        Ok(serde_json::to_value(&board)?)
    }
}
