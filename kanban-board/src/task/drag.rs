//! DragTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::BoardId;
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::Value;

/// Move a task to another column, leaving its fields untouched
#[operation(verb = "drag", noun = "task", description = "Move a task to a different column")]
#[derive(Debug, Deserialize)]
pub struct DragTask {
    /// The board to edit
    pub board_id: BoardId,
    /// Column currently holding the task
    pub from_column: usize,
    /// Column to drop the task into
    pub to_column: usize,
    /// Position of the task in `from_column`
    pub task: usize,
}

impl DragTask {
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
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DragTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut board = ctx.read_board(&self.board_id).await?;

        let (column, index) =
            board.relocate_task(self.from_column, self.task, self.to_column, |_| {})?;
        tracing::trace!(column, index, "task dragged");

        ctx.write_board(&board).await?;
        Ok(serde_json::to_value(&board)?)
    }
}
