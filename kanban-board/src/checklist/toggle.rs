//! ToggleChecklistItem command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::BoardId;
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::Value;

/// Flip the completion flag of one checklist item
#[operation(verb = "toggle", noun = "checklist", description = "Invert a checklist item's completion flag")]
#[derive(Debug, Deserialize)]
pub struct ToggleChecklistItem {
    /// The board to edit
    pub board_id: BoardId,
    /// Column holding the task
    pub column: usize,
    /// Position of the task in the column
    pub task: usize,
    /// Position of the item in the task's checklist
    pub item: usize,
}

impl ToggleChecklistItem {
    pub fn new(board_id: impl Into<BoardId>, column: usize, task: usize, item: usize) -> Self {
        Self {
            board_id: board_id.into(),
            column,
            task,
            item,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ToggleChecklistItem {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut board = ctx.read_board(&self.board_id).await?;

        let item = board.checklist_item_mut(self.column, self.task, self.item)?;
        item.toggle();
        tracing::trace!(completed = item.is_completed, "checklist item toggled");

        ctx.write_board(&board).await?;
        Ok(serde_json::to_value(&board)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::types::{ChecklistItem, Column, Task};

    async fn setup() -> (BoardContext, String) {
        let ctx = BoardContext::in_memory();
        let created = CreateBoard::new("Test")
            .with_column(
                Column::new("To Do").with_task(
                    Task::new("Ship", "todo")
                        .with_checklist_item(ChecklistItem::new("build"))
                        .with_checklist_item(ChecklistItem::completed("test")),
                ),
            )
            .execute(&ctx)
            .await
            .unwrap();
        let id = created["id"].as_str().unwrap().to_string();
        (ctx, id)
    }

    #[tokio::test]
    async fn test_toggle_sets_completed() {
        let (ctx, id) = setup().await;

        let result = ToggleChecklistItem::new(id.as_str(), 0, 0, 0)
            .execute(&ctx)
            .await
            .unwrap();

        let items = &result["columns"][0]["tasks"][0]["checklists"];
        assert_eq!(items[0]["isCompleted"], true);
        assert_eq!(items[0]["title"], "build");
        assert_eq!(items[1]["isCompleted"], true);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores() {
        let (ctx, id) = setup().await;

        ToggleChecklistItem::new(id.as_str(), 0, 0, 1)
            .execute(&ctx)
            .await
            .unwrap();
        let result = ToggleChecklistItem::new(id.as_str(), 0, 0, 1)
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(
            result["columns"][0]["tasks"][0]["checklists"][1]["isCompleted"],
            true
        );
    }

    #[tokio::test]
    async fn test_toggle_missing_entities() {
        let (ctx, id) = setup().await;

        let column = ToggleChecklistItem::new(id.as_str(), 1, 0, 0).execute(&ctx).await;
        assert!(matches!(column, Err(KanbanError::ColumnNotFound { .. })));

        let task = ToggleChecklistItem::new(id.as_str(), 0, 1, 0).execute(&ctx).await;
        assert!(matches!(task, Err(KanbanError::TaskNotFound { .. })));

        let item = ToggleChecklistItem::new(id.as_str(), 0, 0, 2).execute(&ctx).await;
        assert!(matches!(
            item,
            Err(KanbanError::ChecklistItemNotFound { index: 2, .. })
        ));
    }
}
