//! ReplaceBoard command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{BoardFields, BoardId};
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::Value;

/// Overwrite a board's name, active flag and full column tree
#[operation(verb = "replace", noun = "board", description = "Replace a board's contents")]
#[derive(Debug, Deserialize)]
pub struct ReplaceBoard {
    /// The board ID to overwrite
    pub id: BoardId,
    /// The new contents
    pub fields: BoardFields,
}

impl ReplaceBoard {
    pub fn new(id: impl Into<BoardId>, fields: BoardFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ReplaceBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut board = ctx.read_board(&self.id).await?;
        board.replace_fields(self.fields.clone());

        ctx.write_board(&board).await?;
        Ok(serde_json::to_value(&board)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CreateBoard, GetBoard};
    use crate::types::{ChecklistItem, Column, Task};

    async fn setup() -> (BoardContext, String) {
        let ctx = BoardContext::in_memory();
        let created = CreateBoard::new("Original")
            .with_column(Column::new("To Do").with_task(Task::new("old", "todo")))
            .execute(&ctx)
            .await
            .unwrap();
        let id = created["id"].as_str().unwrap().to_string();
        (ctx, id)
    }

    #[tokio::test]
    async fn test_replace_then_read_returns_new_contents() {
        let (ctx, id) = setup().await;
        let fields = BoardFields::new("Replaced").active(true).with_column(
            Column::new("Doing").with_task(
                Task::new("new", "doing").with_checklist_item(ChecklistItem::new("step")),
            ),
        );

        let result = ReplaceBoard::new(id.as_str(), fields.clone())
            .execute(&ctx)
            .await
            .unwrap();
        let reread = GetBoard::new(id.as_str()).execute(&ctx).await.unwrap();

        assert_eq!(result, reread);
        assert_eq!(reread["id"], id.as_str());
        let stored: BoardFields = serde_json::from_value(reread).unwrap();
        assert_eq!(stored, fields);
    }

    #[tokio::test]
    async fn test_replace_is_idempotent() {
        let (ctx, id) = setup().await;
        let fields = BoardFields::new("Twice");

        let first = ReplaceBoard::new(id.as_str(), fields.clone())
            .execute(&ctx)
            .await
            .unwrap();
        let second = ReplaceBoard::new(id.as_str(), fields)
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_replace_missing_board() {
        let ctx = BoardContext::in_memory();
        let result = ReplaceBoard::new("missing", BoardFields::new("X"))
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(KanbanError::BoardNotFound { .. })));
    }
}
