//! End-to-end board scenarios against the file-backed store

use kanban_board::{
    board::{CreateBoard, DeleteBoard, GetBoard, ListBoards, ReplaceBoard},
    checklist::ToggleChecklistItem,
    task::{AddTask, DeleteTask, DragTask},
    BoardContext, BoardFields, ChecklistItem, Column, Execute, KanbanError, OperationProcessor,
    Task,
};
use serde_json::Value;
use tempfile::TempDir;

async fn setup() -> (TempDir, BoardContext) {
    let temp = TempDir::new().unwrap();
    let ctx = BoardContext::open_dir(temp.path().join("data")).await.unwrap();
    (temp, ctx)
}

fn sprint() -> CreateBoard {
    CreateBoard::new("Sprint")
        .active(true)
        .with_column(Column::new("To Do"))
        .with_column(Column::new("Done"))
}

async fn create(ctx: &BoardContext, cmd: CreateBoard) -> Value {
    cmd.execute(ctx).await.unwrap()
}

fn board_id(board: &Value) -> String {
    board["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_list_after_create_includes_board() {
    let (_temp, ctx) = setup().await;
    let processor = OperationProcessor::new();

    let created = processor.process(&sprint(), &ctx).await.unwrap();
    let listed = processor.process(&ListBoards, &ctx).await.unwrap();

    let boards = listed.as_array().unwrap();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0], created);

    let fields: BoardFields = serde_json::from_value(boards[0].clone()).unwrap();
    assert_eq!(fields, sprint().fields);
}

#[tokio::test]
async fn test_delete_twice_reports_not_found() {
    let (_temp, ctx) = setup().await;
    let id = board_id(&create(&ctx, sprint()).await);

    DeleteBoard::new(id.as_str()).execute(&ctx).await.unwrap();
    let err = DeleteBoard::new(id.as_str()).execute(&ctx).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_replace_then_reread() {
    let (_temp, ctx) = setup().await;
    let id = board_id(&create(&ctx, sprint()).await);
    let replacement = BoardFields::new("Sprint 2")
        .with_column(Column::new("Backlog").with_task(Task::new("carry over", "todo")));

    ReplaceBoard::new(id.as_str(), replacement.clone())
        .execute(&ctx)
        .await
        .unwrap();
    let reread = GetBoard::new(id.as_str()).execute(&ctx).await.unwrap();

    assert_eq!(
        serde_json::from_value::<BoardFields>(reread).unwrap(),
        replacement
    );
}

#[tokio::test]
async fn test_move_task_to_done_scenario() {
    let (_temp, ctx) = setup().await;
    let id = board_id(&create(&ctx, sprint()).await);

    AddTask::new(id.as_str(), 0, Task::new("Write release notes", "todo"))
        .execute(&ctx)
        .await
        .unwrap();
    let result = DragTask::new(id.as_str(), 0, 1, 0)
        .execute(&ctx)
        .await
        .unwrap();

    assert!(result["columns"][0]["tasks"].as_array().unwrap().is_empty());
    let done = result["columns"][1]["tasks"].as_array().unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0]["title"], "Write release notes");
}

#[tokio::test]
async fn test_toggle_scenario() {
    let (_temp, ctx) = setup().await;
    let created = CreateBoard::new("Checklist")
        .with_column(Column::new("To Do").with_task(
            Task::new("Release", "todo").with_checklist_item(ChecklistItem::new("tag")),
        ))
        .execute(&ctx)
        .await
        .unwrap();
    let id = board_id(&created);

    let result = ToggleChecklistItem::new(id.as_str(), 0, 0, 0)
        .execute(&ctx)
        .await
        .unwrap();

    assert_eq!(
        result["columns"][0]["tasks"][0]["checklists"][0]["isCompleted"],
        true
    );
}

#[tokio::test]
async fn test_delete_task_out_of_range_scenario() {
    let (_temp, ctx) = setup().await;
    let id = board_id(&create(&ctx, sprint()).await);
    AddTask::new(id.as_str(), 0, Task::new("only", "todo"))
        .execute(&ctx)
        .await
        .unwrap();

    let result = DeleteTask::new(id.as_str(), 0, 1).execute(&ctx).await;
    assert!(matches!(result, Err(KanbanError::TaskNotFound { .. })));

    let stored = GetBoard::new(id.as_str()).execute(&ctx).await.unwrap();
    let tasks = stored["columns"][0]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "only");
}

#[tokio::test]
async fn test_boards_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("data");

    let ctx = BoardContext::open_dir(&dir).await.unwrap();
    let created = create(&ctx, sprint()).await;
    ctx.close().await.unwrap();
    drop(ctx);

    let reopened = BoardContext::open_dir(&dir).await.unwrap();
    let listed = ListBoards.execute(&reopened).await.unwrap();
    assert_eq!(listed, Value::Array(vec![created]));
}

