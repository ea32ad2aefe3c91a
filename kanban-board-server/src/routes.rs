//! Route handlers
//!
//! Handlers only translate HTTP into board commands: parse path positions,
//! decode bodies, run the command through the processor and map errors.

use crate::error::ApiError;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use kanban_board::board::{CreateBoard, DeleteBoard, GetBoard, ListBoards, ReplaceBoard};
use kanban_board::checklist::ToggleChecklistItem;
use kanban_board::task::{AddTask, DeleteTask, DragTask, EditTask};
use kanban_board::{
    BoardContext, BoardFields, BoardId, Execute, KanbanError, OperationProcessor, Task, TaskPatch,
};
use serde::Deserialize;
use serde_json::Value;

const LIST_FAILED: &str = "Failed to fetch boards data from the database.";
const GET_FAILED: &str = "Failed to fetch board data from the database.";
const CREATE_FAILED: &str = "Failed to save data to the database.";
const DELETE_FAILED: &str = "Failed to delete board from the database.";
const REPLACE_FAILED: &str = "Failed to update board data";
const ADD_TASK_FAILED: &str = "Failed to add task to the board";
const EDIT_TASK_FAILED: &str = "Failed to edit task on the board";
const DELETE_TASK_FAILED: &str = "Failed to delete task from the board";
const DRAG_TASK_FAILED: &str = "Failed to drag task on the board";
const TOGGLE_FAILED: &str = "Failed to set checklist completed on the board";

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    ctx: BoardContext,
    processor: OperationProcessor,
}

impl AppState {
    pub fn new(ctx: BoardContext) -> Self {
        Self {
            ctx,
            processor: OperationProcessor::with_actor("http"),
        }
    }

    /// The storage context
    pub fn context(&self) -> &BoardContext {
        &self.ctx
    }

    async fn run<O>(&self, op: &O, failure: &'static str) -> Result<Json<Value>, ApiError>
    where
        O: Execute<BoardContext, KanbanError>,
    {
        self.processor
            .process(op, &self.ctx)
            .await
            .map(Json)
            .map_err(|e| ApiError::from_kanban(e, failure))
    }

    /// Unwrap parsed positions. If any failed to parse, a missing board is
    /// reported ahead of the bad position.
    async fn positions<const N: usize>(
        &self,
        board_id: &str,
        parsed: [Result<usize, ApiError>; N],
        failure: &'static str,
    ) -> Result<[usize; N], ApiError> {
        if parsed.iter().any(Result::is_err) {
            self.ctx
                .read_board(&BoardId::from(board_id))
                .await
                .map_err(|e| ApiError::from_kanban(e, failure))?;
        }

        let mut positions = [0; N];
        for (slot, result) in positions.iter_mut().zip(parsed) {
            *slot = result?;
        }
        Ok(positions)
    }
}

/// Build the `/boards` router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/boards", get(list_boards).post(create_board))
        .route(
            "/boards/:board_id",
            get(get_board).put(replace_board).delete(delete_board),
        )
        .route("/boards/addTask/:board_id/:column", post(add_task))
        .route(
            "/boards/editTask/:board_id/:prev_column/:new_column/:task",
            put(edit_task),
        )
        .route(
            "/boards/deleteTask/:board_id/:column/:task",
            axum::routing::delete(delete_task),
        )
        .route("/boards/dragTask/:board_id", put(drag_task))
        .route(
            "/boards/setChecklistCompleted/:board_id/:column/:task/:item",
            put(toggle_checklist_item),
        )
        .route("/health", get(health_check))
        .with_state(state)
}

// =========================================================================
// Position parsing
// =========================================================================

/// Kinds of positional address, for not-found messages
#[derive(Debug, Clone, Copy)]
enum Entity {
    Column,
    Task,
    ChecklistItem,
}

impl Entity {
    fn name(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Task => "task",
            Self::ChecklistItem => "checklist item",
        }
    }
}

/// A position that is not a non-negative integer addresses nothing
fn parse_index(raw: &str, entity: Entity) -> Result<usize, ApiError> {
    raw.trim().parse::<usize>().map_err(|_| {
        ApiError::NotFound(format!("{} not found at index {}", entity.name(), raw))
    })
}

/// Same as [`parse_index`] for JSON body values, accepting numbers or numeric strings
fn index_from_value(value: &Value, entity: Entity) -> Result<usize, ApiError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                ApiError::NotFound(format!("{} not found at index {}", entity.name(), n))
            }),
        Value::String(s) => parse_index(s, entity),
        other => Err(ApiError::NotFound(format!(
            "{} not found at index {}",
            entity.name(),
            other
        ))),
    }
}

/// Decode a JSON body, turning any rejection into the route's operational failure
fn decode<T>(payload: Result<Json<T>, JsonRejection>, failure: &'static str) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::internal(rejection.body_text(), failure))
}

/// An empty edit body is an empty patch
fn decode_patch(body: &[u8]) -> Result<TaskPatch, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TaskPatch::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::internal(e, EDIT_TASK_FAILED))
}

// =========================================================================
// Board handlers
// =========================================================================

async fn list_boards(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.run(&ListBoards, LIST_FAILED).await
}

async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.run(&GetBoard::new(board_id), GET_FAILED).await
}

async fn create_board(
    State(state): State<AppState>,
    payload: Result<Json<BoardFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let fields = decode(payload, CREATE_FAILED)?;
    let created = state.run(&CreateBoard::from(fields), CREATE_FAILED).await?;
    Ok((StatusCode::CREATED, created))
}

async fn delete_board(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.run(&DeleteBoard::new(board_id), DELETE_FAILED).await
}

async fn replace_board(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
    payload: Result<Json<BoardFields>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let fields = decode(payload, REPLACE_FAILED)?;
    state
        .run(&ReplaceBoard::new(board_id, fields), REPLACE_FAILED)
        .await
}

// =========================================================================
// Task handlers
// =========================================================================

async fn add_task(
    State(state): State<AppState>,
    Path((board_id, column)): Path<(String, String)>,
    payload: Result<Json<Task>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let [column] = state
        .positions(&board_id, [parse_index(&column, Entity::Column)], ADD_TASK_FAILED)
        .await?;
    let task = decode(payload, ADD_TASK_FAILED)?;
    state
        .run(&AddTask::new(board_id, column, task), ADD_TASK_FAILED)
        .await
}

async fn edit_task(
    State(state): State<AppState>,
    Path((board_id, prev_column, new_column, task)): Path<(String, String, String, String)>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let parsed = [
        parse_index(&prev_column, Entity::Column),
        parse_index(&new_column, Entity::Column),
        parse_index(&task, Entity::Task),
    ];
    let [prev_column, new_column, task] =
        state.positions(&board_id, parsed, EDIT_TASK_FAILED).await?;
    let patch = decode_patch(&body)?;

    let cmd = EditTask::new(board_id, prev_column, new_column, task).with_patch(patch);
    state.run(&cmd, EDIT_TASK_FAILED).await
}

async fn delete_task(
    State(state): State<AppState>,
    Path((board_id, column, task)): Path<(String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    let parsed = [
        parse_index(&column, Entity::Column),
        parse_index(&task, Entity::Task),
    ];
    let [column, task] = state
        .positions(&board_id, parsed, DELETE_TASK_FAILED)
        .await?;
    state
        .run(&DeleteTask::new(board_id, column, task), DELETE_TASK_FAILED)
        .await
}

/// Body of a drag request. Indices may arrive as numbers or numeric strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragRequest {
    #[serde(default, alias = "colIndex")]
    pub column_index: Value,
    #[serde(default, alias = "prevColIndex")]
    pub prev_column_index: Value,
    #[serde(default)]
    pub task_index: Value,
}

async fn drag_task(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
    payload: Result<Json<DragRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let request = decode(payload, DRAG_TASK_FAILED)?;
    let parsed = [
        index_from_value(&request.prev_column_index, Entity::Column),
        index_from_value(&request.task_index, Entity::Task),
        index_from_value(&request.column_index, Entity::Column),
    ];
    let [from, task, to] = state
        .positions(&board_id, parsed, DRAG_TASK_FAILED)
        .await?;

    state
        .run(&DragTask::new(board_id, from, to, task), DRAG_TASK_FAILED)
        .await
}

// =========================================================================
// Checklist handlers
// =========================================================================

async fn toggle_checklist_item(
    State(state): State<AppState>,
    Path((board_id, column, task, item)): Path<(String, String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    let parsed = [
        parse_index(&column, Entity::Column),
        parse_index(&task, Entity::Task),
        parse_index(&item, Entity::ChecklistItem),
    ];
    let [column, task, item] = state.positions(&board_id, parsed, TOGGLE_FAILED).await?;
    state
        .run(
            &ToggleChecklistItem::new(board_id, column, task, item),
            TOGGLE_FAILED,
        )
        .await
}

/// Health check handler for the /health endpoint.
async fn health_check() -> &'static str {
    "OK"
}
