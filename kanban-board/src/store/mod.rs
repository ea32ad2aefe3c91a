//! Document storage for boards
//!
//! A store holds one collection of [`Board`] documents, each embedding its
//! full column/task/checklist tree. Reads and writes are whole-document; the
//! store knows nothing about positions.

mod file;
mod memory;

pub use file::{FileBoardStore, StoreLock};
pub use memory::MemoryBoardStore;

use crate::error::Result;
use crate::types::{Board, BoardId};
use async_trait::async_trait;

/// A collection of board documents
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// All boards, oldest first
    async fn list(&self) -> Result<Vec<Board>>;

    /// Load one board, `None` if absent
    async fn get(&self, id: &BoardId) -> Result<Option<Board>>;

    /// Store a new board document
    async fn insert(&self, board: &Board) -> Result<()>;

    /// Overwrite an existing document. Returns false if no document has that id.
    async fn replace(&self, board: &Board) -> Result<bool>;

    /// Delete a document. Returns false if no document has that id.
    async fn remove(&self, id: &BoardId) -> Result<bool>;

    /// Release whatever the store holds open. Further calls may fail.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
