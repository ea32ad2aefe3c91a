//! BoardContext - I/O primitives for board storage
//!
//! The context provides access to the document store. No business logic
//! methods, just data access primitives. Commands do all the work.

use crate::error::{KanbanError, Result};
use crate::store::{BoardStore, FileBoardStore, MemoryBoardStore};
use crate::types::{Board, BoardId};
use std::path::PathBuf;
use std::sync::Arc;

/// Context passed to every command - provides access, not logic
#[derive(Clone)]
pub struct BoardContext {
    store: Arc<dyn BoardStore>,
}

impl BoardContext {
    /// Create a context over an explicitly constructed store
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// Context over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBoardStore::new()))
    }

    /// Context over a file store rooted at `dir`, locking it for this process
    pub async fn open_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let store = FileBoardStore::open(dir).await?;
        Ok(Self::new(Arc::new(store)))
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn BoardStore> {
        &self.store
    }

    // =========================================================================
    // Board I/O
    // =========================================================================

    /// Read one board, failing with `BoardNotFound` if absent
    pub async fn read_board(&self, id: &BoardId) -> Result<Board> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| KanbanError::board_not_found(id))
    }

    /// Read every board
    pub async fn read_all_boards(&self) -> Result<Vec<Board>> {
        self.store.list().await
    }

    /// Persist a new board
    pub async fn create_board(&self, board: &Board) -> Result<()> {
        board.validate()?;
        self.store.insert(board).await
    }

    /// Persist an edited board over its existing document
    pub async fn write_board(&self, board: &Board) -> Result<()> {
        board.validate()?;
        if self.store.replace(board).await? {
            Ok(())
        } else {
            // Deleted between load and save
            Err(KanbanError::board_not_found(&board.id))
        }
    }

    /// Delete a board, failing with `BoardNotFound` if absent
    pub async fn delete_board(&self, id: &BoardId) -> Result<()> {
        if self.store.remove(id).await? {
            Ok(())
        } else {
            Err(KanbanError::board_not_found(id))
        }
    }

    /// Close the underlying store
    pub async fn close(&self) -> Result<()> {
        self.store.close().await
    }
}
