//! FileBoardStore - one JSON document per board in a data directory
//!
//! ```text
//! data_dir/
//! ├── .lock               # Held exclusively while the store is open
//! └── boards/
//!     └── {id}.json       # Board document (pretty JSON)
//! ```

use super::BoardStore;
use crate::error::{KanbanError, Result};
use crate::types::{Board, BoardId};
use async_trait::async_trait;
use fs2::FileExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;

/// File-backed board collection
pub struct FileBoardStore {
    /// Path to the data directory
    root: PathBuf,
    lock: Mutex<Option<StoreLock>>,
}

impl FileBoardStore {
    /// Open (creating if needed) the data directory and lock it for this process
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(root.join("boards")).await?;

        let lock = StoreLock::acquire(root.join(".lock"))?;
        tracing::debug!(path = %root.display(), "opened board store");

        Ok(Self {
            root,
            lock: Mutex::new(Some(lock)),
        })
    }

    // =========================================================================
    // Path helpers
    // =========================================================================

    /// Get the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the boards directory
    pub fn boards_dir(&self) -> PathBuf {
        self.root.join("boards")
    }

    /// Path to a board's JSON file
    pub fn board_path(&self, id: &BoardId) -> PathBuf {
        self.boards_dir().join(format!("{}.json", id))
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    /// Whether the directory lock is still held
    pub fn is_open(&self) -> bool {
        self.lock
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Path for an id that may have come from a request; `None` if it cannot name a file
    fn safe_path(&self, id: &BoardId) -> Option<PathBuf> {
        id.is_safe_file_stem().then(|| self.board_path(id))
    }

    /// Read and decode a board file. The file name wins over any id inside it.
    ///
    /// A file that vanished before it could be read is absent, not an error:
    /// a concurrent delete may remove it at any point.
    async fn read_board_file(&self, path: &Path, id: BoardId) -> Result<Option<Board>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut board: Board = serde_json::from_str(&content)?;
        board.id = id;
        Ok(Some(board))
    }

    async fn write_board_file(&self, board: &Board) -> Result<()> {
        let content = serde_json::to_string_pretty(board)?;
        atomic_write(&self.board_path(&board.id), content.as_bytes()).await
    }

    /// List all board IDs by reading the boards directory
    pub async fn list_board_ids(&self) -> Result<Vec<BoardId>> {
        let mut entries = match fs::read_dir(self.boards_dir()).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(BoardId::from_string(stem));
                }
            }
        }

        ids.sort();
        Ok(ids)
    }
}

#[async_trait]
impl BoardStore for FileBoardStore {
    async fn list(&self) -> Result<Vec<Board>> {
        let ids = self.list_board_ids().await?;
        let mut boards = Vec::with_capacity(ids.len());

        for id in ids {
            let path = self.board_path(&id);
            if let Some(board) = self.read_board_file(&path, id).await? {
                boards.push(board);
            }
        }

        Ok(boards)
    }

    async fn get(&self, id: &BoardId) -> Result<Option<Board>> {
        match self.safe_path(id) {
            Some(path) => self.read_board_file(&path, id.clone()).await,
            None => Ok(None),
        }
    }

    async fn insert(&self, board: &Board) -> Result<()> {
        if !board.id.is_safe_file_stem() {
            return Err(KanbanError::invalid_value(
                "id",
                format!("'{}' cannot be used as a document name", board.id),
            ));
        }
        self.write_board_file(board).await
    }

    async fn replace(&self, board: &Board) -> Result<bool> {
        let Some(path) = self.safe_path(&board.id) else {
            return Ok(false);
        };
        if !fs::try_exists(&path).await? {
            return Ok(false);
        }
        self.write_board_file(board).await?;
        Ok(true)
    }

    async fn remove(&self, id: &BoardId) -> Result<bool> {
        let Some(path) = self.safe_path(id) else {
            return Ok(false);
        };

        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn close(&self) -> Result<()> {
        if let Ok(mut guard) = self.lock.lock() {
            if guard.take().is_some() {
                tracing::debug!(path = %self.root.display(), "closed board store");
            }
        }
        Ok(())
    }
}

/// RAII lock guard on the data directory - releases on drop
pub struct StoreLock {
    file: std::fs::File,
    path: PathBuf,
}

impl StoreLock {
    /// Try to acquire an exclusive lock (non-blocking)
    pub fn acquire(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self { file, path }),
            Err(_) => Err(KanbanError::LockBusy),
        }
    }

    /// Path of the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Atomic write via uniquely named temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    // Unique per write so concurrent saves of one board never share a temp file
    let temp_path = path.with_extension(format!("{}.tmp", ulid::Ulid::new()));
    fs::write(&temp_path, content).await?;

    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e.into());
    }

    Ok(())
}
