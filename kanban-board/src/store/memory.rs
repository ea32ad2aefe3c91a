//! MemoryBoardStore - process-local board collection

use super::BoardStore;
use crate::error::Result;
use crate::types::{Board, BoardId};
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// Insertion-ordered in-memory store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryBoardStore {
    boards: RwLock<IndexMap<BoardId, Board>>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored boards
    pub async fn len(&self) -> usize {
        self.boards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.boards.read().await.is_empty()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn list(&self) -> Result<Vec<Board>> {
        Ok(self.boards.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &BoardId) -> Result<Option<Board>> {
        Ok(self.boards.read().await.get(id).cloned())
    }

    async fn insert(&self, board: &Board) -> Result<()> {
        self.boards
            .write()
            .await
            .insert(board.id.clone(), board.clone());
        Ok(())
    }

    async fn replace(&self, board: &Board) -> Result<bool> {
        let mut boards = self.boards.write().await;
        match boards.get_mut(&board.id) {
            Some(existing) => {
                *existing = board.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &BoardId) -> Result<bool> {
        Ok(self.boards.write().await.shift_remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardFields;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryBoardStore::new();
        let first = Board::new(BoardFields::new("First"));
        let second = Board::new(BoardFields::new("Second"));

        store.insert(&second).await.unwrap();
        store.insert(&first).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Second", "First"]);
        assert_eq!(store.get(&first.id).await.unwrap(), Some(first.clone()));
    }

    #[tokio::test]
    async fn test_replace_missing_returns_false() {
        let store = MemoryBoardStore::new();
        let board = Board::new(BoardFields::new("Ghost"));

        assert!(!store.replace(&board).await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_remove_keeps_order_of_rest() {
        let store = MemoryBoardStore::new();
        let boards: Vec<Board> = ["a", "b", "c"]
            .iter()
            .map(|n| Board::new(BoardFields::new(*n)))
            .collect();
        for b in &boards {
            store.insert(b).await.unwrap();
        }

        assert!(store.remove(&boards[1].id).await.unwrap());
        assert!(!store.remove(&boards[1].id).await.unwrap());

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(store.len().await, 2);
    }
}
