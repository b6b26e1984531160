//! In-process `BookStore`. Ids start at 1 and are never reused.

use super::BookStore;
use crate::error::AppError;
use crate::model::{Book, BookInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, Book>,
}

#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn create(&self, input: &BookInput) -> Result<Book, AppError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Storage("book id sequence exhausted".into()))?;
        inner.last_id = id;
        let book = input.clone().into_book(id);
        inner.rows.insert(book.id, book.clone());
        Ok(book)
    }

    async fn read(&self, id: i32) -> Result<Option<Book>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, input: &BookInput) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = input.clone().into_book(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> BookInput {
        BookInput {
            title: title.into(),
            author: "Herbert".into(),
            description: "scifi".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = MemoryBookStore::new();
        let first = store.create(&input("Dune")).await.unwrap();
        assert_eq!(store.delete(first.id).await.unwrap(), 1);
        let second = store.create(&input("Dune Messiah")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn update_and_delete_report_rows_affected() {
        let store = MemoryBookStore::new();
        let book = store.create(&input("Dune")).await.unwrap();
        assert_eq!(store.update(book.id, &input("Children of Dune")).await.unwrap(), 1);
        assert_eq!(store.update(99, &input("x")).await.unwrap(), 0);
        assert_eq!(store.delete(book.id).await.unwrap(), 1);
        assert_eq!(store.delete(book.id).await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn exhausted_id_sequence_is_an_error() {
        let store = MemoryBookStore {
            inner: RwLock::new(Inner {
                last_id: i32::MAX,
                rows: BTreeMap::new(),
            }),
        };
        match store.create(&input("Dune")).await {
            Err(AppError::Storage(message)) => assert!(message.contains("exhausted")),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_identifier() {
        let store = MemoryBookStore::new();
        let book = store.create(&input("Dune")).await.unwrap();
        store.update(book.id, &input("God Emperor")).await.unwrap();
        let stored = store.read(book.id).await.unwrap().unwrap();
        assert_eq!(stored.id, book.id);
        assert_eq!(stored.title, "God Emperor");
    }
}
