use crate::domain::{Book, BookId};
use crate::ports::catalog::{Catalog as CatalogTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Catalogのインメモリ実装
///
/// 書籍IDの昇順で保持するため、`all()` は常にID順で返る。
pub struct Catalog {
    books: Mutex<BTreeMap<BookId, Book>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(BTreeMap::new()),
        }
    }

    fn books(&self) -> MutexGuard<'_, BTreeMap<BookId, Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogTrait for Catalog {
    async fn add(&self, book: Book) -> Result<()> {
        if self.books().insert(book.id.clone(), book).is_some() {
            tracing::debug!("Overwrote existing book record");
        }
        Ok(())
    }

    async fn get(&self, book_id: &BookId) -> Result<Option<Book>> {
        Ok(self.books().get(book_id).cloned())
    }

    async fn all(&self) -> Result<Vec<Book>> {
        Ok(self.books().values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_then_get_returns_equal_record() {
        let catalog = Catalog::new();
        let book = Book::new(BookId::new("B1"), "Dune", "Herbert");

        catalog.add(book.clone()).await.unwrap();

        assert_eq!(catalog.get(&BookId::new("B1")).await.unwrap(), Some(book));
    }

    #[tokio::test]
    async fn test_add_same_id_overwrites() {
        let catalog = Catalog::new();
        catalog
            .add(Book::new(BookId::new("B1"), "Dune", "Herbert"))
            .await
            .unwrap();

        catalog
            .add(Book::new(BookId::new("B1"), "Dune Messiah", "Frank Herbert"))
            .await
            .unwrap();

        let book = catalog.get(&BookId::new("B1")).await.unwrap().unwrap();
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(catalog.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let catalog = Catalog::new();
        assert_eq!(catalog.get(&BookId::new("nope")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_all_is_ordered_by_id() {
        let catalog = Catalog::new();
        for id in ["B3", "B1", "B2"] {
            catalog
                .add(Book::new(BookId::new(id), "T", "A"))
                .await
                .unwrap();
        }

        let ids: Vec<String> = catalog
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id.to_string())
            .collect();
        assert_eq!(ids, vec!["B1", "B2", "B3"]);
    }
}
