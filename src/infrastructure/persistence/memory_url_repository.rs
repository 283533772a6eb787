//! In-process implementation of the URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// In-memory URL store backed by two `DashMap` indexes.
///
/// Insert-if-absent holds the shard lock of the URL entry while the id is
/// allocated, so concurrent submissions of the same URL allocate one id.
/// Ids start at 1 and are never reused. Contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryUrlRepository {
    by_url: DashMap<String, i64>,
    by_id: DashMap<i64, String>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            by_url: DashMap::new(),
            by_id: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert_if_absent(&self, url: &str) -> Result<(), AppError> {
        if let Entry::Vacant(entry) = self.by_url.entry(url.to_string()) {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            self.by_id.insert(id, url.to_string());
            entry.insert(id);
        }

        Ok(())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .by_url
            .get(url)
            .map(|id| UrlRecord::new(*id, url.to_string())))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .by_id
            .get(&id)
            .map(|url| UrlRecord::new(id, url.clone())))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.by_id.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let repo = InMemoryUrlRepository::new();

        repo.insert_if_absent("https://example.com/a").await.unwrap();
        repo.insert_if_absent("https://example.com/b").await.unwrap();

        let a = repo.find_by_url("https://example.com/a").await.unwrap();
        let b = repo.find_by_url("https://example.com/b").await.unwrap();

        assert_eq!(a.unwrap().id, 1);
        assert_eq!(b.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_insert_is_idempotent() {
        let repo = InMemoryUrlRepository::new();

        repo.insert_if_absent("https://example.com/a").await.unwrap();
        repo.insert_if_absent("https://example.com/a").await.unwrap();
        repo.insert_if_absent("https://example.com/b").await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(
            repo.find_by_url("https://example.com/b").await.unwrap().unwrap().id,
            2
        );
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryUrlRepository::new();
        repo.insert_if_absent("https://example.com/a").await.unwrap();

        let found = repo.find_by_id(1).await.unwrap();
        assert_eq!(
            found,
            Some(UrlRecord::new(1, "https://example.com/a".to_string()))
        );

        assert!(repo.find_by_id(2).await.unwrap().is_none());
        assert!(repo.find_by_id(0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_urls_are_matched_exactly() {
        let repo = InMemoryUrlRepository::new();
        repo.insert_if_absent("https://example.com/A").await.unwrap();

        assert!(repo.find_by_url("https://example.com/a").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_create_one_record() {
        let repo = Arc::new(InMemoryUrlRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert_if_absent("https://race.example").await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(
            repo.find_by_url("https://race.example").await.unwrap().unwrap().id,
            1
        );
    }
}
