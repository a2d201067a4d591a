//! Deterministic fake posts for demos and test fixtures.
//!
//! The same seed always yields the same authors, titles, and content.
//! Ids are fresh v4 values on every call, so reseeding a persistent store
//! never brings back the id of a deleted post. Timestamps are anchored to
//! the moment of generation, spaced a day apart so list ordering is stable.

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// Errors raised while persisting generated posts.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to store seed post {index}: {source}")]
    Store {
        index: usize,
        #[source]
        source: RepoError,
    },
}

/// Generate `count` posts from `seed`, oldest first.
pub fn generate_posts(seed: u64, count: usize) -> Vec<BlogPost> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let now = Utc::now();
    let oldest = now - Duration::days(count as i64);

    (0..count)
        .map(|i| generate_single_post(&mut rng, oldest + Duration::days(i as i64)))
        .collect()
}

fn generate_single_post(rng: &mut ChaCha8Rng, created: chrono::DateTime<Utc>) -> BlogPost {
    let first_name: String = FirstName(EN).fake_with_rng(rng);
    let last_name: String = LastName(EN).fake_with_rng(rng);
    let title: String = Sentence(EN, 3..8).fake_with_rng(rng);
    let content: String = Paragraph(EN, 2..6).fake_with_rng(rng);

    BlogPost {
        id: Uuid::new_v4(),
        author: Author {
            first_name,
            last_name,
        },
        title,
        content,
        created,
    }
}

/// Generate and persist `count` posts, returning what was stored.
pub async fn seed_posts(
    repo: &dyn PostRepository,
    seed: u64,
    count: usize,
) -> Result<Vec<BlogPost>, SeedError> {
    let mut stored = Vec::with_capacity(count);
    for (index, post) in generate_posts(seed, count).into_iter().enumerate() {
        let post = repo
            .insert(post)
            .await
            .map_err(|source| SeedError::Store { index, source })?;
        stored.push(post);
    }

    tracing::info!(count = stored.len(), seed, "Seeded posts");
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryPostRepository;

    #[test]
    fn test_same_seed_same_content_fresh_ids() {
        let a = generate_posts(42, 5);
        let b = generate_posts(42, 5);
        for (x, y) in a.iter().zip(&b) {
            assert_ne!(x.id, y.id);
            assert_eq!(x.author, y.author);
            assert_eq!(x.title, y.title);
            assert_eq!(x.content, y.content);
        }
    }

    #[test]
    fn test_generated_fields_are_present() {
        for post in generate_posts(7, 10) {
            assert!(!post.author.first_name.is_empty());
            assert!(!post.author.last_name.is_empty());
            assert!(!post.title.is_empty());
            assert!(!post.content.is_empty());
        }
    }

    #[test]
    fn test_posts_are_oldest_first() {
        let posts = generate_posts(1, 4);
        assert!(posts.windows(2).all(|w| w[0].created < w[1].created));
    }

    #[tokio::test]
    async fn test_seed_posts_persists_all() {
        let repo = InMemoryPostRepository::new();
        let stored = seed_posts(&repo, 42, 10).await.unwrap();
        assert_eq!(stored.len(), 10);
        assert_eq!(repo.count().await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_reseed_never_restores_deleted_id() {
        let repo = InMemoryPostRepository::new();
        let first = seed_posts(&repo, 42, 3).await.unwrap();
        let deleted = first[0].id;
        repo.delete(deleted).await.unwrap();

        let second = seed_posts(&repo, 42, 3).await.unwrap();
        assert_eq!(second.len(), 3);
        assert_eq!(repo.count().await.unwrap(), 5);
        assert_eq!(repo.find_by_id(deleted).await.unwrap(), None);
        assert!(second.iter().all(|p| p.id != deleted));
    }
}
