use std::collections::BTreeMap;

use blog_core::domain::{Author, BlogPost, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(title: &str) -> post::Model {
    post::Model {
        id: uuid::Uuid::new_v4(),
        author_first_name: "Ira".to_owned(),
        author_last_name: "Glass".to_owned(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        created: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post");
    let post_id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.author, Author::new("Ira", "Glass"));
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("one"), model("two")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts: Vec<BlogPost> = repo.find_all().await.unwrap();

    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["one", "two"]);
}

#[tokio::test]
async fn test_insert_returns_stored_post() {
    let row = model("Created");
    let post: BlogPost = row.clone().into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let saved = repo.insert(post.clone()).await.unwrap();

    assert_eq!(saved.id, post.id);
    assert_eq!(saved.author.full_name(), "Ira Glass");
}

#[tokio::test]
async fn test_update_returns_merged_post() {
    let mut post: BlogPost = model("Draft").into();
    post.apply(PostPatch {
        title: Some("Published".to_owned()),
        author: Some(Author::new("Ira", "Flato")),
        ..Default::default()
    });

    let mut row = model("Published");
    row.id = post.id;
    row.author_last_name = "Flato".to_owned();
    row.created = post.created.into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let updated = repo.update(post.clone()).await.unwrap();

    assert_eq!(updated, post);
    assert_eq!(updated.author.full_name(), "Ira Flato");
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let post: BlogPost = model("Gone").into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo.update(post).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_reports_missing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let id = uuid::Uuid::new_v4();

    BaseRepository::<BlogPost, uuid::Uuid>::delete(&repo, id).await.unwrap();
    assert!(matches!(
        BaseRepository::<BlogPost, uuid::Uuid>::delete(&repo, id).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_count() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[BTreeMap::from([("num_items", Value::from(10i64))])]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.count().await.unwrap(), 10);
}
