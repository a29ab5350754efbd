use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use postboard_core::domain::Post;
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Value};
use uuid::Uuid;

use crate::database::entity::{hash_tag, post};
use crate::database::postgres_repo::PostgresPostRepository;

// `DatabaseConnection` is not `Clone` when sea-orm's `mock` feature is on;
// share the underlying mock handle so the log can be read after the repo runs.
fn share_mock(db: &DatabaseConnection) -> DatabaseConnection {
    match db {
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(conn.clone())
        }
        _ => unreachable!("expected a mock connection"),
    }
}

fn post_row(id: Uuid, title: &str, minutes_ago: i64) -> post::Model {
    let at = Utc::now() - Duration::minutes(minutes_ago);
    post::Model {
        id,
        author: "tester".to_owned(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        created_at: at.into(),
        updated_at: at.into(),
    }
}

fn tag_row(post_id: Uuid, name: &str, position: i32) -> hash_tag::Model {
    hash_tag::Model {
        id: Uuid::new_v4(),
        post_id,
        tag_name: name.to_owned(),
        position,
    }
}

#[tokio::test]
async fn test_find_post_by_id_with_tags() {
    let post_id = Uuid::new_v4();

    // Tag rows arrive out of position order on purpose.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_row(post_id, "Test Post", 0)]])
        .append_query_results([vec![
            tag_row(post_id, "second", 1),
            tag_row(post_id, "first", 0),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title(), "Test Post");
    assert_eq!(post.id(), post_id);
    let names: Vec<_> = post.tags().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["first", "second"]);
    assert!(post.tags().iter().all(|t| t.post_id() == post_id));
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_page_groups_tags_per_post() {
    let newer = Uuid::new_v4();
    let older = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![BTreeMap::from([(
            "num_items",
            Value::BigInt(Some(12)),
        )])]])
        .append_query_results([vec![
            post_row(newer, "newer", 1),
            post_row(older, "older", 2),
        ]])
        .append_query_results([vec![tag_row(older, "only-older", 0)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let page = repo.find_page(10, 2).await.unwrap();

    assert_eq!(page.total_count, 12);
    assert_eq!(page.posts.len(), 2);
    assert_eq!(page.posts[0].id(), newer);
    assert!(page.posts[0].tags().is_empty());
    assert_eq!(page.posts[1].tags()[0].name(), "only-older");
}

#[tokio::test]
async fn test_find_page_beyond_bigint_offset_is_empty() {
    // Only the count query is available; a slice query would fail the mock.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![BTreeMap::from([(
            "num_items",
            Value::BigInt(Some(3)),
        )])]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let offset = 9_999_999_999_999_999_900u64;
    assert!(offset > i64::MAX as u64);
    let page = repo.find_page(offset, 100).await.unwrap();

    assert!(page.posts.is_empty());
    assert_eq!(page.total_count, 3);
}

#[tokio::test]
async fn test_save_new_post_writes_tags_in_order() {
    let post_id = Uuid::new_v4();
    let mut post = Post::restore(
        post_id,
        "tester".into(),
        "Tagged".into(),
        "Content".into(),
        Utc::now(),
        Utc::now(),
        Vec::new(),
    );
    post.add_tag("first-tag");
    post.add_tag("second-tag");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // existence check, then INSERT .. RETURNING
        .append_query_results([Vec::<post::Model>::new()])
        .append_query_results([vec![post_row(post_id, "Tagged", 0)]])
        // tag rewrite: delete old rows, insert the new list
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(share_mock(&db));

    let saved = repo.save(post).await.unwrap();
    assert_eq!(saved.id(), post_id);
    assert_eq!(saved.tags().len(), 2);

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("INSERT INTO"));
    assert!(log.contains("DELETE FROM"));
    assert!(log.contains("hash_tags"));
    let first = log.find("first-tag").unwrap();
    let second = log.find("second-tag").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_find_tag_owner() {
    let post_id = Uuid::new_v4();
    let tag = tag_row(post_id, "owned", 0);
    let tag_id = tag.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![tag.clone()]])
        .append_query_results([vec![post_row(post_id, "Owner", 0)]])
        .append_query_results([vec![tag]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let owner = repo.find_tag_owner(tag_id).await.unwrap().unwrap();
    assert_eq!(owner.id(), post_id);
    assert_eq!(owner.tag(tag_id).map(|t| t.name()), Some("owned"));
}

#[tokio::test]
async fn test_find_tag_owner_for_unknown_tag() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<hash_tag::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.find_tag_owner(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(matches!(
        repo.delete(Uuid::new_v4()).await,
        Err(RepoError::NotFound)
    ));
}
