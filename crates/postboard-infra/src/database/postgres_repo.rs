//! PostgreSQL post repository.
//!
//! Every operation that touches more than one statement runs inside a
//! `DatabaseTransaction`. A transaction that is dropped without `commit`
//! rolls back, so early returns never leave partial writes behind.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbConn, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use postboard_core::domain::Post;
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostPage, PostRepository};

use super::entity::hash_tag::{self, Entity as HashTagEntity};
use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn begin(&self) -> Result<DatabaseTransaction, RepoError> {
        self.db.begin().await.map_err(map_db_err)
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) => RepoError::NotFound,
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

/// Tag rows for the given posts, grouped by post id.
async fn tags_by_post<C>(
    conn: &C,
    post_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, Vec<hash_tag::Model>>, RepoError>
where
    C: ConnectionTrait,
{
    let mut grouped: HashMap<Uuid, Vec<hash_tag::Model>> = HashMap::new();
    if post_ids.is_empty() {
        return Ok(grouped);
    }

    let rows = HashTagEntity::find()
        .filter(hash_tag::Column::PostId.is_in(post_ids))
        .order_by_asc(hash_tag::Column::Position)
        .all(conn)
        .await
        .map_err(map_db_err)?;

    for row in rows {
        grouped.entry(row.post_id).or_default().push(row);
    }
    Ok(grouped)
}

async fn load_post<C>(conn: &C, id: Uuid) -> Result<Option<Post>, RepoError>
where
    C: ConnectionTrait,
{
    let Some(model) = PostEntity::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)?
    else {
        return Ok(None);
    };

    let mut tags = tags_by_post(conn, vec![id]).await?;
    Ok(Some(model.into_domain(tags.remove(&id).unwrap_or_default())))
}

#[async_trait]
impl BaseRepository<Post, Uuid> for PostgresPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let txn = self.begin().await?;
        let post = load_post(&txn, id).await?;
        txn.commit().await.map_err(map_db_err)?;
        Ok(post)
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let txn = self.begin().await?;

        let exists = PostEntity::find_by_id(post.id())
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .is_some();

        let active = post::ActiveModel::from(&post);
        if exists {
            active.update(&txn).await.map_err(map_db_err)?;
        } else {
            active.insert(&txn).await.map_err(map_db_err)?;
        }

        // The tag list is rewritten as a whole to keep positions contiguous.
        HashTagEntity::delete_many()
            .filter(hash_tag::Column::PostId.eq(post.id()))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let tags = hash_tag::active_models(&post);
        if !tags.is_empty() {
            HashTagEntity::insert_many(tags)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;
        tracing::debug!(post_id = %post.id(), created = !exists, "Post saved");
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let txn = self.begin().await?;

        HashTagEntity::delete_many()
            .filter(hash_tag::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let result = PostEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_page(&self, offset: u64, limit: u64) -> Result<PostPage, RepoError> {
        let txn = self.begin().await?;

        let total_count = PostEntity::find().count(&txn).await.map_err(map_db_err)?;

        // OFFSET and LIMIT bind as BIGINT.
        let bigint_max = i64::MAX as u64;
        if offset > bigint_max {
            txn.commit().await.map_err(map_db_err)?;
            return Ok(PostPage {
                posts: Vec::new(),
                total_count,
            });
        }
        let limit = limit.min(bigint_max);

        let models = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&txn)
            .await
            .map_err(map_db_err)?;

        let mut tags = tags_by_post(&txn, models.iter().map(|m| m.id).collect()).await?;
        txn.commit().await.map_err(map_db_err)?;

        let posts = models
            .into_iter()
            .map(|m| {
                let own = tags.remove(&m.id).unwrap_or_default();
                m.into_domain(own)
            })
            .collect();

        Ok(PostPage { posts, total_count })
    }

    async fn find_tag_owner(&self, tag_id: Uuid) -> Result<Option<Post>, RepoError> {
        let txn = self.begin().await?;

        let Some(tag) = HashTagEntity::find_by_id(tag_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let owner = load_post(&txn, tag.post_id).await?;
        txn.commit().await.map_err(map_db_err)?;
        Ok(owner)
    }
}
