//! Post handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use postboard_core::PageRequest;
use postboard_core::command::{NewPost, PostRevision};
use postboard_shared::ApiResponse;
use postboard_shared::dto::{AddTagRequest, CreatePostRequest, ListPostsQuery, ModifyPostRequest};

use crate::config::PagingConfig;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Apply server defaults and the page-size ceiling to a listing query.
fn page_request(query: &ListPostsQuery, paging: &PagingConfig) -> AppResult<PageRequest> {
    let size = query.size.unwrap_or(paging.default_page_size);
    if size > paging.max_page_size {
        return Err(AppError::BadRequest(format!(
            "size must be at most {}, got {}",
            paging.max_page_size, size
        )));
    }
    Ok(PageRequest::new(query.page.unwrap_or(1), size))
}

/// GET /api/v1/posts?page=&size=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    tracing::info!(page = ?query.page, size = ?query.size, "GET /api/v1/posts");

    let request = page_request(&query, &state.paging)?;
    let listing = state.posts.list(request).await?;

    Ok(HttpResponse::Ok().json(listing))
}

/// GET /api/v1/posts/{id}
pub async fn detail(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    tracing::info!(post_id = %id, "GET /api/v1/posts/{{id}}");

    let detail = state.posts.detail(id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// POST /api/v1/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::info!(author = %req.author, tags = req.hash_tags.len(), "POST /api/v1/posts");

    let created = state
        .posts
        .create(NewPost {
            author: req.author,
            title: req.title,
            content: req.content,
            tags: req.hash_tags,
        })
        .await?;

    Ok(HttpResponse::Created().json(created))
}

/// PATCH|PUT /api/v1/posts
pub async fn modify(
    state: web::Data<AppState>,
    request: HttpRequest,
    body: web::Json<ModifyPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::info!(method = %request.method(), post_id = %req.id, "/api/v1/posts");

    let modified = state
        .posts
        .modify(
            req.id,
            PostRevision {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(modified))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    tracing::info!(post_id = %id, "DELETE /api/v1/posts/{{id}}");

    state.posts.delete(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(id, "Post deleted")))
}

/// GET /api/v1/posts/{id}/tags
pub async fn list_tags(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let tags = state.posts.tags(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tags))
}

/// POST /api/v1/posts/{id}/tags
pub async fn add_tag(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<AddTagRequest>,
) -> AppResult<HttpResponse> {
    let detail = state
        .posts
        .add_tag(id.into_inner(), body.into_inner().tag_name)
        .await?;
    Ok(HttpResponse::Created().json(detail))
}

/// DELETE /api/v1/posts/{id}/tags/{tag_id}
pub async fn remove_tag(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, tag_id) = path.into_inner();
    let detail = state.posts.remove_tag(post_id, tag_id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// GET /api/v1/tags/{tag_id}/post
pub async fn tag_owner(
    state: web::Data<AppState>,
    tag_id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let owner = state.posts.tag_owner(tag_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(owner))
}
