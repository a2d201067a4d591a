//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, NewPost, PostPatch};
use blog_shared::dto::{AuthorPayload, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// Project a stored post into its wire form, flattening the author.
pub fn to_response(post: BlogPost) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author.full_name(),
        title: post.title,
        content: post.content,
        created: post.created,
    }
}

fn to_author(payload: AuthorPayload) -> Author {
    Author {
        first_name: payload.first_name,
        last_name: payload.last_name,
    }
}

fn require<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing `{field}` in request body")))
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let new_post = NewPost {
        author: to_author(require(req.author, "author")?),
        title: require(req.title, "title")?,
        content: require(req.content, "content")?,
        created: req.created,
    };

    let post = state.posts.create(new_post).await?;
    tracing::debug!(request_id = %request_id.as_str(), post_id = %post.id, "Created post");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
///
/// Responds 201 with the merged post.
pub async fn update(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id {
        if body_id != id {
            return Err(AppError::BadRequest(format!(
                "Request path id ({id}) and request body id ({body_id}) must match"
            )));
        }
    }

    let patch = PostPatch {
        author: req.author.map(to_author),
        title: req.title,
        content: req.content,
        created: req.created,
    };

    let post = state.posts.update(id, patch).await?;
    tracing::debug!(request_id = %request_id.as_str(), post_id = %id, "Updated post");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// DELETE /posts/{id}
///
/// Always 204, including for ids that do not exist.
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_to_response_flattens_author() {
        let post = BlogPost {
            id: Uuid::new_v4(),
            author: Author::new("Ira", "Glass"),
            title: "T".to_string(),
            content: "C".to_string(),
            created: Utc::now(),
        };
        let wire = to_response(post.clone());
        assert_eq!(wire.id, post.id);
        assert_eq!(wire.author, "Ira Glass");
        assert_eq!(wire.title, "T");
        assert_eq!(wire.content, "C");
        assert_eq!(wire.created, post.created);
    }

    #[test]
    fn test_require_names_missing_field() {
        let err = require::<String>(None, "title").unwrap_err();
        assert_eq!(err.to_string(), "Bad request: Missing `title` in request body");
    }
}
