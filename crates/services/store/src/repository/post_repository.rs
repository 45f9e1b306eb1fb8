//! Post repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};

use super::entities::post::{self, ActiveModel, Entity as PostEntity};
use common::AppResult;
use domain::{NewPost, Post, UpdatePost};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List all posts
    async fn list(&self) -> AppResult<Vec<Post>>;

    /// Find post by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Post>>;

    /// Create a new post
    async fn insert(&self, post: NewPost) -> AppResult<Post>;

    /// Apply a patch; `None` when no post has this ID
    async fn update(&self, id: i32, patch: UpdatePost) -> AppResult<Option<Post>>;

    /// Delete post by ID, returning the number of rows removed
    async fn remove(&self, id: i32) -> AppResult<u64>;
}

/// Concrete implementation of PostRepository
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn list(&self) -> AppResult<Vec<Post>> {
        let models = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Post::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Post>> {
        let result = PostEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Post::from))
    }

    async fn insert(&self, post: NewPost) -> AppResult<Post> {
        let active_model = ActiveModel {
            id: NotSet,
            text: Set(post.text),
            user_id: Set(post.user_id),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Post::from(model))
    }

    async fn update(&self, id: i32, patch: UpdatePost) -> AppResult<Option<Post>> {
        let Some(model) = PostEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(Post::from(model)));
        }

        let mut active: ActiveModel = model.into();
        if let Some(text) = patch.text {
            active.text = Set(text);
        }
        if let Some(user_id) = patch.user_id {
            active.user_id = Set(user_id);
        }

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(Post::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, id: i32) -> AppResult<u64> {
        let result = PostEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
