//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::entities::post::{self, Entity as PostEntity};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::{CreateUser, UpdateUser, User, UserFilter, UserPost};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List users, narrowed by whatever the filter specifies
    async fn list(&self, filter: UserFilter) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Create a new user
    async fn insert(&self, user: CreateUser) -> AppResult<User>;

    /// Apply a patch; `None` when no user has this ID
    async fn update(&self, id: i32, patch: UpdateUser) -> AppResult<Option<User>>;

    /// Delete user by ID, returning the number of rows removed
    async fn remove(&self, id: i32) -> AppResult<u64>;

    /// Posts written by the user, with the author's name attached
    async fn user_posts(&self, id: i32) -> AppResult<Vec<UserPost>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct UserPostRow {
    id: i32,
    text: String,
    posted_by: String,
}

impl From<UserPostRow> for UserPost {
    fn from(row: UserPostRow) -> Self {
        UserPost {
            id: row.id,
            text: row.text,
            posted_by: row.posted_by,
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self, filter: UserFilter) -> AppResult<Vec<User>> {
        let mut query = UserEntity::find();
        if let Some(name) = filter.name {
            query = query.filter(user::Column::Name.eq(name));
        }

        let models = query
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn insert(&self, user: CreateUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(user.name),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, patch: UpdateUser) -> AppResult<Option<User>> {
        let Some(model) = UserEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(User::from(model)));
        }

        let mut active: ActiveModel = model.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(User::from(model))),
            // Deleted between the lookup and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, id: i32) -> AppResult<u64> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    async fn user_posts(&self, id: i32) -> AppResult<Vec<UserPost>> {
        let rows = PostEntity::find()
            .select_only()
            .column(post::Column::Id)
            .column(post::Column::Text)
            .column_as(user::Column::Name, "posted_by")
            .inner_join(UserEntity)
            .filter(post::Column::UserId.eq(id))
            .order_by_asc(post::Column::Id)
            .into_model::<UserPostRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(UserPost::from).collect())
    }
}
