use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

/// Profile and credential fields for a new account.
pub struct NewUser<'r> {
    pub username: &'r str,
    pub first_name: &'r str,
    pub last_name: &'r str,
    pub middle_name: Option<&'r str>,
    pub email: &'r str,
    pub password_hash: String,
    pub is_admin: bool,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, user: NewUser<'_>) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(user.username.to_string()),
            first_name: ActiveValue::Set(user.first_name.to_string()),
            last_name: ActiveValue::Set(user.last_name.to_string()),
            middle_name: ActiveValue::Set(user.middle_name.map(str::to_string)),
            email: ActiveValue::Set(user.email.to_string()),
            password_hash: ActiveValue::Set(user.password_hash),
            is_admin: ActiveValue::Set(user.is_admin),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds a user by exact username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds a user by exact email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds all users with the provided IDs
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Whether no user has been created yet
    pub async fn is_empty(&self) -> Result<bool, DbErr> {
        Ok(entity::prelude::User::find().one(self.db).await?.is_none())
    }
}
