use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};
use uuid::Uuid;

use fitness_users_schema::users;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::UsersServiceError;

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UsersServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_keycloak_id(
        &self,
        keycloak_id: &str,
    ) -> Result<Option<User>, UsersServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::KeycloakId.eq(keycloak_id))
            .one(&self.db)
            .await
            .context("find user by keycloak id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), UsersServiceError> {
        let result = users::ActiveModel {
            id: Set(user.id),
            keycloak_id: Set(keycloak_id_to_column(&user.keycloak_id)),
            email: Set(user.email.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) => Err(insert_error(e.sql_err(), e)),
        }
    }

    async fn ping(&self) -> Result<(), UsersServiceError> {
        self.db.ping().await.context("ping database")?;
        Ok(())
    }
}

/// A unique index rejecting the row means the email or keycloak id is taken.
fn insert_error(sql_err: Option<SqlErr>, err: DbErr) -> UsersServiceError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => UsersServiceError::UserAlreadyExists,
        _ => anyhow::Error::new(err).context("create user").into(),
    }
}

fn keycloak_id_to_column(keycloak_id: &str) -> Option<String> {
    if keycloak_id.is_empty() {
        None
    } else {
        Some(keycloak_id.to_owned())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        keycloak_id: model.keycloak_id.unwrap_or_default(),
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
