use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user; the repository assigns the identifier.
    #[instrument(skip(self, input), fields(nickname = %input.nickname))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let mut user = User {
            id: 0,
            nickname: input.nickname,
            email: input.email,
        };
        user.id = self.repository.add_user(user.clone()).await?;
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get_user_by_id(&self, id: i64) -> UserResult<User> {
        self.repository.get_user_by_id(id).await
    }

    /// Update a user; empty fields in the DTO retain the stored value.
    #[instrument(skip(self, input), fields(user_id = %id))]
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<User> {
        let mut user = self.repository.get_user_by_id(id).await?;
        user.apply_update(input);
        self.repository.edit_user(user).await
    }

    /// Delete a user; the identifier must exist.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn remove_user(&self, id: i64) -> UserResult<()> {
        self.repository.get_user_by_id(id).await?;
        self.repository.delete_user(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryUserRepository;

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(InMemoryUserRepository::new())
    }

    fn create_input(nickname: &str, email: &str) -> CreateUser {
        CreateUser {
            nickname: nickname.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_from_repository() {
        let service = service();

        let first = service
            .create_user(create_input("alice", "a@x.com"))
            .await
            .unwrap();
        let second = service
            .create_user(create_input("bob", "b@x.com"))
            .await
            .unwrap();

        assert_eq!(first.id, 0);
        assert_eq!(second.id, 1);
    }

    #[tokio::test]
    async fn test_update_overwrites_non_empty_fields() {
        let service = service();
        let user = service
            .create_user(create_input("alice", "a@x.com"))
            .await
            .unwrap();

        let updated = service
            .update_user(
                user.id,
                UpdateUser {
                    nickname: "alicia".to_string(),
                    email: String::new(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.nickname, "alicia");
        // Omitted field retains the prior value.
        assert_eq!(updated.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let service = service();
        let result = service.update_user(42, UpdateUser::default()).await;
        assert_eq!(result, Err(UserError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_remove_missing_user_is_not_found() {
        let service = service();
        assert_eq!(service.remove_user(42).await, Err(UserError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_remove_then_get_is_not_found() {
        let service = service();
        let user = service
            .create_user(create_input("alice", "a@x.com"))
            .await
            .unwrap();

        service.remove_user(user.id).await.unwrap();
        assert_eq!(
            service.get_user_by_id(user.id).await,
            Err(UserError::NotFound(user.id))
        );
    }
}
