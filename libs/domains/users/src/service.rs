//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult, messages};
use crate::models::{CreateUser, DeleteUser, RemoveResult, UpdateUser, User};
use crate::notifier::Notifier;
use crate::repository::UserRepository;

/// User service providing business logic operations
///
/// Each operation validates its arguments before touching the repository or
/// the notifier; the first failing step ends the operation with its error.
pub struct UserService<R: UserRepository, N: Notifier> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R: UserRepository, N: Notifier> UserService<R, N> {
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository: Arc::new(repository),
            notifier: Arc::new(notifier),
        }
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> UserResult<User> {
        if is_blank(id) {
            return Err(UserError::InvalidArgument(messages::INVALID_USER_ID));
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(messages::USER_NOT_FOUND.to_string()))
    }

    /// Persist a new user, then send the welcome mail
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        let (Some(name), Some(email)) = (present(input.name), present(input.email)) else {
            return Err(UserError::InvalidArgument(messages::INVALID_ARGUMENTS));
        };

        let user = User::new(name, email, input.age);
        user.validate()?;

        let user = self.repository.insert(user).await?;
        self.notifier
            .send_welcome_email(&user.email, &user.name)
            .await?;

        Ok(user)
    }

    /// Merge `input` into the stored user and persist it
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: UpdateUser) -> UserResult<User> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(messages::USER_NOT_FOUND.to_string()))?;

        user.apply_update(input);
        user.validate()?;

        self.repository.save(user).await
    }

    /// Remove the user named by `input.id`
    #[instrument(skip(self), fields(id = ?input.id, name = ?input.name))]
    pub async fn delete_user(&self, input: DeleteUser) -> UserResult<RemoveResult> {
        let Some(id) = present(input.id) else {
            return Err(UserError::InvalidArgument(messages::INVALID_ID));
        };

        self.repository.remove_by_id(&id).await
    }

    /// Send the password-reset mail to `email`
    #[instrument(skip(self))]
    pub async fn reset_password(&self, email: &str) -> UserResult<String> {
        if is_blank(email) {
            return Err(UserError::InvalidArgument(messages::INVALID_EMAIL));
        }

        self.notifier.send_password_reset_email(email).await
    }
}

impl<R: UserRepository, N: Notifier> Clone for UserService<R, N> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::MockNotifier;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};
    use mockall::predicate::eq;

    fn service(
        repo: MockUserRepository,
        notifier: MockNotifier,
    ) -> UserService<MockUserRepository, MockNotifier> {
        UserService::new(repo, notifier)
    }

    fn create_input(name: Option<&str>, email: Option<&str>) -> CreateUser {
        CreateUser {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            age: None,
        }
    }

    #[tokio::test]
    async fn test_get_rejects_missing_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let service = service(repo, MockNotifier::new());

        for id in ["", "   "] {
            let err = service.get(id).await.unwrap_err();
            assert!(matches!(err, UserError::InvalidArgument(_)));
            assert_eq!(err.to_string(), "Invalid user id");
        }
    }

    #[tokio::test]
    async fn test_get_returns_found_user() {
        let user = User::new("foo", "foo@bar.com", None);
        let expected = user.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq("123"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let found = service(repo, MockNotifier::new()).get("123").await.unwrap();
        assert_eq!(found, expected);
    }

    #[tokio::test]
    async fn test_get_missing_record_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let err = service(repo, MockNotifier::new()).get("123").await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_surfaces_lookup_error_unchanged() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(UserError::Database("fake".to_string())));

        let err = service(repo, MockNotifier::new()).get("123").await.unwrap_err();
        assert_eq!(err.to_string(), "fake");
    }

    #[tokio::test]
    async fn test_delete_user_rejects_missing_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_remove_by_id().never();

        let err = service(repo, MockNotifier::new())
            .delete_user(DeleteUser {
                id: None,
                name: Some("foo".to_string()),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid id");
    }

    #[tokio::test]
    async fn test_delete_user_removes_by_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_remove_by_id()
            .with(eq("123"))
            .times(1)
            .returning(|_| Ok(RemoveResult { deleted_count: 1 }));

        let result = service(repo, MockNotifier::new())
            .delete_user(DeleteUser {
                id: Some("123".to_string()),
                name: Some("foo".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result, RemoveResult { deleted_count: 1 });
    }

    #[tokio::test]
    async fn test_delete_user_surfaces_store_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_remove_by_id()
            .returning(|_| Err(UserError::Database("fake".to_string())));

        let err = service(repo, MockNotifier::new())
            .delete_user(DeleteUser {
                id: Some("123".to_string()),
                name: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "fake");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_name_or_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();
        let mut notifier = MockNotifier::new();
        notifier.expect_send_welcome_email().never();

        let service = service(repo, notifier);

        for input in [
            create_input(Some("foo"), None),
            create_input(None, Some("foo@bar.com")),
            create_input(None, None),
            create_input(Some(""), Some("foo@bar.com")),
        ] {
            let err = service.create(input).await.unwrap_err();
            assert_eq!(err.to_string(), "Invalid arguments");
        }
    }

    #[tokio::test]
    async fn test_create_saves_and_sends_welcome_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|user| user.name == "foo" && user.email == "foo@bar.com" && user.age == Some(30))
            .times(1)
            .returning(Ok);

        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_welcome_email()
            .with(eq("foo@bar.com"), eq("foo"))
            .times(1)
            .returning(|_, _| Ok("Email Sent!".to_string()));

        let user = service(repo, notifier)
            .create(CreateUser {
                name: Some("foo".to_string()),
                email: Some("foo@bar.com".to_string()),
                age: Some(30),
            })
            .await
            .unwrap();

        assert_eq!(user.name, "foo");
        assert_eq!(user.email, "foo@bar.com");
        assert_eq!(user.age, Some(30));
    }

    #[tokio::test]
    async fn test_create_save_failure_skips_notification() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .returning(|_| Err(UserError::Database("fake".to_string())));

        let mut notifier = MockNotifier::new();
        notifier.expect_send_welcome_email().never();

        let err = service(repo, notifier)
            .create(create_input(Some("foo"), Some("foo@bar.com")))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "fake");
    }

    #[tokio::test]
    async fn test_create_notification_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().returning(Ok);

        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_welcome_email()
            .returning(|_, _| Err(UserError::Notification("Invalid input".to_string())));

        let err = service(repo, notifier)
            .create(create_input(Some("foo"), Some("foo@bar.com")))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Notification(_)));
    }

    #[tokio::test]
    async fn test_update_merges_and_saves() {
        let existing = User::new("foo", "foo@bar.com", None);
        let id = existing.id.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(id.clone()))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save()
            .withf(|user| user.name == "bar" && user.email == "foo@bar.com")
            .times(1)
            .returning(Ok);

        let updated = service(repo, MockNotifier::new())
            .update(
                &id,
                UpdateUser {
                    name: Some("bar".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "bar");
    }

    #[tokio::test]
    async fn test_update_save_failure_keeps_message() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(User::new("foo", "foo@bar.com", None))));
        repo.expect_save()
            .returning(|_| Err(UserError::Database("fake".to_string())));

        let err = service(repo, MockNotifier::new())
            .update("123", UpdateUser::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "fake");
    }

    #[tokio::test]
    async fn test_update_lookup_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(UserError::Database("fake".to_string())));
        repo.expect_save().never();

        let err = service(repo, MockNotifier::new())
            .update("123", UpdateUser::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "fake");
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().never();

        let err = service(repo, MockNotifier::new())
            .update("123", UpdateUser::default())
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_blanking_name_fails_validation() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(User::new("foo", "foo@bar.com", None))));
        repo.expect_save().never();

        let err = service(repo, MockNotifier::new())
            .update(
                "123",
                UpdateUser {
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        let UserError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        assert!(errors.field_errors().contains_key("name"));
    }

    #[tokio::test]
    async fn test_update_whitespace_name_and_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .insert(User::new("foo", "foo@bar.com", None))
            .await
            .unwrap();

        let service = UserService::new(repo.clone(), MockNotifier::new());
        let err = service
            .update(
                &user.id,
                UpdateUser {
                    name: Some("   ".to_string()),
                    email: Some(" ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        let UserError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));

        let stored = repo.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "foo");
        assert_eq!(stored.email, "foo@bar.com");
    }

    #[tokio::test]
    async fn test_reset_password_rejects_missing_email() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send_password_reset_email().never();

        let err = service(MockUserRepository::new(), notifier)
            .reset_password("")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid email");
    }

    #[tokio::test]
    async fn test_reset_password_sends_to_exact_email() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_password_reset_email()
            .with(eq("foo@bar.com"))
            .times(1)
            .returning(|_| Ok("Email Sent!".to_string()));

        let result = service(MockUserRepository::new(), notifier)
            .reset_password("foo@bar.com")
            .await
            .unwrap();

        assert_eq!(result, "Email Sent!");
    }
}
