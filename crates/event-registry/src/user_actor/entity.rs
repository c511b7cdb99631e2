//! Entity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`User`] to be managed by the generic [`actor_framework::ResourceActor`].

use super::actions::UserAction;
use super::error::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use validator::ValidateEmail;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Filter = ();
    type Action = UserAction;
    type ActionResult = User;
    type Context = ();
    type Error = UserError;

    /// Creates a new, active User. The email must be well formed.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        validate_email(&params.email)?;
        Ok(Self::new(id, params.name, params.email))
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `name`: User's display name
    /// - `email`: User's email address, validated before anything is applied
    /// - `is_active`: Account status
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<User, UserError> {
        match action {
            UserAction::Deactivate => {
                self.is_active = false;
                Ok(self.clone())
            }
        }
    }
}

/// Accepts `local@domain.tld` shaped addresses.
///
/// Syntax is delegated to [`ValidateEmail`]; on top of it the local part may not start,
/// end or repeat a dot, and the domain must have at least two labels.
fn validate_email(email: &str) -> Result<(), UserError> {
    let invalid = || UserError::InvalidEmail(email.to_string());

    if !email.validate_email() {
        return Err(invalid());
    }
    let (local, domain) = email.rsplit_once('@').ok_or_else(invalid)?;
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let labels_ok = labels.len() >= 2
        && labels
            .iter()
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'));
    if !labels_ok {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::from_create_params(UserId::new(), UserCreate::new("Alice", "alice@example.com"))
            .unwrap()
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("ann@x.com").is_ok());
        assert!(validate_email("user.name+tag@sub.example.co.uk").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "invalid",
            "@example.com",
            "user@",
            "a@b",
            "user@@example.com",
            "user@example..com",
            "user@.com",
            "us er@example.com",
            "a<b>@x.com",
            "ann,bob@x.com",
            ".ann@x.com",
            "ann.@x.com",
            "a..b@x.com",
            "a@-x-.com",
            "(x)@x.com",
            "a\"b@x.com",
        ] {
            assert!(validate_email(email).is_err(), "accepted {email:?}");
        }
    }

    #[test]
    fn test_create_rejects_invalid_email() {
        let err = User::from_create_params(UserId::new(), UserCreate::new("Bob", "not-an-email"))
            .unwrap_err();
        assert_eq!(err, UserError::InvalidEmail("not-an-email".into()));
        assert!(err.is_validation());
    }

    #[test]
    fn test_new_user_is_active() {
        assert!(alice().is_active);
    }

    #[tokio::test]
    async fn test_partial_update_leaves_omitted_fields() {
        let mut user = alice();
        let update = UserUpdate {
            name: Some("Alicia".into()),
            ..Default::default()
        };
        user.on_update(update, &()).await.unwrap();
        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "alice@example.com");
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_partial_update_applies_explicit_false() {
        let mut user = alice();
        let update = UserUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        user.on_update(update, &()).await.unwrap();
        assert!(!user.is_active);
        assert_eq!(user.name, "Alice");
    }

    #[tokio::test]
    async fn test_update_with_invalid_email_changes_nothing() {
        let mut user = alice();
        let update = UserUpdate {
            name: Some("Mallory".into()),
            email: Some("broken".into()),
            is_active: None,
        };
        let err = user.on_update(update, &()).await.unwrap_err();
        assert!(matches!(err, UserError::InvalidEmail(_)));
        assert_eq!(user, alice_with_id(user.id));
    }

    #[tokio::test]
    async fn test_deactivate_is_idempotent() {
        let mut user = alice();
        let first = user.handle_action(UserAction::Deactivate, &()).await.unwrap();
        let second = user.handle_action(UserAction::Deactivate, &()).await.unwrap();
        assert!(!first.is_active);
        assert!(!second.is_active);
    }

    fn alice_with_id(id: UserId) -> User {
        User::new(id, "Alice", "alice@example.com")
    }
}
