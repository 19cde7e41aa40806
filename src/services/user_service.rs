use crate::database::UserStore;
use crate::models::{User, UserInfo};
use crate::utils::{verify_password, AppError};

/// Result of an email/password check. A missing user is an outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Authenticated(UserInfo),
    NotFound,
    InvalidCredentials,
}

// Fetch all users
pub async fn get_users<S>(store: &S) -> Result<Vec<User>, AppError>
where
    S: UserStore + ?Sized,
{
    let users = store.find_all().await?;
    log::debug!("📋 Found {} users", users.len());
    Ok(users)
}

pub async fn find_user_by_email<S>(store: &S, email: &str) -> Result<Option<User>, AppError>
where
    S: UserStore + ?Sized,
{
    store.find_by_email(email).await
}

// Authenticate user
pub async fn authenticate_user<S>(
    store: &S,
    email: &str,
    password: &str,
) -> Result<AuthOutcome, AppError>
where
    S: UserStore + ?Sized,
{
    let user = match find_user_by_email(store, email).await? {
        Some(user) => user,
        None => {
            log::info!("User not found: {}", email);
            return Ok(AuthOutcome::NotFound);
        }
    };

    let valid = match verify_password(password, &user.password) {
        Ok(valid) => valid,
        Err(e) => {
            log::warn!("⚠️  Stored password for {} is not a bcrypt hash: {}", email, e);
            false
        }
    };

    if !valid {
        log::warn!("❌ Invalid credentials for {}", email);
        return Ok(AuthOutcome::InvalidCredentials);
    }

    log::info!("✅ Authenticated {}", email);
    Ok(AuthOutcome::Authenticated(UserInfo::from(&user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryUserStore;
    use crate::models::Role;
    use crate::seeds::seed_default_users;

    async fn seeded_store() -> MemoryUserStore {
        let store = MemoryUserStore::default();
        seed_default_users(&store, 4).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_get_users_returns_everything() {
        let store = seeded_store().await;

        let users = get_users(&store).await.unwrap();

        let mut emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
        emails.sort();
        assert_eq!(emails, vec!["admin@example.com", "user1@example.com"]);
    }

    #[tokio::test]
    async fn test_get_users_empty_store() {
        let store = MemoryUserStore::default();
        assert!(get_users(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_authenticate_with_seed_password() {
        let store = seeded_store().await;

        let outcome = authenticate_user(&store, "admin@example.com", "admin123").await.unwrap();

        match outcome {
            AuthOutcome::Authenticated(info) => {
                assert_eq!(info.username, "admin");
                assert_eq!(info.roles, vec!["admin".to_string()]);
            }
            other => panic!("expected Authenticated, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let store = seeded_store().await;

        let outcome = authenticate_user(&store, "user1@example.com", "admin123").await.unwrap();

        assert_eq!(outcome, AuthOutcome::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let store = seeded_store().await;

        let outcome = authenticate_user(&store, "ghost@example.com", "whatever").await.unwrap();

        assert_eq!(outcome, AuthOutcome::NotFound);
        assert!(find_user_by_email(&store, "ghost@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_plaintext_stored_password_never_authenticates() {
        let legacy = User::new("legacy", "legacy@example.com", "user123".into(), &[Role::User]);
        let store = MemoryUserStore::with_users(vec![legacy]);

        let outcome = authenticate_user(&store, "legacy@example.com", "user123").await.unwrap();

        assert_eq!(outcome, AuthOutcome::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_get_users_keeps_records_with_unknown_roles() {
        let mut editor = User::new("ed", "ed@example.com", String::new(), &[]);
        editor.roles = vec!["editor".to_string()];
        let store = MemoryUserStore::with_users(vec![editor]);
        seed_default_users(&store, 4).await.unwrap();

        let users = get_users(&store).await.unwrap();

        assert_eq!(users.len(), 3);
        let ed = users.iter().find(|u| u.email == "ed@example.com").unwrap();
        assert_eq!(ed.roles, vec!["editor".to_string()]);
        assert!(!ed.has_role(Role::Admin));
    }

    #[tokio::test]
    async fn test_missing_password_never_authenticates() {
        let document = mongodb::bson::doc! { "username": "nopass", "email": "nopass@example.com" };
        let user: User = mongodb::bson::from_document(document).unwrap();
        let store = MemoryUserStore::with_users(vec![user]);

        let outcome = authenticate_user(&store, "nopass@example.com", "").await.unwrap();

        assert_eq!(outcome, AuthOutcome::InvalidCredentials);
    }
}
