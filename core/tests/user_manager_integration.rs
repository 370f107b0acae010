//! Integration tests for the account manager with real bcrypt hashing

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use att_core::repositories::{MockUserRepository, UserRepository};
    use att_core::services::{BcryptPasswordHasher, UserManager};
    use att_core::{AuthUser, DomainError};
    use att_shared::PasswordConfig;

    fn hasher() -> Arc<BcryptPasswordHasher> {
        // Lowest cost keeps the suite fast
        Arc::new(BcryptPasswordHasher::new(&PasswordConfig::with_cost(4)))
    }

    #[tokio::test]
    async fn test_superuser_lifecycle() {
        let repo = Arc::new(MockUserRepository::new());
        let manager = UserManager::new(Arc::clone(&repo), hasher());

        let admin = manager
            .create_superuser("Root@AbleToTrip.COM", "correct horse")
            .await
            .unwrap();

        assert_eq!(admin.email.as_str(), "Root@abletotrip.com");
        assert!(admin.password().as_encoded().starts_with("$2"));
        assert!(admin.is_staff());
        assert!(admin.has_perm("anything", None));

        let logged_in = manager
            .authenticate("Root@abletotrip.com", "correct horse")
            .await
            .unwrap()
            .expect("credentials should match");
        assert_eq!(logged_in.id, admin.id);
        assert!(logged_in.is_authenticated());
        assert!(!logged_in.is_anonymous());

        assert!(manager
            .authenticate("Root@abletotrip.com", "wrong horse")
            .await
            .unwrap()
            .is_none());

        assert_eq!(repo.count_by_admin(Some(true), "default").await.unwrap(), 1);
        assert_eq!(repo.count_by_admin(Some(false), "default").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_random_password_account() {
        let repo = Arc::new(MockUserRepository::new());
        let manager = UserManager::new(repo, hasher());

        let generated = UserManager::<MockUserRepository, BcryptPasswordHasher>::make_random_password(
            att_core::services::DEFAULT_RANDOM_PASSWORD_LENGTH,
            att_core::services::RANDOM_PASSWORD_ALLOWED_CHARS,
        )
        .unwrap();
        manager
            .create_user("guest@abletotrip.com", Some(&generated))
            .await
            .unwrap();

        assert!(manager
            .authenticate("guest@abletotrip.com", &generated)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let repo = Arc::new(MockUserRepository::with_aliases(["default", "legacy"]));
        let manager = UserManager::new(Arc::clone(&repo), hasher());
        let legacy = manager.db_manager("legacy");

        manager.create_user("same@abletotrip.com", None).await.unwrap();
        // Same address is free in another database
        legacy.create_user("same@abletotrip.com", None).await.unwrap();

        let err = legacy.create_user("same@AbleToTrip.com", None).await.unwrap_err();
        assert!(matches!(err, DomainError::UniqueViolation { .. }));

        assert_eq!(repo.users("default").await.len(), 1);
        assert_eq!(repo.users("legacy").await.len(), 1);
    }
}
