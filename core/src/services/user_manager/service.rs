//! Account manager implementation

use std::sync::Arc;

use att_shared::email::{mask_email, normalize_email};
use att_shared::DEFAULT_DB_ALIAS;
use rand::seq::SliceRandom;
use tracing::{debug, error, info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::Email;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;

/// Length of passwords produced by [`UserManager::make_random_password`]
pub const DEFAULT_RANDOM_PASSWORD_LENGTH: usize = 10;

/// Alphabet for random passwords, without look-alike characters (i, l, o, I, O, 0, 1)
pub const RANDOM_PASSWORD_ALLOWED_CHARS: &str =
    "abcdefghjkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Factory and lookup service for member accounts
///
/// Holds no state besides its collaborators and the database alias it
/// writes to, so cloning is cheap.
pub struct UserManager<R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    /// Repository for user persistence
    repository: Arc<R>,
    /// One-way password hasher
    hasher: Arc<H>,
    /// Database alias every operation runs against
    using: String,
}

impl<R, H> Clone for UserManager<R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: Arc::clone(&self.hasher),
            using: self.using.clone(),
        }
    }
}

impl<R, H> UserManager<R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    /// Create a manager bound to the `default` database
    ///
    /// # Arguments
    ///
    /// * `repository` - Repository for user data persistence
    /// * `hasher` - Password hashing collaborator
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self {
            repository,
            hasher,
            using: DEFAULT_DB_ALIAS.to_string(),
        }
    }

    /// Copy of this manager bound to another database alias
    pub fn db_manager(&self, alias: impl Into<String>) -> Self {
        Self {
            using: alias.into(),
            ..self.clone()
        }
    }

    /// Database alias this manager writes to
    pub fn db(&self) -> &str {
        &self.using
    }

    /// Normalize an email address the way stored emails are normalized
    pub fn normalize_email(email: &str) -> String {
        normalize_email(email)
    }

    /// Generate a random password of `length` characters from `allowed_chars`
    ///
    /// Fails rather than return an empty password when either the length or
    /// the alphabet is empty.
    pub fn make_random_password(length: usize, allowed_chars: &str) -> DomainResult<String> {
        let alphabet: Vec<char> = allowed_chars.chars().collect();
        if alphabet.is_empty() {
            return Err(ValidationError::required("allowed_chars").into());
        }
        if length == 0 {
            return Err(ValidationError::InvalidFormat {
                field: "length".to_string(),
            }
            .into());
        }

        let mut rng = rand::thread_rng();
        Ok((0..length)
            .filter_map(|_| alphabet.choose(&mut rng).copied())
            .collect())
    }

    /// Create and persist a regular member
    ///
    /// The email is normalized first and must not be empty afterwards. A
    /// missing password stores an unusable secret.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The persisted member, active and not admin
    /// * `Err(DomainError::Validation)` - Empty or overlong email
    /// * `Err(DomainError)` - Hashing or storage failure, unchanged
    pub async fn create_user(&self, email: &str, password: Option<&str>) -> DomainResult<User> {
        let email = Email::parse(email)?;
        let masked = mask_email(email.as_str());

        let mut user = User::new(email);
        user.set_password(&*self.hasher, password)?;

        let user = self
            .repository
            .create(user, &self.using)
            .await
            .map_err(|e| {
                match &e {
                    DomainError::UniqueViolation { .. } => {
                        warn!(email = %masked, db = %self.using, "email already registered")
                    }
                    _ => error!(email = %masked, db = %self.using, error = %e, "failed to create user"),
                }
                e
            })?;

        info!(
            user_id = %user.id,
            email = %masked,
            db = %self.using,
            usable_password = user.has_usable_password(),
            "user created"
        );
        Ok(user)
    }

    /// Create a member and promote it to admin
    ///
    /// Two writes: the insert done by [`create_user`](Self::create_user),
    /// then an update carrying `is_admin = true`.
    pub async fn create_superuser(&self, email: &str, password: &str) -> DomainResult<User> {
        let mut user = self.create_user(email, Some(password)).await?;
        user.is_admin = true;

        let user = self.repository.update(user, &self.using).await.map_err(|e| {
            error!(db = %self.using, error = %e, "failed to promote user to admin");
            e
        })?;

        info!(user_id = %user.id, db = %self.using, "superuser created");
        Ok(user)
    }

    /// Look a member up by email
    pub async fn get_by_natural_key(&self, email: &str) -> DomainResult<User> {
        let email = normalize_email(email);
        debug!(email = %mask_email(&email), db = %self.using, "looking up user by email");

        self.repository
            .find_by_email(&email, &self.using)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })
    }

    /// Check credentials
    ///
    /// Returns the member only when it exists, the password matches, and the
    /// account is active. A successful check records the login time.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<Option<User>> {
        let email = normalize_email(email);
        let Some(mut user) = self.repository.find_by_email(&email, &self.using).await? else {
            // Hash once anyway so unknown emails take as long as wrong passwords
            self.hasher.hash(password)?;
            debug!(email = %mask_email(&email), "authentication failed: unknown email");
            return Ok(None);
        };

        if !user.check_password(&*self.hasher, password)? {
            debug!(user_id = %user.id, "authentication failed: wrong password");
            return Ok(None);
        }
        if !user.is_active {
            debug!(user_id = %user.id, "authentication failed: inactive user");
            return Ok(None);
        }

        user.record_login();
        let user = self.repository.update(user, &self.using).await?;
        Ok(Some(user))
    }

    /// Replace a member's password; `None` makes it unusable
    pub async fn change_password(&self, email: &str, password: Option<&str>) -> DomainResult<User> {
        let mut user = self.get_by_natural_key(email).await?;
        user.set_password(&*self.hasher, password)?;

        let user = self.repository.update(user, &self.using).await?;
        info!(user_id = %user.id, db = %self.using, "password changed");
        Ok(user)
    }
}
