//! User repository trait defining the interface for member persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling.
//! Every operation names the database alias it runs against, so a single
//! repository can serve several databases.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations own the storage concerns: the unique index on `email`,
/// transaction isolation, and mapping their own failures into
/// [`DomainError`]. A duplicate email must surface as
/// [`DomainError::UniqueViolation`] and an unconfigured alias as
/// [`DomainError::UnknownDatabase`].
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use att_core::repositories::UserRepository;
/// use att_core::domain::entities::user::User;
/// use att_core::errors::DomainError;
///
/// struct ReadOnlyRepository;
///
/// #[async_trait]
/// impl UserRepository for ReadOnlyRepository {
///     async fn find_by_id(&self, _id: Uuid, _using: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///     async fn find_by_email(&self, _email: &str, _using: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///     async fn exists_by_email(&self, _email: &str, _using: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///     async fn create(&self, _user: User, _using: &str) -> Result<User, DomainError> {
///         Err(DomainError::Storage { message: "read-only".to_string() })
///     }
///     async fn update(&self, _user: User, _using: &str) -> Result<User, DomainError> {
///         Err(DomainError::Storage { message: "read-only".to_string() })
///     }
///     async fn delete(&self, _id: Uuid, _using: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///     async fn count_by_admin(&self, _is_admin: Option<bool>, _using: &str) -> Result<u64, DomainError> {
///         Ok(0)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid, using: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their normalized email
    ///
    /// The lookup is an exact match; callers normalize before asking.
    ///
    /// # Example
    /// ```no_run
    /// # use att_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_email("traveler@abletotrip.com", "default").await? {
    ///     Some(user) => println!("User found: {}", user.id),
    ///     None => println!("User not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str, using: &str) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given normalized email
    async fn exists_by_email(&self, email: &str, using: &str) -> Result<bool, DomainError>;

    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::UniqueViolation)` - The email is already taken
    /// * `Err(DomainError)` - Any other storage failure
    async fn create(&self, user: User, using: &str) -> Result<User, DomainError>;

    /// Persist every field of an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No user with this ID
    /// * `Err(DomainError::UniqueViolation)` - The new email is already taken
    async fn update(&self, user: User, using: &str) -> Result<User, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid, using: &str) -> Result<bool, DomainError>;

    /// Count users, optionally filtered by the admin flag
    ///
    /// # Example
    /// ```no_run
    /// # use att_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let total = repo.count_by_admin(None, "default").await?;
    /// let admins = repo.count_by_admin(Some(true), "default").await?;
    /// println!("{} members, {} admins", total, admins);
    /// # Ok(())
    /// # }
    /// ```
    async fn count_by_admin(&self, is_admin: Option<bool>, using: &str) -> Result<u64, DomainError>;
}
