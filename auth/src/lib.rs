//! Authentication building blocks for the notes service.
//!
//! Two independent pieces:
//! - Password hashing (Argon2id, PHC string format)
//! - Signed session tokens (JWT, HS256, mandatory expiry)
//!
//! The service wires these together; nothing in here touches storage or HTTP.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("hunter2!").unwrap();
//! assert!(hasher.verify("hunter2!", &hash).unwrap());
//! assert!(!hasher.verify("hunter3!", &hash).unwrap());
//! ```
//!
//! ## Session tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", 24);
//! let token = tokens.issue("user123", "alice").unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
