//! User infrastructure: password hashing, token store, repository, service

mod password;
mod repository;
mod service;
mod token;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{SignupRequest, UserService};
pub use token::{AuthToken, InMemoryTokenRepository, TokenRepository, TokenService};
