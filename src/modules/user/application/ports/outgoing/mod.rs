mod user_query;
mod user_repository;

pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError, UserResult,
};
