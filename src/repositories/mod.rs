pub mod activity_result_repository;
pub mod user_repository;

pub use activity_result_repository::{ActivityResultRepository, MongoActivityResultRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
