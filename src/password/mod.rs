pub mod bcrypt;
pub mod errors;

pub use bcrypt::PasswordHasher;
pub use bcrypt::HASH_COST;
pub use errors::PasswordError;
