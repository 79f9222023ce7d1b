pub mod claims;
pub mod errors;
pub mod service;

pub use claims::Claims;
pub use claims::Role;
pub use claims::TOKEN_TTL_DAYS;
pub use errors::TokenError;
pub use service::TokenService;
