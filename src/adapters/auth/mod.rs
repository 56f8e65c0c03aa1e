//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - HS256 access tokens signed with the configured key
//! - `mock` - Fixed token table for tests

mod jwt;
mod mock;

pub use jwt::{AccessTokenClaims, JwtSessionValidator};
pub use mock::MockSessionValidator;
