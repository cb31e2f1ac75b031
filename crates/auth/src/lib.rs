//! `stocklink-auth` — session authentication boundary (zero-trust).
//!
//! Every inbound request is authenticated independently: decode the session
//! token, check its validity window, and confirm the tenant is currently
//! installed. Only then does a [`Session`] exist, and only a [`Session`] can
//! reach the upstream API.
//!
//! This crate is intentionally decoupled from HTTP; the gateway's middleware
//! is a thin adapter over [`authenticate`].

pub mod claims;
pub mod session;
pub mod store;
pub mod token;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use session::{AuthError, Session, authenticate};
pub use store::{InMemorySessionStore, InstalledTenant, SessionStore};
pub use token::{TokenDecodeError, TokenDecoder};
