//! Credential strategies applied to outbound requests.
//!
//! A client holds exactly one [`Credentials`] value for its whole lifetime. The variant decides
//! how each request is authenticated: nothing at all, a user key + secret pair in the body, a
//! bearer token header, or a short-lived RS256 JWT signed with the caller's private key.

pub mod credentials;
pub mod jwt;
pub mod secret;

pub use credentials::*;
pub use jwt::*;
pub use secret::*;
