pub type UserId = i64;

/// Identity attached to the request extensions by the authentication middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub UserId);
