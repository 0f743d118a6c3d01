//! API middleware.

mod access;

pub use access::{access_policy, allow_check_middleware, AccessPolicy, AllowAll, OriginAllowList};
