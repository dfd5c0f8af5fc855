//! Well-known failure codes.
//!
//! Codes are opaque strings to the combinators; callers are free to define
//! their own alongside these.

/// Default code of a business failure created without one.
pub const UNKNOWN: &str = "UNKNOWN";

/// Default code of a failure that originated from a captured error or panic.
pub const UNHANDLED: &str = "UNHANDLED";

/// The requested entity does not exist.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// The supplied entity failed validation.
pub const NOT_VALID: &str = "NOT_VALID";
