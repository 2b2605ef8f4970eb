//! Progress display for in-flight queries.

pub mod reporter;
