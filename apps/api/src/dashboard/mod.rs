// Dashboard statistics derived from fixture collections.

pub mod handlers;
pub mod stats;
pub mod summary;
