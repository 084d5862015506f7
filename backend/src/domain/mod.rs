pub mod format;
pub mod models;

pub use format::MatchFormat;
pub use models::*;
