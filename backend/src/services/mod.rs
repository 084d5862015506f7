pub mod pools;
pub mod ratings;
pub mod schedule;
