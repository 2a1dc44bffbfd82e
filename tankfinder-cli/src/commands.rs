pub mod import;
pub mod models;
pub mod search;
pub mod serve;
pub mod stats;
