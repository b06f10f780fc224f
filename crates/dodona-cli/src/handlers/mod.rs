mod context;

pub mod config;
pub mod dashboard;
pub mod inscriptions;
pub mod profile;
pub mod region;
pub mod regions;
pub mod summary;
pub mod validate;
pub mod vowels;

pub use context::HandlerContext;
