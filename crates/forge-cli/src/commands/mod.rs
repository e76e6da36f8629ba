pub mod automation;
pub mod config;
pub mod dispatch;
pub mod idea;
pub mod problem;
pub mod report;
pub mod risk;
pub mod schema;
pub mod shared;
pub mod store;
pub mod timeline;
