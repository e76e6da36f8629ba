mod automation;
mod idea;
mod problem;
mod risk;
mod store;
mod timeline;

pub use automation::AutomationCommands;
pub use idea::IdeaCommands;
pub use problem::ProblemCommands;
pub use risk::RiskCommands;
pub use store::StoreCommands;
pub use timeline::TimelineCommands;
