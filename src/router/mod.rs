pub mod page;
pub mod planner;
pub mod public;
