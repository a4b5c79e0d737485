pub mod anthropic;
pub mod assistant;
pub mod inference;
