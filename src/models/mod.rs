pub mod item;
pub mod outcome;
pub mod query;
pub mod shape;
