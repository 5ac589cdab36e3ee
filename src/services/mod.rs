pub mod color_classifier;
pub mod query_gate;
pub mod search_client;
pub mod session;
