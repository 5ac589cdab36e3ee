pub mod card;
pub mod terminal;
