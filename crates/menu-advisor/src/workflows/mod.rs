pub mod menu;
pub mod recommendation;
