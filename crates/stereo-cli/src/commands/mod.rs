pub mod assign;
pub mod reorder;
pub mod verify;
