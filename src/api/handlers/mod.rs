pub mod characters;
pub mod root;
