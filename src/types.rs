pub mod content;
pub mod direction;
pub mod identity_key;
pub mod identity_map;
