pub mod open;
pub mod version;
