pub mod profile;
pub mod weather;
