pub mod composer;
pub mod particles;
