pub mod album;
pub mod music;
