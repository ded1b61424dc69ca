pub mod album;
pub mod get_music;
