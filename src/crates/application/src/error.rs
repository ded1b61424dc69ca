use domain::album::AlbumError;
use domain::music::MusicError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    MusicError(#[from] MusicError),
    #[error(transparent)]
    AlbumError(#[from] AlbumError),
}
