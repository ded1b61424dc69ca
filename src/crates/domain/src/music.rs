use thiserror::Error;

pub const MUSIC_ID_FIELD: &str = "music_id";
pub const MUSIC_TITLE_FIELD: &str = "music_title";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MusicError {
    #[error("You are missing {0} parameter")]
    MissingParameter(&'static str),
    #[error("music with id {0} not found")]
    NotFound(i32),
    #[error("database error: {0}")]
    DbErr(String),
}

/// Outcome of checking the required fields of a music write.
///
/// `music_id` is checked before `music_title`, so a request missing both
/// reports `MissingMusicId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicValidation {
    Ok,
    MissingMusicId,
    MissingMusicTitle,
}

impl MusicValidation {
    pub fn check(music_id: &str, music_title: &str) -> Self {
        if music_id.trim().is_empty() {
            Self::MissingMusicId
        } else if music_title.trim().is_empty() {
            Self::MissingMusicTitle
        } else {
            Self::Ok
        }
    }

    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::Ok => None,
            Self::MissingMusicId => Some(MUSIC_ID_FIELD),
            Self::MissingMusicTitle => Some(MUSIC_TITLE_FIELD),
        }
    }

    pub fn into_result(self) -> Result<(), MusicError> {
        match self.missing_field() {
            None => Ok(()),
            Some(field) => Err(MusicError::MissingParameter(field)),
        }
    }
}

/// A music row that has not been stored yet. Only constructible with both
/// required fields present.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMusic {
    music_id: String,
    music_title: String,
}

impl NewMusic {
    pub fn new(music_id: String, music_title: String) -> Result<Self, MusicError> {
        MusicValidation::check(&music_id, &music_title).into_result()?;
        Ok(Self {
            music_id,
            music_title,
        })
    }

    pub fn music_id(&self) -> &str {
        &self.music_id
    }

    pub fn music_title(&self) -> &str {
        &self.music_title
    }

    pub fn into_music(self, id: i32) -> Music {
        Music {
            id,
            music_id: self.music_id,
            music_title: self.music_title,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Music {
    pub id: i32,
    pub music_id: String,
    pub music_title: String,
}

impl Music {
    pub fn validate(&self) -> Result<(), MusicError> {
        MusicValidation::check(&self.music_id, &self.music_title).into_result()
    }
}

#[async_trait::async_trait]
pub trait MusicRepository: Send + Sync {
    /// Inserts a row and returns it with the storage-assigned id.
    async fn create(&self, music: NewMusic) -> Result<Music, MusicError>;

    /// Overwrites `music_id` and `music_title` of the row with `music.id`.
    /// Fails with `NotFound` when no row matched.
    async fn update(&self, music: Music) -> Result<(), MusicError>;

    /// All rows in storage order.
    async fn list_all(&self) -> Result<Vec<Music>, MusicError>;
}
