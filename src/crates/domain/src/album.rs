use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlbumError {
    #[error("album not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

// 专辑集合，按插入顺序保存，不做去重
#[async_trait::async_trait]
pub trait AlbumRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Album>, AlbumError>;

    async fn append(&self, album: Album) -> Result<Album, AlbumError>;

    /// First album with a matching id, in insertion order.
    async fn find_by_id(&self, id: &str) -> Result<Option<Album>, AlbumError>;
}
