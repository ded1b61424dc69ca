use async_trait::async_trait;
use domain::album::{Album, AlbumError, AlbumRepository};
use parking_lot::RwLock;
use std::sync::Arc;

/// Process-wide album list. Reads share the lock, appends take it
/// exclusively; the guard never lives across an await point.
#[derive(Clone, Default)]
pub struct InMemoryAlbumRepository {
    store: Arc<RwLock<Vec<Album>>>,
}

impl InMemoryAlbumRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            store: Arc::new(RwLock::new(albums)),
        }
    }

    /// The three albums the service starts with.
    pub fn seeded() -> Self {
        Self::with_albums(vec![
            album("1", "Blue Train", "John Coltrane", 56.99),
            album("2", "Jeru", "Gerry Mulligan", 17.99),
            album(
                "3",
                "Sarah Vaughan and Clifford Brown",
                "Sarah Vaughan",
                39.99,
            ),
        ])
    }
}

fn album(id: &str, title: &str, artist: &str, price: f64) -> Album {
    Album {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        price,
    }
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumRepository {
    async fn list(&self) -> Result<Vec<Album>, AlbumError> {
        Ok(self.store.read().clone())
    }

    async fn append(&self, album: Album) -> Result<Album, AlbumError> {
        self.store.write().push(album.clone());
        Ok(album)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Album>, AlbumError> {
        Ok(self.store.read().iter().find(|a| a.id == id).cloned())
    }
}
