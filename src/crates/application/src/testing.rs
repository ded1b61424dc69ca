use async_trait::async_trait;
use domain::album::{Album, AlbumError, AlbumRepository};
use domain::music::{Music, MusicError, MusicRepository, NewMusic};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Vec-backed music table that counts every repository call.
pub struct FakeMusicRepository {
    rows: Mutex<Vec<Music>>,
    calls: AtomicUsize,
    failure: Option<String>,
}

impl FakeMusicRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), MusicError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(MusicError::DbErr(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MusicRepository for FakeMusicRepository {
    async fn create(&self, music: NewMusic) -> Result<Music, MusicError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        let music = music.into_music(id);
        rows.push(music.clone());
        Ok(music)
    }

    async fn update(&self, music: Music) -> Result<(), MusicError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|row| row.id == music.id) {
            Some(row) => {
                *row = music;
                Ok(())
            }
            None => Err(MusicError::NotFound(music.id)),
        }
    }

    async fn list_all(&self) -> Result<Vec<Music>, MusicError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().clone())
    }
}

pub struct FakeAlbumRepository {
    albums: Mutex<Vec<Album>>,
}

impl FakeAlbumRepository {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: Mutex::new(albums),
        }
    }
}

#[async_trait]
impl AlbumRepository for FakeAlbumRepository {
    async fn list(&self) -> Result<Vec<Album>, AlbumError> {
        Ok(self.albums.lock().unwrap().clone())
    }

    async fn append(&self, album: Album) -> Result<Album, AlbumError> {
        self.albums.lock().unwrap().push(album.clone());
        Ok(album)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Album>, AlbumError> {
        Ok(self
            .albums
            .lock()
            .unwrap()
            .iter()
            .find(|album| album.id == id)
            .cloned())
    }
}
