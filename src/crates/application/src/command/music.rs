use crate::error::AppError;
use domain::music::{Music, MusicError, MusicRepository, NewMusic};
use log::{info, warn};
use std::sync::Arc;

#[derive(Debug)]
pub struct CreateMusicCmd {
    pub music_id: String,
    pub music_title: String,
}

#[derive(Debug)]
pub struct UpdateMusicCmd {
    pub id: i32,
    pub music_id: String,
    pub music_title: String,
}

#[derive(Clone)]
pub struct MusicService {
    music_repository: Arc<dyn MusicRepository>,
}

impl MusicService {
    pub fn new(music_repository: Arc<dyn MusicRepository>) -> Self {
        Self { music_repository }
    }

    /// Validates the command and inserts a new row. Nothing reaches the
    /// repository when a required field is missing.
    pub async fn create_music(&self, cmd: CreateMusicCmd) -> Result<Music, AppError> {
        let new_music = NewMusic::new(cmd.music_id, cmd.music_title).inspect_err(|e| {
            warn!("Rejected music insert: {}", e);
        })?;

        info!(
            "Inserting new music with ID: {} and name: {}",
            new_music.music_id(),
            new_music.music_title()
        );
        let music = self.music_repository.create(new_music).await?;
        info!("Music inserted with id {}", music.id);
        Ok(music)
    }

    pub async fn update_music(&self, cmd: UpdateMusicCmd) -> Result<Music, AppError> {
        let music = Music {
            id: cmd.id,
            music_id: cmd.music_id,
            music_title: cmd.music_title,
        };
        music.validate().inspect_err(|e| {
            warn!("Rejected music update for id {}: {}", music.id, e);
        })?;

        info!(
            "Updating music {} with ID: {} and name: {}",
            music.id, music.music_id, music.music_title
        );
        match self.music_repository.update(music.clone()).await {
            Ok(()) => Ok(music),
            Err(MusicError::NotFound(id)) => {
                warn!("Music {} does not exist, nothing updated", id);
                Err(MusicError::NotFound(id).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeMusicRepository;
    use domain::music::{MUSIC_ID_FIELD, MUSIC_TITLE_FIELD};
    use std::collections::HashSet;

    fn create_cmd(music_id: &str, music_title: &str) -> CreateMusicCmd {
        CreateMusicCmd {
            music_id: music_id.to_string(),
            music_title: music_title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_music_returns_positive_id() {
        let repo = Arc::new(FakeMusicRepository::new());
        let service = MusicService::new(repo.clone());

        let music = service.create_music(create_cmd("m1", "Song")).await.unwrap();
        assert!(music.id > 0);
        assert_eq!(music.music_id, "m1");
        assert_eq!(music.music_title, "Song");

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows, vec![music]);
    }

    #[tokio::test]
    async fn test_create_music_short_circuits_on_missing_field() {
        let repo = Arc::new(FakeMusicRepository::new());
        let service = MusicService::new(repo.clone());

        let err = service.create_music(create_cmd("", "Song")).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::MusicError(MusicError::MissingParameter(MUSIC_ID_FIELD))
        ));

        let err = service.create_music(create_cmd("m1", "")).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::MusicError(MusicError::MissingParameter(MUSIC_TITLE_FIELD))
        ));

        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_update_music_short_circuits_on_missing_field() {
        let repo = Arc::new(FakeMusicRepository::new());
        let service = MusicService::new(repo.clone());

        let err = service
            .update_music(UpdateMusicCmd {
                id: 1,
                music_id: "m1".to_string(),
                music_title: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "You are missing music_title parameter");
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_update_music_overwrites_fields() {
        let repo = Arc::new(FakeMusicRepository::new());
        let service = MusicService::new(repo.clone());
        let created = service.create_music(create_cmd("m1", "Song")).await.unwrap();

        let updated = service
            .update_music(UpdateMusicCmd {
                id: created.id,
                music_id: "m2".to_string(),
                music_title: "Other Song".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].music_id, "m2");
        assert_eq!(rows[0].music_title, "Other Song");
    }

    #[tokio::test]
    async fn test_update_missing_row_reports_not_found() {
        let repo = Arc::new(FakeMusicRepository::new());
        let service = MusicService::new(repo);

        let err = service
            .update_music(UpdateMusicCmd {
                id: 42,
                music_id: "m1".to_string(),
                music_title: "Song".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MusicError(MusicError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_repository_failure_is_returned_not_panicked() {
        let repo = Arc::new(FakeMusicRepository::failing("connection refused"));
        let service = MusicService::new(repo);

        let err = service.create_music(create_cmd("m1", "Song")).await.unwrap_err();
        assert!(matches!(err, AppError::MusicError(MusicError::DbErr(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_are_all_stored_once() {
        let repo = Arc::new(FakeMusicRepository::new());
        let service = MusicService::new(repo.clone());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create_music(create_cmd(&format!("m{}", i), "Song"))
                        .await
                })
            })
            .collect();
        for result in futures::future::join_all(handles).await {
            result.unwrap().unwrap();
        }

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 50);
        let music_ids: HashSet<_> = rows.iter().map(|m| m.music_id.clone()).collect();
        assert_eq!(music_ids.len(), 50);
        let ids: HashSet<_> = rows.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 50);
    }
}
