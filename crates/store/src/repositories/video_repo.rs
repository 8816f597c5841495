//! Repository for the uploaded-videos document.

use academy_core::video::Video;

use crate::error::StoreResult;
use crate::file_store::FileStore;
use crate::keys::VIDEOS_KEY;

use super::document;

/// Provides load/save/append/remove over the uploaded video lectures.
pub struct VideoRepo;

impl VideoRepo {
    /// Load all uploaded videos. Malformed documents fail open to empty.
    pub async fn load(store: &FileStore) -> StoreResult<Vec<Video>> {
        document::load(store, VIDEOS_KEY).await
    }

    /// Rewrite the uploaded-videos document in full.
    pub async fn save(store: &FileStore, videos: &[Video]) -> StoreResult<()> {
        document::save(store, VIDEOS_KEY, videos).await
    }

    /// Append a newly uploaded video and persist.
    pub async fn append(store: &FileStore, video: Video) -> StoreResult<Video> {
        let mut videos = Self::load(store).await?;
        videos.push(video.clone());
        Self::save(store, &videos).await?;
        Ok(video)
    }

    /// Remove the video with the given id, if present.
    ///
    /// Returns whether a video was actually removed.
    pub async fn remove(store: &FileStore, id: &str) -> StoreResult<bool> {
        let videos = Self::load(store).await?;
        let before = videos.len();

        let remaining: Vec<Video> = videos.into_iter().filter(|v| v.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }

        Self::save(store, &remaining).await?;
        Ok(true)
    }

    /// Delete the whole uploaded-videos document.
    pub async fn clear(store: &FileStore) -> StoreResult<()> {
        store.remove(VIDEOS_KEY).await
    }

    /// Number of uploaded videos, for the admin diagnostics endpoint.
    pub async fn count(store: &FileStore) -> StoreResult<usize> {
        Ok(Self::load(store).await?.len())
    }
}
