use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Serialize, de::DeserializeOwned};
use tokio::{fs, sync::Mutex};
use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::AnalysisHistory,
    profile::entities::User,
    storage::{policies::prepend_bounded, ports::LocalStore},
};

const USER_FILE: &str = "user.json";
const HISTORY_FILE: &str = "history.json";

/// Keeps the current user and the analysis history as two JSON documents
/// under a data directory.
///
/// Writes go through a sibling temp file and a rename so a crash never leaves
/// a half-written record behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    async fn read<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.path(file);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };

        serde_json::from_str(&content)
            .inspect_err(|e| warn!("Ignoring unreadable {}: {}", path.display(), e))
            .ok()
    }

    async fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(value).map_err(|e| {
            error!("Failed to serialize {}: {}", file, e);
            CoreError::StorageError(format!("failed to serialize {}: {}", file, e))
        })?;

        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            error!("Failed to create {}: {}", self.data_dir.display(), e);
            CoreError::StorageError(format!("failed to create data directory: {}", e))
        })?;

        let path = self.path(file);
        let tmp = self.path(&format!("{}.tmp", file));
        fs::write(&tmp, json).await.map_err(|e| {
            error!("Failed to write {}: {}", tmp.display(), e);
            CoreError::StorageError(format!("failed to write {}: {}", file, e))
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            error!("Failed to replace {}: {}", path.display(), e);
            CoreError::StorageError(format!("failed to write {}: {}", file, e))
        })
    }

    async fn remove(&self, file: &str) -> Result<(), CoreError> {
        let path = self.path(file);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Failed to delete {}: {}", path.display(), e);
                Err(CoreError::StorageError(format!(
                    "failed to delete {}: {}",
                    file, e
                )))
            }
        }
    }
}

impl LocalStore for JsonFileStore {
    async fn load_user(&self) -> Option<User> {
        let _guard = self.lock.lock().await;
        self.read(USER_FILE).await
    }

    async fn save_user(&self, user: User) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        self.write(USER_FILE, &user).await
    }

    async fn clear_user(&self) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        self.remove(USER_FILE).await
    }

    async fn load_history(&self) -> Vec<AnalysisHistory> {
        let _guard = self.lock.lock().await;
        self.read(HISTORY_FILE).await.unwrap_or_default()
    }

    async fn append_history(
        &self,
        entry: AnalysisHistory,
    ) -> Result<Vec<AnalysisHistory>, CoreError> {
        let _guard = self.lock.lock().await;
        let current: Vec<AnalysisHistory> = self.read(HISTORY_FILE).await.unwrap_or_default();
        let history = prepend_bounded(current, entry);
        self.write(HISTORY_FILE, &history).await?;

        Ok(history)
    }

    async fn clear_history(&self) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        self.remove(HISTORY_FILE).await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{
        profile::entities::{Gender, ProfileAnalysis},
        storage::policies::{HISTORY_LIMIT, tests::history_entry},
        food_analysis::entities::ValueRange,
    };

    fn hercules() -> User {
        User {
            email: "hercules@olimpo.gr".to_string(),
            name: "Hércules".to_string(),
            gender: Gender::Male,
            age: 35,
            weight: 110.0,
            analysis: Some(ProfileAnalysis {
                ideal_weight_range: ValueRange {
                    min: 85.0,
                    max: 95.0,
                },
                health_status: "Força de Titã".to_string(),
                hero_advice: "Menos ambrosia.".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn empty_directory_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing"));

        assert_eq!(store.load_user().await, None);
        assert!(store.load_history().await.is_empty());
    }

    #[tokio::test]
    async fn user_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));

        store.save_user(hercules()).await.unwrap();

        let reopened = JsonFileStore::new(dir.path().join("nested"));
        assert_eq!(reopened.load_user().await, Some(hercules()));
        assert!(!dir.path().join("nested").join("user.json.tmp").exists());
    }

    #[tokio::test]
    async fn clearing_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.save_user(hercules()).await.unwrap();
        store.append_history(history_entry(400.0)).await.unwrap();

        store.clear_user().await.unwrap();
        store.clear_user().await.unwrap();
        store.clear_history().await.unwrap();
        store.clear_history().await.unwrap();

        assert_eq!(store.load_user().await, None);
        assert!(store.load_history().await.is_empty());
    }

    #[tokio::test]
    async fn appended_history_is_newest_first_and_bounded() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        for n in 0..(HISTORY_LIMIT + 3) {
            store.append_history(history_entry(n as f64)).await.unwrap();
        }

        let history = store.load_history().await;
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].data.total_calories, (HISTORY_LIMIT + 2) as f64);
        assert_eq!(history[HISTORY_LIMIT - 1].data.total_calories, 3.0);
    }

    #[tokio::test]
    async fn corrupt_records_load_as_absent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(USER_FILE), "{ not json").unwrap();
        std::fs::write(dir.path().join(HISTORY_FILE), "[1, 2, 3]").unwrap();

        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.load_user().await, None);
        assert!(store.load_history().await.is_empty());

        let history = store.append_history(history_entry(120.0)).await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn unwritable_directory_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let store = JsonFileStore::new(&blocker);
        let err = store.save_user(hercules()).await.unwrap_err();

        assert!(matches!(err, CoreError::StorageError(_)));
    }
}
