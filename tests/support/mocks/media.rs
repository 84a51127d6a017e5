// tests/support/mocks/media.rs
use async_trait::async_trait;
use blogpress_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::media::{MediaStore, MediaUpload},
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// 保存・削除されたファイル名を記録するメディアストア
#[derive(Default)]
pub struct RecordingMediaStore {
    saved: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
    fail_deletes: AtomicBool,
}

impl RecordingMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    /// 以降の削除を失敗させる（呼び出し自体は記録する）
    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl MediaStore for RecordingMediaStore {
    async fn save(&self, upload: MediaUpload) -> ApplicationResult<String> {
        let mut saved = self.saved.lock().unwrap();
        let extension = upload
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_string())
            .unwrap_or_else(|| "bin".into());
        let name = format!("upload-{}.{extension}", saved.len() + 1);
        saved.push(name.clone());
        Ok(name)
    }

    async fn delete(&self, file_name: &str) -> ApplicationResult<()> {
        self.deleted.lock().unwrap().push(file_name.to_string());
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure(format!(
                "disk unavailable: {file_name}"
            )));
        }
        Ok(())
    }
}
