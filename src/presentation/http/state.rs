// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Directory served under `/uploads`.
    pub upload_dir: PathBuf,
    /// Upper bound for request bodies, uploads included.
    pub max_upload_bytes: usize,
}
