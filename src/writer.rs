use crate::error::AppError;
use crate::repository::RULES_FILE_NAME;
use log::info;
use std::io;
use std::path::{Path, PathBuf};

/// Writes `content` to `<dir>/.cursorrules`, replacing any existing file.
///
/// Write access is whatever the OS grants the current user; a denied write
/// surfaces as `AppError::PermissionDenied`.
pub async fn save_local_file(content: &str, dir: &Path) -> Result<PathBuf, AppError> {
    let metadata = match tokio::fs::metadata(dir).await {
        Ok(m) => m,
        Err(e) => return Err(classify(e, dir)),
    };
    if !metadata.is_dir() {
        return Err(AppError::NotADirectory(dir.to_path_buf()));
    }

    let path = dir.join(RULES_FILE_NAME);
    tokio::fs::write(&path, content.as_bytes())
        .await
        .map_err(|e| classify(e, dir))?;

    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

fn classify(err: io::Error, dir: &Path) -> AppError {
    match err.kind() {
        io::ErrorKind::NotFound => AppError::DirectoryMissing(dir.to_path_buf()),
        io::ErrorKind::PermissionDenied => AppError::PermissionDenied(dir.to_path_buf()),
        _ => AppError::Io(err),
    }
}
