use std::path::{Path, PathBuf};

/// Resolve a request path against the workspace. Absolute paths replace the
/// base; nothing here restricts access to the workspace. `.` and `..` are
/// left for the OS to resolve, so `missing/../a.txt` stays missing.
pub fn resolve_path(base_path: &Path, user_path: &str) -> PathBuf {
    base_path.join(user_path)
}

pub async fn ensure_directory(path: &Path) -> std::io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path).await
}
