use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::prelude::Result;

/// Writes an upload into the scratch directory under a server-generated
/// key. The client filename never reaches the filesystem, so colliding or
/// traversal-crafted names cannot do harm.
pub async fn store(upload_dir: &Path, data: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(upload_dir).await?;
    let path = upload_dir.join(format!("{}.pdf", Uuid::new_v4()));
    fs::write(&path, data).await?;
    Ok(path)
}

pub async fn read(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path).await?)
}

/// Best-effort removal; failure is logged and swallowed so it can never
/// mask the analysis outcome.
pub async fn cleanup(path: &Path) {
    if let Err(err) = fs::remove_file(path).await {
        tracing::warn!("failed to remove upload {}: {}", path.display(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn store_read_cleanup_roundtrip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = store(dir.path(), b"%PDF-1.5 fake").await?;
        assert!(path.exists());
        assert_eq!(read(&path).await?, b"%PDF-1.5 fake");
        cleanup(&path).await;
        assert!(!path.exists());
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn store_generates_distinct_keys() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let first = store(dir.path(), b"a").await?;
        let second = store(dir.path(), b"a").await?;
        assert_ne!(first, second);
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn store_creates_missing_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("scratch");
        let path = store(&nested, b"a").await?;
        assert!(path.starts_with(&nested));
        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn cleanup_ignores_missing_file() {
        cleanup(Path::new("/nonexistent/upload.pdf")).await;
    }
}
