//! File Asset Store - 文件系统媒体读取实现
//!
//! 实现 AssetStorePort trait
//!
//! 路径: `{base_dir}/{video_subdir}/{filename}`，文件名只允许单个普通路径段，
//! 规范化后的路径必须仍位于媒体目录内。

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::application::ports::{Asset, AssetError, AssetStorePort};

/// 本组件自带的扩展名 → Content-Type 表
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        // Video
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("ogv") => "video/ogg",

        // Audio
        Some("mp3") => "audio/mp3",
        Some("m4a") => "audio/mp4",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",

        // Subtitles / transcripts
        Some("vtt") => "text/vtt",
        Some("srt") => "application/x-subrip",

        _ => "application/octet-stream",
    }
}

/// 文件系统媒体存储
pub struct FileAssetStore {
    /// 媒体目录（base_dir + video_subdir）
    asset_dir: PathBuf,
}

impl FileAssetStore {
    pub fn new(base_dir: impl AsRef<Path>, video_subdir: impl AsRef<Path>) -> Self {
        Self {
            asset_dir: base_dir.as_ref().join(video_subdir),
        }
    }

    /// 获取媒体目录
    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// 解析文件名为磁盘路径，拒绝任何目录穿越
    async fn resolve(&self, filename: &str) -> Result<PathBuf, AssetError> {
        let mut components = Path::new(filename).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal || filename.contains(|c: char| c == '/' || c == '\\') {
            tracing::warn!(filename = %filename, "Path traversal attempt blocked");
            return Err(AssetError::Forbidden(filename.to_string()));
        }

        let path = self.asset_dir.join(filename);
        if !path.exists() {
            return Err(AssetError::NotFound(filename.to_string()));
        }

        let dir_canonical = fs::canonicalize(&self.asset_dir)
            .await
            .map_err(|e| AssetError::IoError(e.to_string()))?;
        let path_canonical = fs::canonicalize(&path)
            .await
            .map_err(|e| AssetError::IoError(e.to_string()))?;

        // 符号链接可能指向目录外
        if !path_canonical.starts_with(&dir_canonical) {
            tracing::warn!(
                filename = %filename,
                resolved = %path_canonical.display(),
                "Path traversal attempt blocked"
            );
            return Err(AssetError::Forbidden(filename.to_string()));
        }

        if !path_canonical.is_file() {
            return Err(AssetError::NotFound(filename.to_string()));
        }

        Ok(path_canonical)
    }
}

#[async_trait]
impl AssetStorePort for FileAssetStore {
    async fn read(&self, filename: &str) -> Result<Asset, AssetError> {
        let path = self.resolve(filename).await?;

        let data = fs::read(&path)
            .await
            .map_err(|e| AssetError::IoError(e.to_string()))?;

        Ok(Asset {
            data,
            content_type: content_type_for(&path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileAssetStore) {
        let temp = TempDir::new().unwrap();
        let video_dir = temp.path().join("chat_app");
        std::fs::create_dir_all(&video_dir).unwrap();
        std::fs::write(video_dir.join("lecture.mp4"), b"\x00\x00\x00\x18ftypmp42").unwrap();
        std::fs::write(video_dir.join("lecture.mp3"), b"ID3").unwrap();
        std::fs::write(temp.path().join("secret.txt"), b"top secret").unwrap();

        let store = FileAssetStore::new(temp.path(), "chat_app");
        (temp, store)
    }

    #[test]
    fn test_content_type_table() {
        assert_eq!(content_type_for(Path::new("a.mp4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("a.MP4")), "video/mp4");
        assert_eq!(content_type_for(Path::new("a.mp3")), "audio/mp3");
        assert_eq!(content_type_for(Path::new("a.webm")), "video/webm");
        assert_eq!(content_type_for(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(content_type_for(Path::new("noext")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_read_existing_file() {
        let (_temp, store) = setup();

        let asset = store.read("lecture.mp4").await.unwrap();
        assert_eq!(asset.data, b"\x00\x00\x00\x18ftypmp42");
        assert_eq!(asset.content_type, "video/mp4");

        let asset = store.read("lecture.mp3").await.unwrap();
        assert_eq!(asset.content_type, "audio/mp3");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let (_temp, store) = setup();
        let err = store.read("missing.mp4").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_directory_is_not_found() {
        let (temp, store) = setup();
        std::fs::create_dir(temp.path().join("chat_app").join("clips")).unwrap();

        let err = store.read("clips").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_traversal_is_rejected() {
        let (_temp, store) = setup();

        for name in ["../secret.txt", "..", "chat_app/../../secret.txt", "/etc/passwd", "..\\secret.txt", ""] {
            let err = store.read(name).await.unwrap_err();
            assert!(
                matches!(err, AssetError::Forbidden(_)),
                "expected Forbidden for {name:?}, got {err:?}"
            );
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_escape_is_rejected() {
        let (temp, store) = setup();
        std::os::unix::fs::symlink(
            temp.path().join("secret.txt"),
            temp.path().join("chat_app").join("escape.mp4"),
        )
        .unwrap();

        let err = store.read("escape.mp4").await.unwrap_err();
        assert!(matches!(err, AssetError::Forbidden(_)));
    }
}
