use crate::domain::error::ConvertError;
use anyhow::Result;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub async fn read_bookmarks_html(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).await?;
    Ok(raw)
}

/// Writes `contents` to a file that must not exist yet.
pub async fn write_new_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(ConvertError::OutputAlreadyExists(path.to_path_buf()).into());
        }
        Err(e) => return Err(e.into()),
    };

    file.write_all(contents.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
