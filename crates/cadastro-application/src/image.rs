//! Profile image transcoding.
//!
//! A picked image file becomes a textual data-URI so it can live inside the
//! stored record. This is the one asynchronous side effect in the submission
//! path: the form must await the conversion before running validation, since
//! the schema checks the resulting field.

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};

use cadastro_core::error::{CadastroError, Result};
use cadastro_core::user::UserDraft;

/// Reads an image file and encodes it as a `data:` URI.
///
/// The MIME type is guessed from the file extension, falling back to
/// `application/octet-stream`.
pub async fn encode_profile_image(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        CadastroError::io(format!("Failed to read image '{}': {}", path.display(), e))
    })?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(format!(
        "data:{};base64,{}",
        mime.essence_str(),
        BASE64_STANDARD.encode(&bytes)
    ))
}

/// Encodes the file at `path` and places the result in the draft's
/// profile-image field.
///
/// Awaiting this before validation gives the ordering the submit path needs.
pub async fn attach_profile_image(draft: &mut UserDraft, path: impl AsRef<Path>) -> Result<()> {
    draft.profile_image = encode_profile_image(path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_encode_produces_jpeg_data_uri() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("avatar.jpg");
        let bytes: Vec<u8> = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        std::fs::write(&path, &bytes).unwrap();

        let uri = encode_profile_image(&path).await.unwrap();
        let payload = uri.strip_prefix("data:image/jpeg;base64,").unwrap();
        assert_eq!(BASE64_STANDARD.decode(payload).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_unknown_extension_falls_back_to_octet_stream() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("avatar.blob");
        std::fs::write(&path, b"xyz").unwrap();

        let uri = encode_profile_image(&path).await.unwrap();
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = encode_profile_image(temp_dir.path().join("nope.jpg"))
            .await
            .unwrap_err();
        assert!(err.is_io());
    }

    #[tokio::test]
    async fn test_attach_fills_the_draft_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("avatar.png");
        std::fs::write(&path, b"png-bytes").unwrap();

        let mut draft = UserDraft::default();
        attach_profile_image(&mut draft, &path).await.unwrap();
        assert!(draft.profile_image.starts_with("data:image/png;base64,"));
    }
}
