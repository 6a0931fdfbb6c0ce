// Multipart form helpers shared by the workspace and project handlers.
//
// The create/update endpoints accept multipart bodies with text fields plus
// an optional "image" part: a file upload, or a string carrying an already
// persisted data-URI when the client did not change the image.

use std::collections::HashMap;

use axum::extract::Multipart;
use base64::Engine;
use uuid::Uuid;

use crate::config;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug)]
pub enum ImageInput {
    Upload(Vec<u8>),
    Url(String),
}

#[derive(Debug, Default)]
pub struct UploadForm {
    pub text: HashMap<String, String>,
    pub image: Option<ImageInput>,
}

impl UploadForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.text.get(name).map(String::as_str)
    }

    pub fn require(&self, name: &str) -> Result<&str, ApiError> {
        self.field(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::validation(format!("Field '{name}' is required.")))
    }

    pub fn require_uuid(&self, name: &str) -> Result<Uuid, ApiError> {
        Uuid::parse_str(self.require(name)?)
            .map_err(|_| ApiError::validation(format!("Field '{name}' must be a valid id.")))
    }
}

pub async fn read_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let max_image_bytes = config::config().storage.max_image_bytes;
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" && field.file_name().is_some() {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::validation(format!("Malformed multipart body: {e}")))?;
            if bytes.len() > max_image_bytes {
                return Err(ApiError::validation("Image exceeds the maximum allowed size."));
            }
            form.image = Some(ImageInput::Upload(bytes.to_vec()));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::validation(format!("Malformed multipart body: {e}")))?;
            if name == "image" {
                form.image = Some(ImageInput::Url(value));
            } else {
                form.text.insert(name, value);
            }
        }
    }

    Ok(form)
}

/// Turn the form's image part into the string persisted on the document.
///
/// Uploads go through the blob store and come back as a base64 data-URI; the
/// document store never holds binary blobs directly. An empty string clears
/// the image.
pub async fn resolve_image_url(
    state: &AppState,
    image: Option<ImageInput>,
) -> Result<Option<String>, ApiError> {
    match image {
        None => Ok(None),
        Some(ImageInput::Url(url)) if url.is_empty() => Ok(None),
        Some(ImageInput::Url(url)) => Ok(Some(url)),
        Some(ImageInput::Upload(bytes)) => {
            let file_id = state.blobs.store(bytes).await?;
            let bytes = state.blobs.fetch(file_id).await?;
            let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
            Ok(Some(format!("data:image/png;base64,{encoded}")))
        }
    }
}
