use actix_multipart::{Field, Multipart};
use futures::TryStreamExt;

use crate::complaint::application::domain::upload_policy;
use crate::complaint::application::use_cases::create_complaint::UploadedImage;

/// Fields of the complaint form, collected off the multipart stream.
/// Everything stays optional here; the domain constructor decides what is
/// actually required.
#[derive(Debug, Default)]
pub struct ComplaintForm {
    pub category: Option<String>,
    pub priority: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub images: Vec<UploadedImage>,
}

#[derive(Debug, thiserror::Error)]
pub enum MultipartParseError {
    /// Upload policy violation, reported with the policy message.
    #[error("{0}")]
    Rejected(String),

    #[error("Malformed multipart payload")]
    Malformed,
}

/// Reads the whole form, enforcing attachment limits while the body streams
/// in. Oversized or unsupported uploads are rejected before anything is
/// buffered past the limit or written to disk.
pub async fn parse_complaint_form(
    mut payload: Multipart,
) -> Result<ComplaintForm, MultipartParseError> {
    let mut form = ComplaintForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|_| MultipartParseError::Malformed)?
    {
        let Some(name) = field.name().map(str::to_string) else {
            let _ = read_limited(&mut field).await?;
            continue;
        };

        if name == "images" {
            if form.images.len() >= upload_policy::MAX_FILES {
                return Err(MultipartParseError::Rejected(
                    upload_policy::TOO_MANY_FILES_MESSAGE.to_string(),
                ));
            }

            let content_type = field
                .content_type()
                .map(|mime| mime.to_string())
                .unwrap_or_default();

            if upload_policy::extension_for(&content_type).is_none() {
                return Err(MultipartParseError::Rejected(
                    upload_policy::UNSUPPORTED_TYPE_MESSAGE.to_string(),
                ));
            }

            let original_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .unwrap_or("upload")
                .to_string();

            let data = read_limited(&mut field).await?;

            form.images.push(UploadedImage {
                original_name,
                content_type,
                data,
            });
        } else {
            let text = String::from_utf8_lossy(&read_limited(&mut field).await?).into_owned();

            match name.as_str() {
                "category" => form.category = Some(text),
                "priority" => form.priority = Some(text),
                "title" => form.title = Some(text),
                "description" => form.description = Some(text),
                "location" => form.location = Some(text),
                _ => {}
            }
        }
    }

    Ok(form)
}

async fn read_limited(field: &mut Field) -> Result<Vec<u8>, MultipartParseError> {
    let mut data = Vec::new();

    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|_| MultipartParseError::Malformed)?
    {
        if data.len() + chunk.len() > upload_policy::MAX_FILE_BYTES {
            return Err(MultipartParseError::Rejected(
                upload_policy::FILE_TOO_LARGE_MESSAGE.to_string(),
            ));
        }
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}
