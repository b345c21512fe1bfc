use axum::extract::Multipart;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Default)]
pub struct ImageUpload {
    pub image_data: Vec<u8>,
    pub mime_type: Option<String>,
    pub user_id: Option<String>,
}

/// Reads the `image` part and an optional `user_id` part. Unknown parts are
/// ignored. An empty image is passed through; rejecting it is the service's job.
pub async fn read_image_upload(mut multipart: Multipart) -> Result<ImageUpload, ApiError> {
    let mut upload = ImageUpload::default();
    let mut has_image = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                upload.mime_type = field.content_type().map(|c| c.to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                upload.image_data = data.to_vec();
                has_image = true;
            }
            "user_id" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read user_id: {}", e))
                })?;
                let value = value.trim();
                if !value.is_empty() {
                    upload.user_id = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    if !has_image {
        return Err(ApiError::BadRequest("Missing image field".to_string()));
    }

    Ok(upload)
}
