use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::{
    food_analysis::{entities::AnalysisHistory, value_objects::ImagePayload},
    session::{entities::ImageSource, ports::SessionService, value_objects::SelectImageInput},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodImageResponse {
    pub data: AnalysisHistory,
}

/// Multipart form accepted by [`analyze_food_image`]. Exactly one of `image`
/// and `image_data_url` is expected.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeFoodImageForm {
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<Vec<u8>>,
    #[schema(example = "data:image/jpeg;base64,/9j/4AAQSkZJRg...")]
    image_data_url: Option<String>,
    source: Option<ImageSource>,
}

fn parse_source(value: &str) -> Result<ImageSource, ApiError> {
    match value.trim() {
        "camera" => Ok(ImageSource::Camera),
        "gallery" => Ok(ImageSource::Gallery),
        other => Err(ApiError::BadRequest(format!(
            "Invalid source '{}', expected camera or gallery",
            other
        ))),
    }
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "food-analysis",
    summary = "Analyze food from image",
    description = "Sends the photo to the inference service and records the result at the front of the history. Rejected with 409 while another analysis is pending.",
    request_body(content = AnalyzeFoodImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeFoodImageResponse),
        (status = 401, description = "Nobody is logged in"),
        (status = 409, description = "Analysis already in progress"),
        (status = 502, description = "Inference service failed or answered malformed JSON")
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodImageResponse>, ApiError> {
    let mut image: Option<ImagePayload> = None;
    let mut source: Option<ImageSource> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let content_type = field.content_type().map(|c| c.to_string());
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

                image = Some(
                    ImagePayload::from_bytes(&data, content_type.as_deref())
                        .map_err(|_| ApiError::BadRequest("Image is empty".to_string()))?,
                );
            }
            "image_data_url" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read image_data_url: {}", e))
                })?;

                let payload = ImagePayload::from_data_url(&value).map_err(|_| {
                    ApiError::BadRequest("image_data_url is not valid base64 image data".to_string())
                })?;

                if payload.data.len() / 4 * 3 > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some(payload);
            }
            "source" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read source: {}", e)))?;
                source = Some(parse_source(&value)?);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| {
        ApiError::BadRequest("Missing image or image_data_url field".to_string())
    })?;

    let entry = state
        .service
        .select_image(SelectImageInput {
            image,
            source: source.unwrap_or(ImageSource::Gallery),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodImageResponse { data: entry }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_accepts_the_two_capture_modes() {
        assert_eq!(parse_source("camera").unwrap(), ImageSource::Camera);
        assert_eq!(parse_source(" gallery ").unwrap(), ImageSource::Gallery);
        assert!(matches!(
            parse_source("scanner"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
