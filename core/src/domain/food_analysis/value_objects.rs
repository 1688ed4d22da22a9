use base64::{Engine as _, engine::general_purpose};

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Image sent inline to the inference service: base64 data tagged with its
/// MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    pub fn from_bytes(bytes: &[u8], mime_type: Option<&str>) -> Result<Self, CoreError> {
        if bytes.is_empty() {
            return Err(CoreError::Invalid);
        }

        Ok(Self {
            mime_type: mime_type
                .filter(|m| m.starts_with("image/"))
                .unwrap_or(DEFAULT_IMAGE_MIME_TYPE)
                .to_string(),
            data: general_purpose::STANDARD.encode(bytes),
        })
    }

    /// Accepts either a `data:<mime>;base64,<payload>` URL or a bare base64
    /// string. Everything up to the first comma is treated as the header.
    pub fn from_data_url(value: &str) -> Result<Self, CoreError> {
        let value = value.trim();

        let (mime_type, data) = match value.split_once(',') {
            Some((header, data)) => {
                let mime_type = header
                    .strip_prefix("data:")
                    .and_then(|h| h.split(';').next())
                    .filter(|m| m.starts_with("image/"))
                    .unwrap_or(DEFAULT_IMAGE_MIME_TYPE);
                (mime_type, data)
            }
            None => (DEFAULT_IMAGE_MIME_TYPE, value),
        };

        if data.is_empty() || general_purpose::STANDARD.decode(data).is_err() {
            return Err(CoreError::Invalid);
        }

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_url_prefix_and_reads_mime_type() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, "aGVsbG8=");
    }

    #[test]
    fn bare_base64_defaults_to_jpeg() {
        let payload = ImagePayload::from_data_url("aGVsbG8=").unwrap();
        assert_eq!(payload.mime_type, DEFAULT_IMAGE_MIME_TYPE);
        assert_eq!(payload.data, "aGVsbG8=");
    }

    #[test]
    fn rejects_empty_or_garbage_payloads() {
        assert_eq!(
            ImagePayload::from_data_url("data:image/jpeg;base64,"),
            Err(CoreError::Invalid)
        );
        assert_eq!(
            ImagePayload::from_data_url("not base64 at all!"),
            Err(CoreError::Invalid)
        );
        assert_eq!(ImagePayload::from_bytes(&[], None), Err(CoreError::Invalid));
    }

    #[test]
    fn bytes_round_trip_through_data_url() {
        let payload = ImagePayload::from_bytes(b"hello", Some("image/webp")).unwrap();
        let data_url = payload.to_data_url();
        assert_eq!(data_url, "data:image/webp;base64,aGVsbG8=");
        assert_eq!(ImagePayload::from_data_url(&data_url).unwrap(), payload);
    }

    #[test]
    fn non_image_content_type_is_replaced() {
        let payload = ImagePayload::from_bytes(b"hello", Some("application/octet-stream")).unwrap();
        assert_eq!(payload.mime_type, DEFAULT_IMAGE_MIME_TYPE);

        let payload = ImagePayload::from_data_url("data:text/html;base64,aGVsbG8=").unwrap();
        assert_eq!(payload.mime_type, DEFAULT_IMAGE_MIME_TYPE);
        assert_eq!(payload.data, "aGVsbG8=");

        let payload = ImagePayload::from_data_url("data:;base64,aGVsbG8=").unwrap();
        assert_eq!(payload.mime_type, DEFAULT_IMAGE_MIME_TYPE);
    }
}
