// Media upload encoding.
// Builds the multipart/form-data body for image uploads: a random
// boundary token, one `image` part named image.jpg, CRLF framing, and a
// trailing `--boundary--` marker.

use rand::{Rng, distributions::Alphanumeric, thread_rng};

use crate::error::{ApiError, UploadError};

use super::client::ApiClient;
use super::types::MediaUpload;

const BOUNDARY_LEN: usize = 16;

/// Generate a random multipart boundary token.
pub fn multipart_boundary() -> String {
    let token: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOUNDARY_LEN)
        .map(char::from)
        .collect();
    format!("pulse-{}", token)
}

/// Encode a JPEG payload as a multipart/form-data body.
///
/// Each part is terminated by `\r\n`; the body ends with the final
/// boundary marker `--<boundary>--`.
pub fn encode_image_body(boundary: &str, image: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(image.len() + 256);

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"image\"; filename=\"image.jpg\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n");
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(image);
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    body
}

impl ApiClient {
    /// Upload a JPEG image, returning the hosted media record.
    pub async fn upload_image(&self, image: &[u8]) -> Result<MediaUpload, UploadError> {
        if image.is_empty() {
            return Err(UploadError::InvalidImageData);
        }

        let boundary = multipart_boundary();
        let body = encode_image_body(&boundary, image);
        let content_type = format!("multipart/form-data; boundary={}", boundary);

        self.post_raw("/media", &content_type, body)
            .await
            .map_err(|err| match err {
                ApiError::Decoding(source) => UploadError::Decoding(source),
                other => UploadError::UploadFailed(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_random() {
        let a = multipart_boundary();
        let b = multipart_boundary();
        assert_ne!(a, b);
        assert!(a.starts_with("pulse-"));
        assert_eq!(a.len(), "pulse-".len() + BOUNDARY_LEN);
    }

    #[test]
    fn test_body_layout() {
        let body = encode_image_body("pulse-test", b"JPEGDATA");
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with("--pulse-test\r\n"));
        assert!(text.contains(
            "Content-Disposition: form-data; name=\"image\"; filename=\"image.jpg\"\r\n"
        ));
        assert!(text.contains("Content-Type: image/jpeg\r\n\r\nJPEGDATA\r\n"));
        assert!(text.ends_with("--pulse-test--\r\n"));
    }

    #[test]
    fn test_every_line_crlf_terminated() {
        let body = encode_image_body("pulse-test", b"x");
        let text = String::from_utf8(body).unwrap();
        for line in text.split_inclusive("\r\n") {
            assert!(line.ends_with("\r\n"));
        }
    }
}
