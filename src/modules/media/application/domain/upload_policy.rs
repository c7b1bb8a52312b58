use std::fmt;

/// Image formats accepted for uploads, identified by their file signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
}

impl ImageKind {
    pub const ALL: [ImageKind; 3] = [ImageKind::Jpeg, ImageKind::Png, ImageKind::Gif];

    pub fn mime(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::Gif => "image/gif",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
            ImageKind::Gif => "gif",
        }
    }

    /// Accepts parameters (`image/png; charset=binary`) and any letter case.
    pub fn from_mime(value: &str) -> Option<Self> {
        let essence = value.split(';').next()?.trim().to_ascii_lowercase();
        match essence.as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageKind::Jpeg),
            "image/png" => Some(ImageKind::Png),
            "image/gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.extension() == ext)
    }

    /// Detects the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageKind::Jpeg)
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageKind::Png)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageKind::Gif)
        } else {
            None
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("The upload is empty")]
    Empty,

    #[error("The upload exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Unsupported media type: {0}")]
    UnsupportedType(String),

    #[error("The file content does not match {declared}")]
    SignatureMismatch { declared: ImageKind },
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub allowed: &'static [ImageKind],
}

impl UploadPolicy {
    pub const THUMBNAIL_MAX_BYTES: usize = 2 * 1024 * 1024;

    /// Request bodies up to this size reach the policy, so oversize uploads
    /// get a JSON 413 instead of the framework default.
    pub const REQUEST_LIMIT_BYTES: usize = 4 * Self::THUMBNAIL_MAX_BYTES;

    pub fn thumbnails() -> Self {
        Self {
            max_file_size_bytes: Self::THUMBNAIL_MAX_BYTES,
            allowed: &ImageKind::ALL,
        }
    }

    /// The declared type must be allowed and must match the file signature.
    pub fn check(
        &self,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<ImageKind, UploadRejection> {
        let declared = content_type.unwrap_or_default();
        let kind = ImageKind::from_mime(declared)
            .filter(|kind| self.allowed.contains(kind))
            .ok_or_else(|| UploadRejection::UnsupportedType(declared.to_string()))?;

        if bytes.is_empty() {
            return Err(UploadRejection::Empty);
        }

        if bytes.len() > self.max_file_size_bytes {
            return Err(UploadRejection::TooLarge {
                limit: self.max_file_size_bytes,
            });
        }

        match ImageKind::sniff(bytes) {
            Some(sniffed) if sniffed == kind => Ok(kind),
            _ => Err(UploadRejection::SignatureMismatch { declared: kind }),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    pub const GIF_BYTES: &[u8] = b"GIF89a\x01\0\x01\0";

    #[test]
    fn accepts_matching_signature() {
        let policy = UploadPolicy::thumbnails();

        assert_eq!(policy.check(Some("image/png"), PNG_BYTES), Ok(ImageKind::Png));
        assert_eq!(
            policy.check(Some("IMAGE/GIF; q=1"), GIF_BYTES),
            Ok(ImageKind::Gif)
        );
    }

    #[test]
    fn rejects_unsupported_declared_type() {
        let policy = UploadPolicy::thumbnails();

        assert_eq!(
            policy.check(Some("image/webp"), PNG_BYTES),
            Err(UploadRejection::UnsupportedType("image/webp".to_string()))
        );
        assert!(matches!(
            policy.check(None, PNG_BYTES),
            Err(UploadRejection::UnsupportedType(_))
        ));
    }

    #[test]
    fn rejects_spoofed_content() {
        let policy = UploadPolicy::thumbnails();

        assert_eq!(
            policy.check(Some("image/jpeg"), PNG_BYTES),
            Err(UploadRejection::SignatureMismatch {
                declared: ImageKind::Jpeg
            })
        );
        assert!(policy.check(Some("image/png"), b"<svg></svg>").is_err());
    }

    #[test]
    fn enforces_size_limit() {
        let policy = UploadPolicy {
            max_file_size_bytes: 8,
            allowed: &ImageKind::ALL,
        };

        assert_eq!(
            policy.check(Some("image/png"), PNG_BYTES),
            Err(UploadRejection::TooLarge { limit: 8 })
        );
        assert_eq!(policy.check(Some("image/png"), &[]), Err(UploadRejection::Empty));
    }
}
