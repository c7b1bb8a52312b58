pub mod stored_path;
pub mod upload_policy;

pub use stored_path::StoredPath;
pub use upload_policy::{ImageKind, UploadPolicy, UploadRejection};
