use regex::Regex;
use std::sync::LazyLock;

use super::upload_policy::ImageKind;

static DIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid directory pattern"));

static FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9-]+\.(jpg|png|gif)$").expect("valid file name pattern")
});

/// A `{dir}/{file}` location inside the storage root. Parsing rejects
/// anything that could escape it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPath {
    dir: String,
    file: String,
}

impl StoredPath {
    pub fn parse(dir: &str, file: &str) -> Option<Self> {
        (DIR_RE.is_match(dir) && FILE_RE.is_match(file)).then(|| Self {
            dir: dir.to_string(),
            file: file.to_string(),
        })
    }

    /// Reads the path back out of a public URL such as `/storage/projects/a.png`.
    pub fn from_public_url(url: &str, public_prefix: &str) -> Option<Self> {
        let rest = url.strip_prefix(public_prefix.trim_end_matches('/'))?;
        let rest = rest.strip_prefix('/')?;
        let (dir, file) = rest.split_once('/')?;
        Self::parse(dir, file)
    }

    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn kind(&self) -> Option<ImageKind> {
        let (_, ext) = self.file.rsplit_once('.')?;
        ImageKind::from_extension(ext)
    }

    pub fn public_url(&self, public_prefix: &str) -> String {
        format!(
            "{}/{}/{}",
            public_prefix.trim_end_matches('/'),
            self.dir,
            self.file
        )
    }
}
