// components/liked_downloader/src/options.rs
use std::path::{Component, Path, PathBuf};
use url::Url;

use crate::cookies::BrowserCookies;
use crate::types::UsageError;

/// Staging directory used when `--clear-temp-directory` is given without `--temp-directory`.
pub const DEFAULT_TEMP_DIRECTORY: &str = "__downloading";

/// Everything one yt-dlp invocation is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOptions {
    /// Browser cookie store to authenticate with
    pub cookies_from_browser: Option<BrowserCookies>,

    /// Netscape cookie file yt-dlp reads and writes back
    pub cookies_file: Option<PathBuf>,

    /// Where finished downloads end up
    pub download_directory: PathBuf,

    /// Where yt-dlp keeps partial downloads
    pub temp_directory: Option<PathBuf>,

    /// Empty the staging directory before the run
    pub clear_temp_directory: bool,

    /// Extract the audio track instead of keeping video
    pub audio_only: bool,

    /// Hand transfers to aria2c when it is installed
    pub use_aria2c: bool,

    /// Let yt-dlp print its regular output
    pub noisy: bool,

    /// ffmpeg binary to use instead of the one on PATH
    pub ffmpeg_path: Option<PathBuf>,

    /// Playlist or video URL
    pub source_url: String,
}

impl InvocationOptions {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            cookies_from_browser: None,
            cookies_file: None,
            download_directory: PathBuf::from("."),
            temp_directory: None,
            clear_temp_directory: false,
            audio_only: false,
            use_aria2c: false,
            noisy: false,
            ffmpeg_path: None,
            source_url: source_url.into(),
        }
    }

    /// Check the options before anything touches the filesystem.
    pub fn validate(&self) -> Result<Url, UsageError> {
        let raw = self.source_url.trim();
        if raw.is_empty() {
            return Err(UsageError::MissingUrl);
        }

        let url = Url::parse(raw).map_err(|e| UsageError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(UsageError::InvalidUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if let Some(staging) = self.staging_directory() {
            let (staging, download) = (normalize(staging), normalize(&self.download_directory));
            if staging == download {
                return Err(UsageError::SharedDirectory(staging));
            }
            if download.starts_with(&staging) {
                return Err(UsageError::NestedDirectory {
                    download,
                    temp: staging,
                });
            }
        }

        Ok(url)
    }

    /// The staging directory this run uses, if any.
    pub fn staging_directory(&self) -> Option<&Path> {
        match &self.temp_directory {
            Some(dir) => Some(dir),
            None if self.clear_temp_directory => Some(Path::new(DEFAULT_TEMP_DIRECTORY)),
            None => None,
        }
    }
}

// Lexical only; `./out` and `out` match, symlinks are caught after canonicalization.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn new_leaves_everything_else_at_defaults() {
        let options = InvocationOptions::new("https://www.youtube.com/playlist?list=LL");
        assert_eq!(options.download_directory, PathBuf::from("."));
        assert!(options.cookies_from_browser.is_none());
        assert!(options.cookies_file.is_none());
        assert!(options.temp_directory.is_none());
        assert!(!options.clear_temp_directory);
        assert!(!options.audio_only);
        assert!(!options.use_aria2c);
        assert!(!options.noisy);
        assert!(options.ffmpeg_path.is_none());
    }

    #[test]
    fn accepts_https_playlist() {
        let options = InvocationOptions::new("https://music.example/playlist?list=X");
        let url = options.validate().unwrap();
        assert_eq!(url.query(), Some("list=X"));
    }

    #[test]
    fn rejects_blank_url() {
        let options = InvocationOptions::new("   ");
        assert_matches!(options.validate(), Err(UsageError::MissingUrl));
    }

    #[test]
    fn rejects_unparseable_url() {
        let options = InvocationOptions::new("not a url");
        assert_matches!(options.validate(), Err(UsageError::InvalidUrl { url, .. }) if url == "not a url");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let options = InvocationOptions::new("file:///etc/passwd");
        assert_matches!(
            options.validate(),
            Err(UsageError::InvalidUrl { reason, .. }) if reason.contains("file")
        );
    }

    #[test]
    fn rejects_temp_equal_to_download_directory() {
        let mut options = InvocationOptions::new("https://example.com/playlist?list=LL");
        options.download_directory = PathBuf::from("out");
        options.temp_directory = Some(PathBuf::from("./out"));
        assert_matches!(options.validate(), Err(UsageError::SharedDirectory(_)));
    }

    #[test]
    fn rejects_download_directory_inside_temp() {
        let mut options = InvocationOptions::new("https://example.com/playlist?list=LM");
        options.download_directory = PathBuf::from("staging/music");
        options.temp_directory = Some(PathBuf::from("./staging"));
        options.clear_temp_directory = true;
        assert_matches!(
            options.validate(),
            Err(UsageError::NestedDirectory { download, temp })
                if download == Path::new("staging/music") && temp == Path::new("staging")
        );
    }

    #[test]
    fn allows_temp_inside_download_directory() {
        let mut options = InvocationOptions::new("https://example.com/playlist?list=LM");
        options.download_directory = PathBuf::from("music");
        options.temp_directory = Some(PathBuf::from("music/__downloading"));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn no_staging_directory_by_default() {
        let options = InvocationOptions::new("https://example.com/");
        assert_eq!(options.staging_directory(), None);
    }

    #[test]
    fn clear_without_temp_defaults_staging_directory() {
        let mut options = InvocationOptions::new("https://example.com/");
        options.clear_temp_directory = true;
        assert_eq!(
            options.staging_directory(),
            Some(Path::new(DEFAULT_TEMP_DIRECTORY))
        );
        assert!(options.validate().is_ok());
    }

    #[test]
    fn explicit_temp_wins_over_default() {
        let mut options = InvocationOptions::new("https://example.com/");
        options.clear_temp_directory = true;
        options.temp_directory = Some(PathBuf::from("staging"));
        assert_eq!(options.staging_directory(), Some(Path::new("staging")));
    }
}
