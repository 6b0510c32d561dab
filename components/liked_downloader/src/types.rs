// components/liked_downloader/src/types.rs
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used for every usage error, matching clap's own usage failures.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Problems with the command line, detected before yt-dlp is started.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("a playlist or video URL is required")]
    MissingUrl,

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("temporary and download directories must be different (both are {0})")]
    SharedDirectory(PathBuf),

    #[error("download directory {download} is inside temporary directory {temp}")]
    NestedDirectory { download: PathBuf, temp: PathBuf },

    #[error("temporary directory {0} is not empty (pass --clear-temp-directory to empty it)")]
    TempDirectoryNotEmpty(PathBuf),

    #[error("ffmpeg not found at {0}")]
    FfmpegPathMissing(PathBuf),
}

/// Failures of the external downloader or of the bookkeeping around it.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Required dependency not found: {0}")]
    DependencyNotFound(&'static str),

    #[error("yt-dlp failed with exit code {0}")]
    Failed(i32),

    #[error("yt-dlp was terminated by a signal")]
    Terminated,

    #[error("IO error while {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    pub(crate) fn io(operation: impl Into<String>) -> impl FnOnce(std::io::Error) -> Self {
        let operation = operation.into();
        move |source| DownloadError::Io { operation, source }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Download(#[from] DownloadError),
}

impl Error {
    /// Process exit code for this failure. yt-dlp's own code is passed through.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => USAGE_EXIT_CODE,
            Error::Download(DownloadError::Failed(code)) if *code != 0 => *code,
            Error::Download(_) => 1,
        }
    }
}
