// components/liked_downloader/src/ytdlp.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::options::InvocationOptions;
use crate::staging::Staging;
use crate::types::{DownloadError, Error, UsageError};

/// Format selection for video runs: best streams merged, falling back to an mp4 video stream.
pub const VIDEO_FORMAT: &str = "bestvideo+bestaudio/bestvideo[ext=mp4]+bestaudio";

/// Helper executables a run depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub ytdlp: PathBuf,
    pub ffmpeg: PathBuf,
    pub aria2c: Option<PathBuf>,
}

#[async_trait]
pub trait Downloader {
    /// Find yt-dlp and the helpers the options ask for
    async fn locate_tools(&self, options: &InvocationOptions) -> Result<Toolchain, Error>;

    /// Run yt-dlp once with the given arguments
    async fn download(&self, tools: &Toolchain, args: &[OsString]) -> Result<(), DownloadError>;
}

/// Production downloader: finds tools with `which` and spawns yt-dlp.
#[derive(Debug, Clone, Default)]
pub struct YtDlp {
    search_path: Option<OsString>,
}

impl YtDlp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look tools up in `search_path` (PATH syntax) instead of the process PATH.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn find(&self, binary: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_default();
                which::which_in(binary, Some(paths), cwd)
            }
            None => which::which(binary),
        };
        found.ok()
    }
}

#[async_trait]
impl Downloader for YtDlp {
    async fn locate_tools(&self, options: &InvocationOptions) -> Result<Toolchain, Error> {
        let ffmpeg = match &options.ffmpeg_path {
            Some(path) if path.is_file() => Some(path.clone()),
            Some(path) => return Err(UsageError::FfmpegPathMissing(path.clone()).into()),
            None => None,
        };

        let ytdlp = self
            .find("yt-dlp")
            .ok_or(DownloadError::DependencyNotFound("yt-dlp"))?;
        let ffmpeg = match ffmpeg {
            Some(path) => path,
            None => self
                .find("ffmpeg")
                .ok_or(DownloadError::DependencyNotFound("ffmpeg"))?,
        };

        let aria2c = if options.use_aria2c {
            let found = self.find("aria2c");
            if found.is_none() {
                warn!("aria2c not found on PATH, using yt-dlp's native downloader");
            }
            found
        } else {
            None
        };

        debug!(?ytdlp, ?ffmpeg, ?aria2c, "Located tools");
        Ok(Toolchain { ytdlp, ffmpeg, aria2c })
    }

    async fn download(&self, tools: &Toolchain, args: &[OsString]) -> Result<(), DownloadError> {
        info!("Starting {}", tools.ytdlp.display());
        debug!(?args, "yt-dlp arguments");

        // stdio is inherited so yt-dlp's progress and errors reach the user untouched
        let status = Command::new(&tools.ytdlp)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(DownloadError::io(format!("starting {}", tools.ytdlp.display())))?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(DownloadError::Failed(code)),
            None => Err(DownloadError::Terminated),
        }
    }
}

/// Translate the options into a yt-dlp command line.
pub fn build_args(options: &InvocationOptions, staging: &Staging, tools: &Toolchain) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();

    args.push("--paths".into());
    args.push(prefixed("home:", &staging.download_dir));
    if let Some(temp) = &staging.temp_dir {
        args.push("--paths".into());
        args.push(prefixed("temp:", temp));
    }

    args.push("--ffmpeg-location".into());
    args.push(tools.ffmpeg.clone().into_os_string());

    if let Some(browser) = &options.cookies_from_browser {
        args.push("--cookies-from-browser".into());
        args.push(browser.to_string().into());
    }
    if let Some(file) = &options.cookies_file {
        args.push("--cookies".into());
        args.push(file.clone().into_os_string());
    }

    if options.audio_only {
        push_all(
            &mut args,
            &[
                "--format",
                "bestaudio",
                "--extract-audio",
                "--audio-format",
                "opus",
                "--audio-quality",
                "0",
            ],
        );
    } else {
        push_all(
            &mut args,
            &[
                "--format",
                VIDEO_FORMAT,
                "--merge-output-format",
                "mkv",
                "--sub-langs",
                "all",
                "--embed-subs",
                "--embed-info-json",
            ],
        );
    }
    push_all(
        &mut args,
        &["--no-mtime", "--embed-thumbnail", "--embed-metadata", "--embed-chapters"],
    );

    if tools.aria2c.is_some() {
        push_all(
            &mut args,
            &["--downloader", "aria2c", "--downloader-args", "aria2c:--file-allocation=none"],
        );
    }

    if !options.noisy {
        args.push("--quiet".into());
    }

    args.push("--".into());
    args.push(options.source_url.trim().into());
    args
}

fn prefixed(prefix: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(prefix);
    arg.push(path.as_os_str());
    arg
}

fn push_all(args: &mut Vec<OsString>, items: &[&str]) {
    args.extend(items.iter().map(OsString::from));
}
