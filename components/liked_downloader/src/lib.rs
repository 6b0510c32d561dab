// components/liked_downloader/src/lib.rs
mod cookies;
mod options;
mod staging;
mod types;
mod ytdlp;

use std::sync::Arc;
use tracing::info;

pub use cookies::{Browser, BrowserCookies, CookieSourceError, Keyring};
pub use options::{InvocationOptions, DEFAULT_TEMP_DIRECTORY};
pub use staging::Staging;
pub use types::{DownloadError, Error, UsageError, USAGE_EXIT_CODE};
pub use ytdlp::{build_args, Downloader, Toolchain, YtDlp};

pub struct LikedDownloader {
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl LikedDownloader {
    /// Create a LikedDownloader that shells out to yt-dlp
    pub fn new() -> Self {
        Self::new_with_downloader(Arc::new(YtDlp::new()))
    }

    /// Create a LikedDownloader with a specific downloader implementation
    pub fn new_with_downloader(downloader: Arc<dyn Downloader + Send + Sync>) -> Self {
        Self { downloader }
    }

    /// Validate the options, prepare directories and invoke the downloader exactly once.
    pub async fn run(&self, options: &InvocationOptions) -> Result<Staging, Error> {
        let url = options.validate()?;
        let tools = self.downloader.locate_tools(options).await?;
        let staging = staging::prepare(options).await?;

        let args = build_args(options, &staging, &tools);
        info!("Downloading {} into {}", url, staging.download_dir.display());
        self.downloader.download(&tools, &args).await?;

        Ok(staging)
    }
}

impl Default for LikedDownloader {
    fn default() -> Self {
        Self::new()
    }
}
