// bases/download_cli/src/args.rs
use clap::Parser;
use liked_downloader::{BrowserCookies, InvocationOptions};
use std::path::PathBuf;

const EXAMPLES: &str = r#"Examples:
  Download all liked videos:
    liked-dl --cookies-from-browser chrome --cookies cookies.txt --download-directory ytdls \
      --temp-directory __downloading --clear-temp-directory --aria2c \
      "https://www.youtube.com/playlist?list=LL"

  Download all liked songs from YouTube Music as audio only:
    liked-dl --cookies-from-browser chrome --cookies cookies.txt --download-directory ytdls/music \
      --temp-directory __downloading --clear-temp-directory --audio-only --aria2c \
      "https://music.youtube.com/playlist?list=LM""#;

/// Save liked playlists with yt-dlp
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Args {
    /// Read cookies from a browser's store (brave, chrome, chromium, edge, firefox, opera, safari, vivaldi, whale;
    /// keyrings: basictext, gnomekeyring, kwallet, kwallet5, kwallet6)
    #[arg(long, value_name = "BROWSER[+KEYRING][:PROFILE][::CONTAINER]")]
    pub cookies_from_browser: Option<BrowserCookies>,

    /// Cookie file to read from and write back to
    #[arg(long = "cookies", value_name = "PATH")]
    pub cookies_file: Option<PathBuf>,

    /// Directory finished downloads are moved to
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub download_directory: PathBuf,

    /// Directory holding downloads in progress; must neither be nor contain the download directory
    #[arg(long, value_name = "PATH")]
    pub temp_directory: Option<PathBuf>,

    /// Delete everything in the temporary directory before starting (defaults it to ./__downloading)
    #[arg(long)]
    pub clear_temp_directory: bool,

    /// Save the audio track only
    #[arg(long)]
    pub audio_only: bool,

    /// Use aria2c for transfers when it is installed
    #[arg(long)]
    pub aria2c: bool,

    /// Don't suppress yt-dlp output
    #[arg(long)]
    pub noisy: bool,

    /// ffmpeg binary to use when it is not on PATH
    #[arg(long, value_name = "PATH")]
    pub ffmpeg_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// URL of a playlist or single video
    pub url: String,
}

impl From<&Args> for InvocationOptions {
    fn from(args: &Args) -> Self {
        Self {
            cookies_from_browser: args.cookies_from_browser.clone(),
            cookies_file: args.cookies_file.clone(),
            download_directory: args.download_directory.clone(),
            temp_directory: args.temp_directory.clone(),
            clear_temp_directory: args.clear_temp_directory,
            audio_only: args.audio_only,
            use_aria2c: args.aria2c,
            noisy: args.noisy,
            ffmpeg_path: args.ffmpeg_path.clone(),
            source_url: args.url.clone(),
        }
    }
}
