// bases/download_cli/src/app.rs
use color_eyre::Result;
use liked_downloader::{InvocationOptions, LikedDownloader};
use crate::args::Args;
use crate::output::OutputHandler;

pub struct App {
    options: InvocationOptions,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        let options = InvocationOptions::from(&args);
        Self { options, output }
    }

    pub async fn run(&self) -> Result<()> {
        let downloader = LikedDownloader::new();

        self.output.print_download_start(&self.options);

        let staging = downloader.run(&self.options).await?;

        self.output.print_download_complete(&staging);

        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }

    /// Exit code for a failed run; library errors carry their own.
    pub fn exit_code(error: &color_eyre::Report) -> i32 {
        error
            .downcast_ref::<liked_downloader::Error>()
            .map(liked_downloader::Error::exit_code)
            .unwrap_or(1)
    }
}
