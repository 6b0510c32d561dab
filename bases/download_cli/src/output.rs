// bases/download_cli/src/output.rs
use liked_downloader::{Error, InvocationOptions, Staging};

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_download_start(&self, options: &InvocationOptions) {
        let mode = if options.audio_only { "audio" } else { "video" };
        println!("Saving {} from: {}", mode, options.source_url);
    }

    pub fn print_download_complete(&self, staging: &Staging) {
        println!("Finished, files are in {}", staging.download_dir.display());

        if self.verbose {
            if let Some(temp) = &staging.temp_dir {
                println!("Temporary directory: {}", temp.display());
            }
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if let Some(Error::Usage(_)) = error.downcast_ref::<Error>() {
            eprintln!("\nFor more information, try '--help'.");
        }

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}
