// bases/download_cli/src/main.rs
mod args;
mod output;
mod app;

use clap::Parser;
use color_eyre::Result;
use args::Args;
use app::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let default_filter = if args.verbose {
        "liked_dl=debug,liked_downloader=debug"
    } else {
        "liked_dl=info,liked_downloader=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(args);

    if let Err(error) = app.run().await {
        app.print_error(&error);
        std::process::exit(App::exit_code(&error));
    }
    Ok(())
}
