use bannersmith::cli::Args;
use bannersmith::output;
use clap::Parser;

fn main() {
    // Initialize logging subsystem
    bannersmith::logging::init_subscriber().expect("Failed to initialize logging subsystem");

    // Parse command-line arguments; clap exits non-zero on a bad or
    // missing preset before anything is written
    let args = Args::parse();

    let request = args.into_request().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(2);
    });

    tracing::info!(
        preset = request.preset.as_str(),
        logo = %request.logo_path.display(),
        outdir = %request.outdir.display(),
        sizes = request.preset.sizes().len(),
        zip = request.zip,
        dark = request.dark,
        "Starting banner export"
    );

    match output::run(&request) {
        Ok(summary) => {
            tracing::info!(
                files = summary.files.len(),
                archived = summary.archive.is_some(),
                "Banner export complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Banner export failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
