// idr-format: render amounts the way the storefront displays them
use std::io;
use tracing::error;

fn main() {
    // Formatted amounts go to stdout; keep log lines out of it.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = pico_args::Arguments::from_env();
    if let Err(e) = formatter::cli::run(args, &mut io::stdout().lock()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
