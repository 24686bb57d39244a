use clap::Parser;
use smsguard_cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let output = run(&cli)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "smsguard_cli=debug,smsguard_classifiers=debug"
    } else {
        "smsguard_cli=warn,smsguard_classifiers=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
