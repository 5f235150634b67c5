// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use storefront_ui::app::{self, Flags};

const HELP: &str = "\
storefront-demo

USAGE:
  storefront-demo [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, es-ES)
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help
";

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("storefront_ui=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(?flags, "starting storefront demo");
    app::run(flags)
}
