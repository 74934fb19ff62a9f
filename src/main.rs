// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, paths, Flags};
use iced_lightbox::config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Usage: iced_lightbox [OPTIONS] <IMAGE|DIR|DATA_URI>...

Options:
  --start <N>            initial image index (clamped)
  --background <#RRGGBB> overlay background colour
  --lang <LOCALE>        UI language (en-US, fr)
  --config-dir <DIR>     configuration directory override
  --init-config          write a default settings.toml if none exists
  -h, --help             print this help
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let init_config = args.contains("--init-config");
    let config_dir = opt_value(&mut args, "--config-dir");
    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        start: opt_value(&mut args, "--start"),
        background: opt_value(&mut args, "--background"),
        images: args
            .finish()
            .into_iter()
            .filter_map(|arg| match arg.into_string() {
                Ok(arg) => Some(arg),
                Err(arg) => {
                    tracing::warn!(?arg, "skipping non UTF-8 argument");
                    None
                }
            })
            .collect(),
    };

    paths::init_cli_overrides(config_dir);

    if init_config {
        match config::init_default(None) {
            Ok(Some(path)) => tracing::info!(path = %path.display(), "config ready"),
            Ok(None) => tracing::warn!("no configuration directory available"),
            Err(err) => tracing::error!(error = %err, "failed to write default config"),
        }
        if flags.images.is_empty() {
            return Ok(());
        }
    }

    app::run(flags)
}

/// Reads an optional flag value, logging and ignoring malformed input.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, error = %err, "ignoring invalid argument");
            None
        }
    }
}
