// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, cli, Flags};
use iced_toast::config::{self, Config};

fn main() -> iced::Result {
    let (cli, mut warnings) = cli::parse(pico_args::Arguments::from_env());

    let loaded = match &cli.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let config = match loaded {
        Ok((config, warning)) => {
            warnings.extend(warning);
            config
        }
        Err(err) => {
            warnings.push(format!("Using default configuration: {err}"));
            Config::default()
        }
    };

    // Installed only now so the configured level applies; everything noticed
    // before this point is replayed below.
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(config.log_level())
        .with_local_timestamps()
        .init()
    {
        eprintln!("Failed to initialize logger: {err}");
    }
    for warning in &warnings {
        log::warn!("{warning}");
    }

    app::run(Flags {
        config,
        duration_ms: cli.duration_ms,
        initial_severity: cli.initial_severity,
    })
}
