mod commands;
mod config;
mod error;
mod installer;
mod options;
mod platform;
mod utils;
mod version;

use clap::Parser;
use colored::Colorize;

use crate::config::Overrides;
use crate::error::InstallError;

fn main() -> anyhow::Result<()> {
    let cli = options::Cli::parse();

    options::verbose::init(cli.verbose);

    if cli.version {
        options::version::show();
        return Ok(());
    }

    let config = config::load_config()?;
    let issues_url = config.issues_url.clone();

    let result = match cli.command {
        None => commands::install::execute(&config),
        Some(options::Commands::Install(args)) => {
            let config = config.merge_overrides(args.into());
            commands::install::execute(&config)
        }
        Some(options::Commands::Check {
            target_version,
            binary,
        }) => {
            let config = config.merge_overrides(Overrides {
                binary,
                target_version,
                ..Overrides::default()
            });
            commands::check::execute(&config)
        }
        Some(options::Commands::Platform { url }) => {
            let config = config.merge_overrides(Overrides {
                url_template: url,
                ..Overrides::default()
            });
            commands::platform::execute(&config)
        }
    };

    if let Err(e) = &result {
        if is_unsupported_platform(e) {
            eprintln!("{}", e.to_string().red());
            eprintln!("Please open an issue at {}", issues_url);
            std::process::exit(1);
        }
    }

    result
}

fn is_unsupported_platform(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InstallError>(),
        Some(InstallError::UnsupportedPlatform { .. })
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_is_fatal() {
        let err = platform::PlatformArch::resolve("aix", "ppc64", None).unwrap_err();
        assert!(is_unsupported_platform(&anyhow::Error::from(err)));
    }

    #[test]
    fn other_failures_are_not() {
        let err = InstallError::Fetch {
            url: "https://example.com".to_string(),
            reason: "timed out".to_string(),
        };
        assert!(!is_unsupported_platform(&anyhow::Error::from(err)));
        assert!(!is_unsupported_platform(&anyhow::anyhow!("bad config")));
    }
}
