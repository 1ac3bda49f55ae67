use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::installer::{InstallReport, Installer};
use crate::platform::PlatformArch;
use crate::utils::download::HttpFetcher;
use crate::utils::probe;
use crate::version::Version;

pub fn execute(config: &Config) -> Result<()> {
    let installer = Installer::for_host(PlatformArch::current(), config, HttpFetcher::new)?;

    let raw = probe::installed_version(&config.binary);
    let installed = Version::parse(&raw);

    let report = match installer.run(&installed) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "error:".red(), e);
            return Ok(());
        }
    };

    match &report {
        InstallReport::UpToDate {
            installed,
            candidate,
        } => {
            println!(
                "Current {} version is new enough: {} (release {})",
                config.binary,
                installed.to_string().green(),
                candidate
            );
        }
        InstallReport::Installed { url, .. } => {
            println!("Installed from {}", url);

            for outcome in report.succeeded() {
                println!(
                    "Wrote {} to {}",
                    installer.file_name().green(),
                    outcome.dir.display()
                );
            }
            for outcome in report.failed() {
                if let Err(e) = &outcome.result {
                    eprintln!("{} {}", "warning:".yellow(), e);
                }
            }

            if report.succeeded().next().is_none() {
                eprintln!(
                    "{} {} could not be written to any install directory",
                    "error:".red(),
                    installer.file_name()
                );
            }
        }
    }

    Ok(())
}
