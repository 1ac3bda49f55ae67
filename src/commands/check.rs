use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::utils::probe;
use crate::version::{needs_update, Version};

pub fn execute(config: &Config) -> Result<()> {
    let installed = Version::parse(&probe::installed_version(&config.binary));
    let candidate = Version::parse(&config.target_version);

    println!("Installed: {}", installed);
    println!("Release:   {}", candidate);

    if needs_update(&installed, &candidate) {
        println!("{}", "Update available".yellow());
    } else {
        println!("{}", "Up to date".green());
    }

    Ok(())
}
