use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::platform::PlatformArch;
use crate::utils::download::render_url;

pub fn execute(config: &Config) -> Result<()> {
    let target = PlatformArch::current()?;

    println!("Platform:  {}", target.platform.as_str().green());
    println!("Arch:      {}", target.arch.as_str().green());
    println!(
        "Extension: {}",
        if target.ext().is_empty() { "(none)" } else { target.ext() }
    );
    println!(
        "URL:       {}",
        render_url(&config.url_template, &target, &config.target_version)
    );

    Ok(())
}
