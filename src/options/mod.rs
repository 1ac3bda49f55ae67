pub mod verbose;
pub mod version;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,

    #[arg(short, long, action = ArgAction::SetTrue, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download and install the release if the installed copy is older
    Install(InstallArgs),

    /// Compare the installed version against the release without downloading
    Check {
        #[arg(long, value_name = "VERSION")]
        target_version: Option<String>,

        #[arg(long, value_name = "NAME")]
        binary: Option<String>,
    },

    /// Show the detected platform and the download URL
    Platform {
        #[arg(long, value_name = "TEMPLATE")]
        url: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Release to install instead of the configured one
    #[arg(long, value_name = "VERSION")]
    pub target_version: Option<String>,

    /// Install directory; repeat for several. Replaces the configured list
    #[arg(long = "dir", value_name = "PATH")]
    pub dirs: Vec<PathBuf>,

    /// Download URL template
    #[arg(long, value_name = "TEMPLATE")]
    pub url: Option<String>,

    /// Name of the binary to install
    #[arg(long, value_name = "NAME")]
    pub binary: Option<String>,
}

impl From<InstallArgs> for Overrides {
    fn from(args: InstallArgs) -> Self {
        Overrides {
            binary: args.binary,
            target_version: args.target_version,
            url_template: args.url,
            install_dirs: args.dirs,
        }
    }
}
