//! Drives a single install: decide, fetch once, then write to every target.

use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::InstallError;
use crate::platform::PlatformArch;
use crate::utils::download::{render_url, Fetcher};
use crate::utils::{fs, shim};
use crate::version::{needs_update, Version};

/// What happened in one install directory.
#[derive(Debug)]
pub struct TargetOutcome {
    pub dir: PathBuf,
    pub result: Result<PathBuf, InstallError>,
}

#[derive(Debug)]
pub enum InstallReport {
    UpToDate {
        installed: Version,
        candidate: Version,
    },
    Installed {
        url: String,
        outcomes: Vec<TargetOutcome>,
    },
}

impl InstallReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.outcomes().iter().filter(|o| o.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.outcomes().iter().filter(|o| o.result.is_err())
    }

    fn outcomes(&self) -> &[TargetOutcome] {
        match self {
            InstallReport::UpToDate { .. } => &[],
            InstallReport::Installed { outcomes, .. } => outcomes,
        }
    }
}

pub struct Installer<'a, F: Fetcher> {
    target: PlatformArch,
    config: &'a Config,
    fetcher: F,
}

impl<'a, F: Fetcher> Installer<'a, F> {
    pub fn new(target: PlatformArch, config: &'a Config, fetcher: F) -> Self {
        Self {
            target,
            config,
            fetcher,
        }
    }

    /// Builds an installer for an already attempted platform resolution.
    /// An unsupported platform is returned before the fetcher is created,
    /// so nothing is probed, downloaded or written.
    pub fn for_host<M>(
        resolved: Result<PlatformArch, InstallError>,
        config: &'a Config,
        make_fetcher: M,
    ) -> Result<Self, InstallError>
    where
        M: FnOnce() -> Result<F, InstallError>,
    {
        let target = resolved?;
        Ok(Self::new(target, config, make_fetcher()?))
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", self.config.binary, self.target.ext())
    }

    pub fn download_url(&self) -> String {
        render_url(
            &self.config.url_template,
            &self.target,
            &self.config.target_version,
        )
    }

    /// Installs the configured release unless `installed` is new enough.
    ///
    /// Only a failed download is returned as an error, and in that case no
    /// install directory has been touched. Per-directory failures are part of
    /// the report.
    pub fn run(&self, installed: &Version) -> Result<InstallReport, InstallError> {
        let candidate = Version::parse(&self.config.target_version);

        if !needs_update(installed, &candidate) {
            info!(%installed, %candidate, "installed version is new enough");
            return Ok(InstallReport::UpToDate {
                installed: *installed,
                candidate,
            });
        }

        let url = self.download_url();
        info!(%url, %installed, %candidate, "fetching release");
        let payload = self.fetcher.fetch(&url)?;

        let outcomes = self.write_targets(&payload);
        Ok(InstallReport::Installed { url, outcomes })
    }

    /// Writes `payload` into every install directory. Directories are
    /// independent: a failure is recorded and the next one is still tried.
    pub fn write_targets(&self, payload: &[u8]) -> Vec<TargetOutcome> {
        let file_name = self.file_name();
        let mut pending = self.config.install_dirs.clone();
        let mut outcomes = Vec::with_capacity(pending.len());

        while let Some(dir) = pending.pop() {
            let result = fs::write_executable(&dir, &file_name, payload).map_err(|source| {
                InstallError::TargetWrite {
                    dir: dir.clone(),
                    source,
                }
            });

            match &result {
                Ok(path) => {
                    debug!(path = %path.display(), "wrote binary");
                    if self.target.is_windows() {
                        if let Err(e) = shim::write_shims(&dir, &self.config.binary, path) {
                            debug!(error = %e, "skipping shims");
                        }
                    }
                }
                Err(e) => warn!(error = %e, "install target failed"),
            }

            outcomes.push(TargetOutcome { dir, result });
        }

        outcomes
    }
}
