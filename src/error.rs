use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("'{os}' on '{arch}' isn't supported yet")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("failed to download {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to install into {}: {source}", dir.display())]
    TargetWrite {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write shim {}: {source}", path.display())]
    ShimWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
