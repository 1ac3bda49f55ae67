//! Maps the host OS and CPU onto the names used in release asset URLs.

use std::fmt;

use crate::error::InstallError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Darwin,
    Linux,
    Windows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Armv6,
    Armv7,
    Armv8,
    I386,
    Amd64,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
        }
    }

    fn from_os_name(os: &str) -> Option<Self> {
        match os {
            "macos" | "darwin" => Some(Platform::Darwin),
            "linux" => Some(Platform::Linux),
            "windows" | "win32" => Some(Platform::Windows),
            _ => None,
        }
    }
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Armv6 => "armv6",
            Arch::Armv7 => "armv7",
            Arch::Armv8 => "armv8",
            Arch::I386 => "386",
            Arch::Amd64 => "amd64",
        }
    }

    fn from_cpu_name(cpu: &str, arm_variant: Option<u8>) -> Option<Self> {
        match (cpu, arm_variant) {
            ("arm", Some(6)) | ("armv6", _) => Some(Arch::Armv6),
            ("arm", Some(7)) | ("armv7", _) => Some(Arch::Armv7),
            ("aarch64" | "arm64", _) => Some(Arch::Armv8),
            ("x86" | "ia32" | "x32", _) => Some(Arch::I386),
            ("x86_64" | "x64", _) => Some(Arch::Amd64),
            _ => None,
        }
    }
}

/// The resolved `(platform, arch, extension)` for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformArch {
    pub platform: Platform,
    pub arch: Arch,
}

impl PlatformArch {
    /// Resolves raw OS/CPU identifiers. Accepts both Rust target names
    /// (`macos`, `x86_64`) and Node-style ones (`win32`, `x64`). A bare `arm`
    /// needs `arm_variant` to pick between armv6 and armv7.
    pub fn resolve(os: &str, cpu: &str, arm_variant: Option<u8>) -> Result<Self, InstallError> {
        let platform = Platform::from_os_name(os);
        let arch = Arch::from_cpu_name(cpu, arm_variant);

        match (platform, arch) {
            (Some(platform), Some(arch)) => Ok(Self { platform, arch }),
            _ => {
                let arch = match (cpu, arm_variant) {
                    ("arm", Some(variant)) => format!("armv{}", variant),
                    _ => cpu.to_string(),
                };
                Err(InstallError::UnsupportedPlatform {
                    os: os.to_string(),
                    arch,
                })
            }
        }
    }

    pub fn current() -> Result<Self, InstallError> {
        Self::resolve(std::env::consts::OS, std::env::consts::ARCH, arm_variant())
    }

    pub fn ext(&self) -> &'static str {
        match self.platform {
            Platform::Windows => ".exe",
            _ => "",
        }
    }

    pub fn is_windows(&self) -> bool {
        self.platform == Platform::Windows
    }
}

impl fmt::Display for PlatformArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform.as_str(), self.arch.as_str())
    }
}

fn arm_variant() -> Option<u8> {
    if cfg!(target_feature = "v7") {
        Some(7)
    } else if cfg!(target_feature = "v6") {
        Some(6)
    } else {
        None
    }
}
