use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::{base_id, home_url, id, name, pretty_name, release_var, version};

/// Known Linux distributions, keyed by the `ID` field of `/etc/*-release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistroName {
    AlpineLinux,
    AmazonLinux,
    Arch,
    CentOs,
    Debian,
    ElementaryOs,
    Fedora,
    KdeNeon,
    LinuxMint,
    OpenSuse,
    OracleLinux,
    SparkyLinux,
    Suse,
    Ubuntu,
    ZorinOs,
    Other,
}

impl DistroName {
    /// Maps a release-file identifier (`ID` or `ID_LIKE`) to a known distro.
    /// Unknown identifiers fall back to `Other`.
    pub fn from_id(id: &str) -> DistroName {
        match id.trim().to_lowercase().as_str() {
            "alpine" => DistroName::AlpineLinux,
            "amzn" => DistroName::AmazonLinux,
            "arch" => DistroName::Arch,
            "centos" => DistroName::CentOs,
            "debian" => DistroName::Debian,
            "elementary" => DistroName::ElementaryOs,
            "fedora" | "rhel fedora" => DistroName::Fedora,
            "linuxmint" => DistroName::LinuxMint,
            "neon" => DistroName::KdeNeon,
            "ol" => DistroName::OracleLinux,
            "opensuse" | "opensuse-leap" | "suse opensuse" => DistroName::OpenSuse,
            "sparky" => DistroName::SparkyLinux,
            "suse" => DistroName::Suse,
            "ubuntu" | "ubuntu debian" => DistroName::Ubuntu,
            "zorin" => DistroName::ZorinOs,
            _ => DistroName::Other,
        }
    }
}

static WSL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("(microsoft|wsl)").expect("wsl pattern build failed"));

/// True when the kernel release string reveals Windows Subsystem for Linux.
pub fn is_wsl(raw_kernel: &str) -> bool {
    WSL_PATTERN.is_match(&raw_kernel.to_lowercase())
}
