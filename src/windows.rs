//! Static table mapping Windows version numbers to marketing names.

use serde::{Deserialize, Serialize};

use crate::kernel::KernelVersion;

/// Windows platform family, the classic PlatformID split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Win32Nt,
    Win32Windows,
}

pub const WINDOWS_11: KernelVersion = KernelVersion::new(10, 0, 22000, 194);
pub const WINDOWS_10: KernelVersion = KernelVersion::new(10, 0, 10240, 0);
pub const WINDOWS_8_1: KernelVersion = KernelVersion::new(6, 3, 0, 0);
pub const WINDOWS_8: KernelVersion = KernelVersion::new(6, 2, 0, 0);
pub const WINDOWS_7_2008R2: KernelVersion = KernelVersion::new(6, 1, 0, 0);
pub const WINDOWS_VISTA_2008: KernelVersion = KernelVersion::new(6, 0, 0, 0);
pub const WINDOWS_2003: KernelVersion = KernelVersion::new(5, 2, 0, 0);
pub const WINDOWS_XP: KernelVersion = KernelVersion::new(5, 1, 0, 0);
pub const WINDOWS_2000: KernelVersion = KernelVersion::new(5, 0, 0, 0);
pub const WINDOWS_ME: KernelVersion = KernelVersion::new(4, 90, 0, 0);
pub const WINDOWS_98: KernelVersion = KernelVersion::new(4, 10, 0, 0);
pub const WINDOWS_95_NT40: KernelVersion = KernelVersion::new(4, 0, 0, 0);

// newest first, marketing_name takes the first entry <= probe
const MARKETING_NAMES: [(KernelVersion, &str, Platform); 12] = [
    (WINDOWS_11, "Windows 11", Platform::Win32Nt),
    (WINDOWS_10, "Windows 10", Platform::Win32Nt),
    (WINDOWS_8_1, "Windows 8.1", Platform::Win32Nt),
    (WINDOWS_8, "Windows 8", Platform::Win32Nt),
    (WINDOWS_7_2008R2, "Windows 7 / Server 2008 R2", Platform::Win32Nt),
    (WINDOWS_VISTA_2008, "Windows Vista / Server 2008", Platform::Win32Nt),
    (WINDOWS_2003, "Windows Server 2003", Platform::Win32Nt),
    (WINDOWS_XP, "Windows XP", Platform::Win32Nt),
    (WINDOWS_2000, "Windows 2000", Platform::Win32Nt),
    (WINDOWS_ME, "Windows Me", Platform::Win32Windows),
    (WINDOWS_98, "Windows 98", Platform::Win32Windows),
    (WINDOWS_95_NT40, "Windows 95 / NT 4.0", Platform::Win32Windows),
];

/// Marketing name for a reported Windows version number: the highest table
/// entry not exceeding `version`. `None` below Windows 95.
pub fn marketing_name(version: KernelVersion) -> Option<(&'static str, Platform)> {
    MARKETING_NAMES
        .iter()
        .find(|(base, _, _)| version >= *base)
        .map(|(_, name, platform)| (*name, *platform))
}
