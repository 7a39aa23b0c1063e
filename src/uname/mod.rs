pub mod common;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

use crate::kernel::KernelVersion;

/// Host identification fields, fetched once per [`Uname::new`] call.
pub struct Uname {
    sys_name: String,
    node_name: String,
    release: String,
    version: String,
    machine: String,
}

impl Uname {
    /// Kernel release normalized to a 4-component version. Unparsable
    /// releases come back as [`KernelVersion::ZERO`].
    pub fn kernel_version(&self) -> KernelVersion {
        KernelVersion::parse(&self.release)
    }
}
