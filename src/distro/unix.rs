use std::process::Command;

use anyhow::{bail, Context, Result};
use log::debug;

use crate::distro::DistroName;
use crate::kernel::KernelVersion;

/// Sources every `/etc/*-release` file in a bash subshell and echoes one of
/// its variables. Fetches fresh on every call, no process-wide cache.
pub fn release_var(var: &str) -> Result<String> {
    let script = format!(". /etc/*-release && echo ${}", var);
    let output = Command::new("bash")
        .arg("-c")
        .arg(&script)
        .output()
        .context("bash invocation failed")?;
    if !output.status.success() {
        bail!("release query `{}` exited with {}", var, output.status);
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() {
        bail!("release variable `{}` is empty", var);
    }
    debug!("release var {}: {}", var, value);
    Ok(value)
}

/// `$ID`, e.g. `ubuntu`.
pub fn id() -> Result<DistroName> {
    Ok(DistroName::from_id(&release_var("ID")?))
}

/// `$ID_LIKE`, the distro this one is based on, e.g. `debian`.
pub fn base_id() -> Result<DistroName> {
    Ok(DistroName::from_id(&release_var("ID_LIKE")?))
}

/// `$VERSION_ID`, e.g. `20.04` as `(20,4,0,0)`. Rolling releases such as
/// Arch ship no VERSION_ID, which surfaces as an error here.
pub fn version() -> Result<KernelVersion> {
    Ok(KernelVersion::parse(&release_var("VERSION_ID")?))
}

/// `$NAME`, e.g. `Debian GNU/Linux`.
pub fn name() -> Result<String> {
    release_var("NAME")
}

/// `$PRETTY_NAME`, e.g. `Debian GNU/Linux 11 (bullseye)`.
pub fn pretty_name() -> Result<String> {
    release_var("PRETTY_NAME")
}

/// `$HOME_URL`, e.g. `https://www.ubuntu.com/`.
pub fn home_url() -> Result<String> {
    release_var("HOME_URL")
}
