pub mod distro;
pub mod kernel;
pub mod logger;
pub mod uname;
pub mod windows;
