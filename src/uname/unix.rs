use std::ffi::CStr;
use std::io;

use libc::{c_char, utsname};

use crate::uname::Uname;

impl Uname {
    pub fn new() -> io::Result<Uname> {
        let mut n: utsname = unsafe { std::mem::zeroed() };
        let r = unsafe { libc::uname(&mut n) };
        if r == 0 {
            Ok(Uname::from(n))
        } else {
            Err(io::Error::last_os_error())
        }
    }
}

#[inline]
fn field(buf: &[c_char]) -> String {
    let s = unsafe { CStr::from_ptr(buf.as_ptr()) };
    s.to_string_lossy().into_owned()
}

impl From<utsname> for Uname {
    fn from(x: utsname) -> Self {
        Uname {
            sys_name: field(&x.sysname),
            node_name: field(&x.nodename),
            release: field(&x.release),
            version: field(&x.version),
            machine: field(&x.machine),
        }
    }
}
