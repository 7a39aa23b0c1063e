use std::env::consts::ARCH;
use std::io;

use crate::uname::Uname;

impl Uname {
    pub fn new() -> io::Result<Uname> {
        Ok(Uname {
            sys_name: String::from("Windows"),
            node_name: String::from("unknown"),
            release: String::from("unknown"),
            version: String::from("unknown"),
            machine: String::from(ARCH),
        })
    }
}
