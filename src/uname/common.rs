use crate::uname::Uname;

pub trait UnameExt {
    fn sys_name(&self) -> &str;
    fn node_name(&self) -> &str;
    fn release(&self) -> &str;
    fn version(&self) -> &str;
    fn machine(&self) -> &str;
}

impl UnameExt for Uname {
    fn sys_name(&self) -> &str {
        &self.sys_name
    }

    fn node_name(&self) -> &str {
        &self.node_name
    }

    fn release(&self) -> &str {
        &self.release
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn machine(&self) -> &str {
        &self.machine
    }
}
