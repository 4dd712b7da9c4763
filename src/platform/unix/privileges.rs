//! Unix privilege checks

use crate::platform::traits::PrivilegeOps;
use nix::unistd::Uid;

pub struct UnixPrivileges;

impl UnixPrivileges {
    pub fn new() -> Self {
        Self
    }
}

impl PrivilegeOps for UnixPrivileges {
    fn is_elevated(&self) -> bool {
        Uid::effective().is_root()
    }
}
