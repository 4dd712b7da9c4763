//! Windows privilege checks

use crate::platform::traits::PrivilegeOps;

pub struct WindowsPrivileges;

impl WindowsPrivileges {
    pub fn new() -> Self {
        Self
    }
}

impl PrivilegeOps for WindowsPrivileges {
    // Elevation is not queried; see the trait docs
    fn is_elevated(&self) -> bool {
        true
    }
}
