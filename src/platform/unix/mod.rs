//! Unix-specific platform implementations

mod filesystem;
mod paths;
mod privileges;

pub use filesystem::UnixFilesystem;
pub use paths::UnixPaths;
pub use privileges::UnixPrivileges;
