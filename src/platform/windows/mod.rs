//! Windows-specific platform implementations

mod filesystem;
mod paths;
mod privileges;

pub use filesystem::WindowsFilesystem;
pub use paths::WindowsPaths;
pub use privileges::WindowsPrivileges;
