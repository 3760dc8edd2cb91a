/// Filesystem listing and relocation helpers.
pub mod fs;
