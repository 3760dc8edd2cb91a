use std::ffi::OsString;

/// Name of a single directory entry, kept as raw OS text.
/// Example: `00003e153.jpg`
pub type EntryName = OsString;
/// Literal suffix a candidate entry name must end with.
/// Examples: `.jpg`, `_mask.png`
pub type NameSuffix = String;
