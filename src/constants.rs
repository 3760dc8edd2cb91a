/// Constants used as the default selection parameters.
pub mod selection {
    /// Directory the candidate images are read from, relative to the working directory.
    pub const DEFAULT_SOURCE_DIR: &str = "airbus-ship-detection/train_v2";
    /// Directory the sampled images are moved into, relative to the working directory.
    pub const DEFAULT_TARGET_DIR: &str = "selected";
    /// Number of images moved per run.
    pub const DEFAULT_SAMPLE_COUNT: usize = 10;
    /// Case-sensitive name suffix a candidate must end with.
    pub const DEFAULT_SUFFIX: &str = ".jpg";
}

/// Constants used by the command-line runner.
pub mod app {
    /// Binary name reported in usage and help output.
    pub const BIN_NAME: &str = "image-sampler";
}
