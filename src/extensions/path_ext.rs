use std::path::Path;

pub trait FileName {
    /// Returns the final component of the path as a string, or `"unknown"` when it has none.
    fn string_file_name(&self) -> &str;
}

impl FileName for Path {
    fn string_file_name(&self) -> &str {
        self.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
    }
}
