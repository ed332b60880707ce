//! Operating system detection.

/// Operating system families the launcher distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Macos,
    Linux,
    Unknown,
}

impl Platform {
    /// Map a `std::env::consts::OS` style name onto a platform.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "windows" => Platform::Windows,
            "macos" | "darwin" => Platform::Macos,
            "linux" => Platform::Linux,
            _ => Platform::Unknown,
        }
    }
}

/// Detect the current operating system.
pub fn detect() -> Platform {
    Platform::from_os_name(std::env::consts::OS)
}
