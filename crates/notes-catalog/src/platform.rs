use std::path::PathBuf;

pub fn data_dir() -> PathBuf {
    // Use ~/.local/share/sonic-notes/ (XDG standard) on unix for
    // consistency across macOS and Linux.
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".local")
            .join("share")
            .join("sonic-notes")
    }
    #[cfg(windows)]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sonic-notes")
    }
}

pub fn config_dir() -> PathBuf {
    // Always ~/.config/sonic-notes/ on unix (avoid the macOS Application
    // Support folder for consistency).
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("sonic-notes")
    }
    #[cfg(windows)]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sonic-notes")
    }
}
