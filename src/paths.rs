use crate::constants::BOARD_FILE_NAME;
use directories::{ProjectDirs, UserDirs};
use std::fs;
use std::path::PathBuf;

pub struct AppPaths {
    pub config: PathBuf,
    pub exports: PathBuf,
    pub downloads: Option<PathBuf>,
}

impl AppPaths {
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "flowerboard", "FlowerBoard").map(|dirs| {
            let config = dirs.config_dir().to_path_buf();
            let exports = dirs.data_dir().join("exports");
            let downloads = UserDirs::new().and_then(|user| user.download_dir().map(PathBuf::from));

            Self {
                config,
                exports,
                downloads,
            }
        })
    }

    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config)?;
        fs::create_dir_all(&self.exports)?;
        Ok(())
    }

    pub fn board_file(&self) -> PathBuf {
        self.config.join(BOARD_FILE_NAME)
    }

    /// Where exports are written: the user's download directory, else the data directory.
    pub fn export_dir(&self) -> PathBuf {
        self.downloads
            .clone()
            .unwrap_or_else(|| self.exports.clone())
    }
}
