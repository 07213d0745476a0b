use std::fs;
use std::io;
use std::path::Path;

/// Creates a folder (and any necessary parent directories) at `folder_path`.
pub fn create_folder(folder_path: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(folder_path)
}
