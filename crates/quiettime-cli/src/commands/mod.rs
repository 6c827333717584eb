pub mod config;
pub mod pick;
pub mod ringer;
pub mod status;

use std::path::PathBuf;

use quiettime_core::storage::data_dir;

use crate::host::StateFile;

/// Host state file inside the data directory.
pub(crate) fn state_file() -> std::io::Result<StateFile> {
    let path: PathBuf = data_dir()?.join("state.json");
    Ok(StateFile::new(&path))
}
