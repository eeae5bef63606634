//! Output path helpers

use std::path::{Path, PathBuf};

/// Extension every clip is written with
pub const CLIP_EXTENSION: &str = "mp4";

/// File name for the 1-based clip number
pub fn clip_file_name(index: usize) -> String {
    format!("clip_{}.{}", index, CLIP_EXTENSION)
}

/// Full output path for the 1-based clip number inside `output_folder`
pub fn clip_path(output_folder: &Path, index: usize) -> PathBuf {
    output_folder.join(clip_file_name(index))
}
