mod app_data_dir;
mod app_dirs_adapter;

pub use app_data_dir::{app_data_dir, APP_DIR_NAME};
pub use app_dirs_adapter::DirsAppDirsAdapter;
