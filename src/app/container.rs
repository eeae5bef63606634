use std::sync::Arc;

use crate::adapters::{FfmpegTrimAdapter, LocalFsAdapter};
use crate::app::split_interactor::SplitInteractor;
use crate::config::SplitConfig;
use crate::ports::{FsPort, TrimPort};

/// Wires the production adapters into the interactor
pub struct AppContainer {
    split_interactor: Arc<SplitInteractor>,
}

impl AppContainer {
    pub fn new(config: SplitConfig) -> Self {
        let trim_port = Arc::new(FfmpegTrimAdapter::new(config.ffmpeg_path.clone()));
        let fs_port = Arc::new(LocalFsAdapter::new());

        let split_interactor = Arc::new(SplitInteractor::new(
            trim_port as Arc<dyn TrimPort>,
            fs_port as Arc<dyn FsPort>,
            config,
        ));

        Self { split_interactor }
    }

    pub fn split_interactor(&self) -> Arc<SplitInteractor> {
        Arc::clone(&self.split_interactor)
    }
}
