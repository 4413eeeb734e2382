use nd_core::Dataset;
use nd_dataset::DatasetBuilder;
use tokio::sync::RwLock;

/// Shared server state: the pipeline and the most recent build. A new build
/// replaces the dataset wholesale.
pub struct AppState {
    pub builder: DatasetBuilder,
    pub dataset: RwLock<Option<Dataset>>,
}

impl AppState {
    pub fn new(builder: DatasetBuilder) -> Self {
        Self {
            builder,
            dataset: RwLock::new(None),
        }
    }
}
