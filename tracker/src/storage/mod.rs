//! Storage layer for task persistence.
//!
//! [`Storage`] implementations move raw records; [`load`] and [`save`] apply
//! the "never crash on bad data" policy on top of them.

use std::collections::BTreeSet;

use tracing::{error, warn};

use crate::entities::Task;

mod file;
mod traits;

pub use file::FileStorage;
pub use traits::Storage;

/// Result of loading the stored collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedTasks {
    /// Successfully built tasks, in stored order
    pub tasks: Vec<Task>,
    /// Categories of the tasks above
    pub categories: BTreeSet<String>,
}

/// Load every valid task from `storage`.
///
/// Read or parse failures degrade to an empty collection. Records that fail
/// validation are skipped individually, as are records holding the largest
/// possible id since no id could follow them.
pub async fn load(storage: &dyn Storage) -> LoadedTasks {
    let records = match storage.read_records().await {
        Ok(records) => records,
        Err(e) => {
            warn!(location = %storage.location(), error = %e, "Could not load tasks, starting empty");
            return LoadedTasks::default();
        }
    };

    let mut loaded = LoadedTasks::default();
    for record in records {
        match serde_json::from_value::<Task>(record.clone()) {
            Ok(task) if task.id() == u64::MAX => {
                warn!(%record, "Skipping task record with an id that cannot be followed");
            }
            Ok(task) => {
                loaded.categories.insert(task.category().to_string());
                loaded.tasks.push(task);
            }
            Err(e) => warn!(%record, error = %e, "Skipping invalid task record"),
        }
    }

    loaded
}

/// Persist the whole collection, replacing what was stored.
///
/// Failures are reported and swallowed; the caller's in-memory collection
/// stays authoritative.
pub async fn save(storage: &dyn Storage, tasks: &[Task]) {
    if let Err(e) = storage.write_tasks(tasks).await {
        error!(location = %storage.location(), error = %e, "Failed to save tasks");
    }
}
