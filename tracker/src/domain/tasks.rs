//! Task manager: the in-memory collection and its operations.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::entities::{capitalize, parse_deadline, Priority, Status, Task};
use crate::errors::{TasksError, TasksResult};
use crate::storage::{self, Storage};

/// Filter criteria, combined with AND. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub id: Option<u64>,
    pub keywords: Vec<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.status.is_none()
            && self.id.is_none()
            && self.keywords.is_empty()
    }
}

/// Fields to change on `modify`. `None` and empty strings leave a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

fn provided(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Owns the task collection for one invocation and saves after every change
pub struct TaskManager {
    storage: Arc<dyn Storage>,
    tasks: Vec<Task>,
    /// Categories seen since startup. Never pruned on delete.
    categories: BTreeSet<String>,
    next_id: u64,
}

impl TaskManager {
    /// Load the stored collection and build a manager over it
    pub async fn open(storage: Arc<dyn Storage>) -> Self {
        let loaded = storage::load(storage.as_ref()).await;
        let next_id = loaded
            .tasks
            .iter()
            .map(Task::id)
            .max()
            .map_or(1, |max| max.saturating_add(1));

        debug!(
            tasks = loaded.tasks.len(),
            categories = loaded.categories.len(),
            next_id,
            storage = storage.storage_type(),
            "Opened task manager"
        );

        Self {
            storage,
            tasks: loaded.tasks,
            categories: loaded.categories,
            next_id,
        }
    }

    /// All tasks in collection order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Id the next created task will get
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks matching every criterion of `filter`, in collection order
    pub fn filter(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.matching_indices(filter)
            .into_iter()
            .map(|idx| &self.tasks[idx])
            .collect()
    }

    fn matching_indices(&self, filter: &TaskFilter) -> Vec<usize> {
        if self.tasks.is_empty() {
            return Vec::new();
        }
        if filter.is_empty() {
            return (0..self.tasks.len()).collect();
        }

        let category = match &filter.category {
            Some(raw) => {
                let category = capitalize(raw);
                // The cache is trusted: an unknown category matches nothing.
                if !self.categories.contains(&category) {
                    return Vec::new();
                }
                Some(category)
            }
            None => None,
        };
        let status = filter.status.as_deref().map(capitalize);

        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| category.as_deref().map_or(true, |c| task.category == c))
            .filter(|(_, task)| status.as_deref().map_or(true, |s| task.status.as_str() == s))
            .filter(|(_, task)| filter.id.map_or(true, |id| task.id == id))
            .filter(|(_, task)| {
                filter.keywords.is_empty() || task.matches_keywords(filter.keywords.as_slice())
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Tasks that are still in work
    pub fn list_current(&self) -> Vec<&Task> {
        self.filter(&TaskFilter::new().with_status(Status::InWork.as_str()))
    }

    /// Create an in-work task and save the collection.
    ///
    /// The deadline must be today or later. Text fields are capitalized.
    /// Fails with [`TasksError::IdsExhausted`] once the id counter reaches
    /// `u64::MAX`.
    pub async fn create(
        &mut self,
        title: &str,
        description: &str,
        category: &str,
        deadline: &str,
        priority: &str,
    ) -> TasksResult<Task> {
        let deadline = parse_deadline(deadline)?;
        if deadline < today() {
            return Err(TasksError::DeadlineInPast {
                deadline: deadline.to_string(),
            });
        }
        let priority: Priority = priority.parse()?;
        let following_id = self
            .next_id
            .checked_add(1)
            .ok_or(TasksError::IdsExhausted)?;

        let task = Task::new(
            self.next_id,
            capitalize(title),
            capitalize(description),
            capitalize(category),
            deadline,
            priority,
        );

        self.categories.insert(task.category.clone());
        self.next_id = following_id;
        self.tasks.push(task.clone());
        info!(id = task.id, category = %task.category, "Task created");

        self.persist().await;
        Ok(task)
    }

    /// Apply `changes` to every task with `id` and save.
    ///
    /// Returns how many tasks were modified. Duplicated ids are all updated.
    pub async fn modify(&mut self, id: u64, changes: &TaskChanges) -> TasksResult<usize> {
        if id >= self.next_id {
            return Err(TasksError::TaskNotFound { task_id: id });
        }

        let priority = provided(changes.priority.as_ref())
            .map(str::parse::<Priority>)
            .transpose()?;
        let status = provided(changes.status.as_ref())
            .map(str::parse::<Status>)
            .transpose()?;
        let title = provided(changes.title.as_ref());
        let description = provided(changes.description.as_ref());

        let mut modified = 0;
        for task in self.tasks.iter_mut().filter(|task| task.id == id) {
            if let Some(title) = title {
                task.title = title.to_string();
            }
            if let Some(description) = description {
                task.description = description.to_string();
            }
            if let Some(priority) = priority {
                task.priority = priority;
            }
            if let Some(status) = status {
                task.status = status;
            }
            modified += 1;
        }

        if modified == 0 {
            return Err(TasksError::NoTasksFound);
        }

        info!(id, modified, "Tasks modified");
        self.persist().await;
        Ok(modified)
    }

    /// Delete tasks matching `id` and `category` and save.
    ///
    /// With neither filter every task is deleted. An id of 0 and an empty
    /// category count as not given. Returns how many tasks were removed.
    pub async fn delete(&mut self, id: Option<u64>, category: Option<&str>) -> TasksResult<usize> {
        let mut filter = TaskFilter::new();
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            filter = filter.with_category(category);
        }
        if let Some(id) = id.filter(|id| *id != 0) {
            filter = filter.with_id(id);
        }

        let doomed = self.matching_indices(&filter);

        if doomed.is_empty() {
            return Err(TasksError::NoTasksFound);
        }

        let mut idx = 0;
        self.tasks.retain(|_| {
            let keep = !doomed.contains(&idx);
            idx += 1;
            keep
        });

        info!(deleted = doomed.len(), remaining = self.tasks.len(), "Tasks deleted");
        self.persist().await;
        Ok(doomed.len())
    }

    async fn persist(&self) {
        storage::save(self.storage.as_ref(), &self.tasks).await;
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
