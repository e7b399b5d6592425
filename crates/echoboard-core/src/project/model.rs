//! Project and project cache models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A project as listed on the dashboard.
///
/// Member and task lists are owned by other screens; the cache keeps them as
/// opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text status such as "yet to start" or "in progress"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_picture_url: Option<String>,
    #[serde(default)]
    pub members: Vec<Value>,
    #[serde(default)]
    pub tasks: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            status: None,
            due_date: None,
            project_picture_url: None,
            members: Vec::new(),
            tasks: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// The caller's projects, partitioned by role.
///
/// An empty cache (`admin` and `member` both empty) means "fetched, nothing
/// there". The store represents "not fetched yet" as `None`, never as an
/// empty cache.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectCache {
    /// Projects the caller owns
    #[serde(default)]
    pub admin: Vec<Project>,
    /// Projects the caller participates in
    #[serde(default)]
    pub member: Vec<Project>,
}

impl ProjectCache {
    pub fn new(admin: Vec<Project>, member: Vec<Project>) -> Self {
        Self { admin, member }
    }

    pub fn is_empty(&self) -> bool {
        self.admin.is_empty() && self.member.is_empty()
    }

    /// Total number of cached projects across both partitions.
    pub fn len(&self) -> usize {
        self.admin.len() + self.member.len()
    }

    /// Looks a project up by id in either partition, owned projects first.
    pub fn find(&self, id: i64) -> Option<&Project> {
        self.admin
            .iter()
            .chain(self.member.iter())
            .find(|project| project.id == id)
    }

    /// Returns true when no project id appears in both partitions.
    pub fn is_disjoint(&self) -> bool {
        !self
            .admin
            .iter()
            .any(|owned| self.member.iter().any(|joined| joined.id == owned.id))
    }
}
