//! JSON bodies exchanged with HTTP clients.

use rpc::todo::v1 as todo;
use serde::{Deserialize, Serialize};

use axum_helpers::ErrorResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub pass: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBody {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessBody {
    pub success: bool,
}

/// Writable task fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskInput {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskJson {
    pub id: i64,
    pub status: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskBody {
    pub task: Option<TaskJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBody {
    pub tasks: Vec<TaskJson>,
    pub total: u32,
    /// Effective page size: 100 when the request asked for 0
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamQuery {
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub concurrency: u32,
}

/// One line of the NDJSON export
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamLine {
    Result(PageBody),
    Error(ErrorResponse),
}

impl From<todo::Task> for TaskJson {
    fn from(task: todo::Task) -> Self {
        Self {
            id: task.id,
            status: task.status,
            description: task.description,
        }
    }
}

impl TaskInput {
    pub fn into_task(self, id: i64) -> todo::Task {
        todo::Task {
            id,
            status: self.status,
            description: self.description,
        }
    }
}

impl From<Option<todo::Task>> for TaskBody {
    fn from(task: Option<todo::Task>) -> Self {
        Self {
            task: task.map(Into::into),
        }
    }
}

impl From<todo::ListTasksResponse> for PageBody {
    fn from(page: todo::ListTasksResponse) -> Self {
        Self {
            tasks: page.tasks.into_iter().map(Into::into).collect(),
            total: page.total,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

impl From<todo::ListTasksStreamResponse> for PageBody {
    fn from(page: todo::ListTasksStreamResponse) -> Self {
        Self {
            tasks: page.tasks.into_iter().map(Into::into).collect(),
            total: page.total,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_line_shape() {
        let line = StreamLine::Result(PageBody {
            tasks: vec![],
            total: 3,
            limit: 1,
            offset: 2,
        });

        let json = serde_json::to_value(&line).unwrap();

        assert_eq!(json["result"]["offset"], 2);
        assert_eq!(json["result"]["total"], 3);
    }

    #[test]
    fn test_task_input_defaults() {
        let input: TaskInput = serde_json::from_str("{}").unwrap();
        assert!(!input.status);
        assert!(input.description.is_empty());
    }
}
