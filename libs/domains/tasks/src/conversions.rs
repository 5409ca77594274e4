//! Task-specific proto ↔ domain conversions
//!
//! The wire `Task` is identical in shape to the domain one; pages map onto
//! both the unary and the streaming list responses.

use rpc::todo::v1 as proto;

use crate::models::{NewTask, Page, PageRequest, Task, Window};

// ============================================================================
// Task
// ============================================================================

impl From<Task> for proto::Task {
    fn from(task: Task) -> Self {
        proto::Task {
            id: task.id,
            status: task.status,
            description: task.description,
        }
    }
}

impl From<proto::Task> for Task {
    fn from(proto: proto::Task) -> Self {
        Task {
            id: proto.id,
            status: proto.status,
            description: proto.description,
        }
    }
}

/// A create request's id is ignored; the store assigns one.
impl From<proto::Task> for NewTask {
    fn from(proto: proto::Task) -> Self {
        NewTask {
            status: proto.status,
            description: proto.description,
        }
    }
}

// ============================================================================
// Requests (proto → domain)
// ============================================================================

impl From<proto::ListTasksRequest> for PageRequest {
    fn from(req: proto::ListTasksRequest) -> Self {
        PageRequest::new(req.limit, req.offset)
    }
}

impl From<proto::ListTasksStreamRequest> for Window {
    fn from(req: proto::ListTasksStreamRequest) -> Self {
        Window::new(req.limit, req.offset, req.concurrency)
    }
}

// ============================================================================
// Responses (domain → proto)
// ============================================================================

impl From<Page> for proto::ListTasksResponse {
    fn from(page: Page) -> Self {
        proto::ListTasksResponse {
            tasks: page.tasks.into_iter().map(Into::into).collect(),
            total: page.total,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

impl From<Page> for proto::ListTasksStreamResponse {
    fn from(page: Page) -> Self {
        proto::ListTasksStreamResponse {
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
    fn test_new_task_drops_client_id() {
        let new: NewTask = proto::Task {
            id: 42,
            status: true,
            description: "buy milk".into(),
        }
        .into();

        assert_eq!(
            new,
            NewTask {
                status: true,
                description: "buy milk".into()
            }
        );
    }

    #[test]
    fn test_stream_request_normalizes_window() {
        let window: Window = proto::ListTasksStreamRequest {
            limit: 0,
            offset: 3,
            concurrency: 0,
        }
        .into();

        assert_eq!(window, Window::new(crate::DEFAULT_LIMIT, 3, 1));
    }

    #[test]
    fn test_page_into_stream_response() {
        let page = Page {
            tasks: vec![Task {
                id: 1,
                status: false,
                description: "a".into(),
            }],
            total: 3,
            limit: 1,
            offset: 0,
        };

        let resp: proto::ListTasksStreamResponse = page.into();

        assert_eq!(resp.tasks.len(), 1);
        assert_eq!((resp.total, resp.limit, resp.offset), (3, 1, 0));
    }
}
