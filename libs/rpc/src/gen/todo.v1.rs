// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Task {
    #[prost(int64, tag="1")]
    pub id: i64,
    #[prost(bool, tag="2")]
    pub status: bool,
    #[prost(string, tag="3")]
    pub description: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateTaskRequest {
    #[prost(message, optional, tag="1")]
    pub task: ::core::option::Option<Task>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateTaskResponse {
    #[prost(message, optional, tag="1")]
    pub task: ::core::option::Option<Task>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ReadTaskRequest {
    #[prost(int64, tag="1")]
    pub id: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ReadTaskResponse {
    #[prost(message, optional, tag="1")]
    pub task: ::core::option::Option<Task>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UpdateTaskRequest {
    #[prost(message, optional, tag="1")]
    pub task: ::core::option::Option<Task>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UpdateTaskResponse {
    #[prost(message, optional, tag="1")]
    pub task: ::core::option::Option<Task>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteTaskRequest {
    #[prost(int64, tag="1")]
    pub id: i64,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteTaskResponse {
    #[prost(bool, tag="1")]
    pub success: bool,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListTasksRequest {
    /// Zero selects the server default (100).
    #[prost(uint32, tag="1")]
    pub limit: u32,
    #[prost(uint32, tag="2")]
    pub offset: u32,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListTasksResponse {
    #[prost(message, repeated, tag="1")]
    pub tasks: ::prost::alloc::vec::Vec<Task>,
    #[prost(uint32, tag="2")]
    pub total: u32,
    /// Effective page size: a request limit of zero is reported as 100.
    #[prost(uint32, tag="3")]
    pub limit: u32,
    #[prost(uint32, tag="4")]
    pub offset: u32,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListTasksStreamRequest {
    /// Zero selects the server default (100).
    #[prost(uint32, tag="1")]
    pub limit: u32,
    #[prost(uint32, tag="2")]
    pub offset: u32,
    /// Range queries per window. Zero selects 1.
    #[prost(uint32, tag="3")]
    pub concurrency: u32,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListTasksStreamResponse {
    #[prost(message, repeated, tag="1")]
    pub tasks: ::prost::alloc::vec::Vec<Task>,
    #[prost(uint32, tag="2")]
    pub total: u32,
    /// Effective page size: a request limit of zero is reported as 100.
    #[prost(uint32, tag="3")]
    pub limit: u32,
    #[prost(uint32, tag="4")]
    pub offset: u32,
}
include!("todo.v1.tonic.rs");
// @@protoc_insertion_point(module)
