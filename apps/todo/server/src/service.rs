use std::pin::Pin;

use domain_tasks::{PageRequest, TaskRepository, TaskService, Window};
use grpc_client::ToTonicOption;
use rpc::todo::v1::{
    CreateTaskRequest, CreateTaskResponse, DeleteTaskRequest, DeleteTaskResponse, ListTasksRequest,
    ListTasksResponse, ListTasksStreamRequest, ListTasksStreamResponse, ReadTaskRequest,
    ReadTaskResponse, UpdateTaskRequest, UpdateTaskResponse, todo_service_server::TodoService,
};
use tokio_stream::{Stream, StreamExt};
use tonic::{Request, Response, Status};

type PageStream = Pin<Box<dyn Stream<Item = Result<ListTasksStreamResponse, Status>> + Send>>;

pub struct TodoServiceImpl<R>
where
    R: TaskRepository + 'static,
{
    service: TaskService<R>,
}

impl<R> TodoServiceImpl<R>
where
    R: TaskRepository + 'static,
{
    pub fn new(service: TaskService<R>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<R> TodoService for TodoServiceImpl<R>
where
    R: TaskRepository + 'static,
{
    async fn create_task(
        &self,
        request: Request<CreateTaskRequest>,
    ) -> Result<Response<CreateTaskResponse>, Status> {
        let input = request.into_inner().task.unwrap_or_default();

        let task = self.service.create_task(input.into()).await?;

        Ok(Response::new(CreateTaskResponse {
            task: Some(task.into()),
        }))
    }

    async fn read_task(
        &self,
        request: Request<ReadTaskRequest>,
    ) -> Result<Response<ReadTaskResponse>, Status> {
        let task = self.service.get_task(request.into_inner().id).await?;

        Ok(Response::new(ReadTaskResponse {
            task: Some(task.into()),
        }))
    }

    async fn update_task(
        &self,
        request: Request<UpdateTaskRequest>,
    ) -> Result<Response<UpdateTaskResponse>, Status> {
        let input = request.into_inner().task.ok_or_invalid("task is required")?;

        let task = self.service.update_task(input.into()).await?;

        Ok(Response::new(UpdateTaskResponse {
            task: Some(task.into()),
        }))
    }

    async fn delete_task(
        &self,
        request: Request<DeleteTaskRequest>,
    ) -> Result<Response<DeleteTaskResponse>, Status> {
        self.service.delete_task(request.into_inner().id).await?;

        Ok(Response::new(DeleteTaskResponse { success: true }))
    }

    async fn list_tasks(
        &self,
        request: Request<ListTasksRequest>,
    ) -> Result<Response<ListTasksResponse>, Status> {
        let page = self
            .service
            .list_tasks(PageRequest::from(request.into_inner()))
            .await?;

        Ok(Response::new(page.into()))
    }

    type ListTasksStreamStream = PageStream;

    async fn list_tasks_stream(
        &self,
        request: Request<ListTasksStreamRequest>,
    ) -> Result<Response<Self::ListTasksStreamStream>, Status> {
        let window = Window::from(request.into_inner());

        let stream = self
            .service
            .stream_tasks(window)
            .map(|page| page.map(ListTasksStreamResponse::from).map_err(Status::from));

        Ok(Response::new(Box::pin(stream)))
    }
}
