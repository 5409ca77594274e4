use tonic::{Request, Status};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Stamps outgoing calls with an `x-request-id` for log correlation.
///
/// An id already present on the request is kept.
#[derive(Clone, Debug, Default)]
pub struct RequestIdInterceptor;

impl RequestIdInterceptor {
    pub fn new() -> Self {
        Self
    }
}

impl tonic::service::Interceptor for RequestIdInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        if request.metadata().contains_key(REQUEST_ID_HEADER) {
            return Ok(request);
        }

        let request_id = uuid::Uuid::new_v4().to_string();
        request.metadata_mut().insert(
            REQUEST_ID_HEADER,
            request_id
                .parse()
                .map_err(|_| Status::internal("Failed to create request ID"))?,
        );

        tracing::debug!(target: "grpc_client", request_id = %request_id, "Outgoing gRPC request");

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn test_inserts_uuid_request_id() {
        let req = RequestIdInterceptor::new().call(Request::new(())).unwrap();
        let id = req.metadata().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_keeps_existing_request_id() {
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert(REQUEST_ID_HEADER, "upstream-id".parse().unwrap());

        let req = RequestIdInterceptor::new().call(request).unwrap();
        assert_eq!(req.metadata().get(REQUEST_ID_HEADER).unwrap(), "upstream-id");
    }
}
