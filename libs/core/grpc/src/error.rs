use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors raised while building client channels
#[derive(Error, Debug)]
pub enum GrpcError {
    /// Invalid URI provided for connection
    #[error("Invalid URI: {0}")]
    InvalidUri(#[source] tonic::transport::Error),
}

/// Extension trait for Option types to convert None to tonic::Status errors
///
/// # Example
/// ```ignore
/// use grpc_client::error::ToTonicOption;
///
/// let task = request.task.ok_or_invalid("task is required")?;
/// ```
pub trait ToTonicOption<T> {
    /// Convert None to a tonic::Status with INVALID_ARGUMENT code
    fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status>;
}

impl<T> ToTonicOption<T> for Option<T> {
    fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status> {
        self.ok_or_else(|| tonic::Status::invalid_argument(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversions() {
        let missing: Option<u8> = None;
        let status = missing.ok_or_invalid("task is required").unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "task is required");

        assert_eq!(Some(7u8).ok_or_invalid("unused").unwrap(), 7);
    }
}
