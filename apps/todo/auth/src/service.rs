use domain_users::{UserRepository, UserService};
use rpc::auth::v1::{
    CheckTokenRequest, CheckTokenResponse, LoginRequest, LoginResponse, SignUpRequest,
    SignUpResponse, auth_service_server::AuthService,
};
use tonic::{Request, Response, Status};

pub struct AuthServiceImpl<R>
where
    R: UserRepository + 'static,
{
    service: UserService<R>,
}

impl<R> AuthServiceImpl<R>
where
    R: UserRepository + 'static,
{
    pub fn new(service: UserService<R>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<R> AuthService for AuthServiceImpl<R>
where
    R: UserRepository + 'static,
{
    async fn sign_up(
        &self,
        request: Request<SignUpRequest>,
    ) -> Result<Response<SignUpResponse>, Status> {
        let req = request.into_inner();

        let token = self.service.sign_up(&req.login, &req.pass).await?;

        Ok(Response::new(SignUpResponse { token }))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();

        let token = self.service.login(&req.login, &req.pass).await?;

        Ok(Response::new(LoginResponse { token }))
    }

    async fn check_token(
        &self,
        request: Request<CheckTokenRequest>,
    ) -> Result<Response<CheckTokenResponse>, Status> {
        let success = self.service.check_token(&request.into_inner().token).await?;

        Ok(Response::new(CheckTokenResponse { success }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_users::{
        CREATE_USER_TABLE, JwtSecret, SqliteUserRepository, TokenConfig, TokenService,
    };
    use test_utils::TestDatabase;
    use tonic::Code;

    type Svc = AuthServiceImpl<SqliteUserRepository>;

    async fn service() -> (TestDatabase, Svc) {
        let db = TestDatabase::new(&[CREATE_USER_TABLE]).await;
        let tokens = TokenService::new(&JwtSecret::generate(), TokenConfig::default());
        let users = UserService::new(SqliteUserRepository::new(db.connection()), tokens);
        (db, AuthServiceImpl::new(users))
    }

    fn credentials(login: &str, pass: &str) -> (String, String) {
        (login.to_string(), pass.to_string())
    }

    async fn sign_up(svc: &Svc, login: &str, pass: &str) -> Result<String, Status> {
        let (login, pass) = credentials(login, pass);
        svc.sign_up(Request::new(SignUpRequest { login, pass }))
            .await
            .map(|r| r.into_inner().token)
    }

    async fn login(svc: &Svc, login: &str, pass: &str) -> Result<String, Status> {
        let (login, pass) = credentials(login, pass);
        svc.login(Request::new(LoginRequest { login, pass }))
            .await
            .map(|r| r.into_inner().token)
    }

    async fn check(svc: &Svc, token: &str) -> Result<bool, Status> {
        svc.check_token(Request::new(CheckTokenRequest { token: token.into() }))
            .await
            .map(|r| r.into_inner().success)
    }

    #[tokio::test]
    async fn test_sign_up_and_login_tokens_are_valid() {
        let (_db, svc) = service().await;

        let signed_up = sign_up(&svc, "admin", "qwerty").await.unwrap();
        let logged_in = login(&svc, "admin", "qwerty").await.unwrap();

        assert!(check(&svc, &signed_up).await.unwrap());
        assert!(check(&svc, &logged_in).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_sign_up_is_unknown() {
        let (_db, svc) = service().await;
        sign_up(&svc, "admin", "qwerty").await.unwrap();

        let status = sign_up(&svc, "admin", "other").await.unwrap_err();

        assert_eq!(status.code(), Code::Unknown);
    }

    #[tokio::test]
    async fn test_bad_login_is_not_found() {
        let (_db, svc) = service().await;

        assert_eq!(login(&svc, "admin", "qwerty").await.unwrap_err().code(), Code::NotFound);

        sign_up(&svc, "admin", "qwerty").await.unwrap();
        let status = login(&svc, "admin", "wrong").await.unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "user not found");
    }

    #[tokio::test]
    async fn test_check_token_errors() {
        let (_db, svc) = service().await;
        let token = sign_up(&svc, "admin", "qwerty").await.unwrap();

        assert_eq!(check(&svc, "").await.unwrap_err().code(), Code::InvalidArgument);
        assert_eq!(check(&svc, &format!("{token}x")).await.unwrap_err().code(), Code::Unknown);
    }
}
