use axum::{Json, extract::State, extract::rejection::JsonRejection};
use axum_helpers::AppError;
use rpc::auth::v1::{CheckTokenRequest, LoginRequest, SignUpRequest};

use crate::dto::{Credentials, SuccessBody, TokenBody};
use crate::state::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<TokenBody>, AppError> {
    let Json(credentials) = body?;
    let mut client = state.auth.clone();

    let response = client
        .sign_up(SignUpRequest {
            login: credentials.login,
            pass: credentials.pass,
        })
        .await?;

    Ok(Json(TokenBody {
        token: response.into_inner().token,
    }))
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<TokenBody>, AppError> {
    let Json(credentials) = body?;
    let mut client = state.auth.clone();

    let response = client
        .login(LoginRequest {
            login: credentials.login,
            pass: credentials.pass,
        })
        .await?;

    Ok(Json(TokenBody {
        token: response.into_inner().token,
    }))
}

pub async fn check_token(
    State(state): State<AppState>,
    body: Result<Json<TokenBody>, JsonRejection>,
) -> Result<Json<SuccessBody>, AppError> {
    let Json(body) = body?;
    let mut client = state.auth.clone();

    let response = client.check_token(CheckTokenRequest { token: body.token }).await?;

    Ok(Json(SuccessBody {
        success: response.into_inner().success,
    }))
}
