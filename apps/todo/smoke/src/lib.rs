//! Smoke scenario against the HTTP gateway.
//!
//! Each step sends one request and compares the response status with the
//! expected one. Steps never abort the run; the [`Report`] collects them all.

use std::fmt;

use clap::Parser;
use eyre::WrapErr;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-smoke")]
#[command(about = "Replay the todo compatibility scenario against a gateway")]
pub struct Config {
    /// Gateway base URL
    #[arg(long, env = "SMOKE_GATEWAY", default_value = "http://127.0.0.1:8080")]
    pub gateway: String,
}

/// Outcome of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub expected: StatusCode,
    /// `None` when no response arrived at all
    pub actual: Option<StatusCode>,
    pub detail: String,
}

impl Step {
    pub fn passed(&self) -> bool {
        self.actual == Some(self.expected)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            write!(f, "PASS  {}", self.name)
        } else {
            let actual = self
                .actual
                .map_or_else(|| "no response".to_string(), |s| s.as_u16().to_string());
            write!(
                f,
                "ERROR {}: expected {}, got {} {}",
                self.name,
                self.expected.as_u16(),
                actual,
                self.detail
            )
        }
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub steps: Vec<Step>,
}

impl Report {
    pub fn failed(&self) -> usize {
        self.steps.iter().filter(|s| !s.passed()).count()
    }

    pub fn is_success(&self) -> bool {
        !self.steps.is_empty() && self.failed() == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        write!(f, "{} passed, {} failed", self.steps.len() - self.failed(), self.failed())
    }
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Debug, Deserialize)]
struct TaskBody {
    task: Option<TaskJson>,
}

#[derive(Debug, Deserialize)]
struct TaskJson {
    id: i64,
}

struct Response {
    status: Option<StatusCode>,
    body: Value,
    detail: String,
}

pub struct Scenario {
    client: Client,
    base: Url,
    report: Report,
}

impl Scenario {
    pub fn new(gateway: &str) -> eyre::Result<Self> {
        let base = Url::parse(gateway).wrap_err_with(|| format!("Invalid gateway URL {gateway}"))?;
        Ok(Self {
            client: Client::new(),
            base,
            report: Report::default(),
        })
    }

    /// Run every step and return the report.
    ///
    /// The login is derived from the process id so reruns against the same
    /// database do not collide.
    pub async fn run(mut self) -> Report {
        let login = format!("smoke-{}", std::process::id());
        let credentials = json!({ "login": login, "pass": "smoke-pass" });
        let wrong = json!({ "login": login, "pass": "not-the-pass" });
        let task = json!({ "status": false, "description": "smoke task" });

        self.step(
            "login before sign-up",
            Method::POST,
            "/v1/auth/login",
            None,
            Some(&credentials),
            StatusCode::NOT_FOUND,
        )
        .await;
        self.step(
            "sign-up",
            Method::POST,
            "/v1/auth/sign-up",
            None,
            Some(&credentials),
            StatusCode::OK,
        )
        .await;
        self.step(
            "login with wrong password",
            Method::POST,
            "/v1/auth/login",
            None,
            Some(&wrong),
            StatusCode::NOT_FOUND,
        )
        .await;
        let logged_in = self
            .step(
                "login",
                Method::POST,
                "/v1/auth/login",
                None,
                Some(&credentials),
                StatusCode::OK,
            )
            .await;
        let token = serde_json::from_value::<TokenBody>(logged_in.body)
            .map(|b| b.token)
            .unwrap_or_default();

        self.step(
            "duplicate sign-up",
            Method::POST,
            "/v1/auth/sign-up",
            None,
            Some(&credentials),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .await;
        self.step(
            "check token",
            Method::POST,
            "/v1/auth/check",
            None,
            Some(&json!({ "token": token })),
            StatusCode::OK,
        )
        .await;
        let forged = json!({ "token": tamper(&token) });
        self.step(
            "check tampered token",
            Method::POST,
            "/v1/auth/check",
            None,
            Some(&forged),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .await;

        let auth = Some(token.as_str());
        self.step(
            "create without token",
            Method::POST,
            "/v1/todo",
            None,
            Some(&task),
            StatusCode::FORBIDDEN,
        )
        .await;
        self.step(
            "create with bogus token",
            Method::POST,
            "/v1/todo",
            Some("bogus"),
            Some(&task),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .await;
        self.step(
            "read missing task",
            Method::GET,
            "/v1/todo/0",
            auth,
            None,
            StatusCode::NOT_FOUND,
        )
        .await;

        let created = self
            .step(
                "create",
                Method::POST,
                "/v1/todo",
                auth,
                Some(&task),
                StatusCode::OK,
            )
            .await;
        let id = serde_json::from_value::<TaskBody>(created.body)
            .ok()
            .and_then(|b| b.task)
            .map_or(0, |t| t.id);
        let path = format!("/v1/todo/{id}");
        let done = json!({ "status": true, "description": "smoke task done" });

        self.step("read", Method::GET, &path, auth, None, StatusCode::OK).await;
        self.step("update", Method::PUT, &path, auth, Some(&done), StatusCode::OK).await;
        self.step("delete", Method::DELETE, &path, auth, None, StatusCode::OK).await;
        self.step(
            "update deleted task",
            Method::PUT,
            &path,
            auth,
            Some(&done),
            StatusCode::NOT_FOUND,
        )
        .await;

        self.step(
            "list without token",
            Method::GET,
            "/v1/todo?limit=10",
            None,
            None,
            StatusCode::FORBIDDEN,
        )
        .await;
        self.step(
            "list",
            Method::GET,
            "/v1/todo?limit=10",
            auth,
            None,
            StatusCode::OK,
        )
        .await;

        self.report
    }

    async fn step(
        &mut self,
        name: &'static str,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&Value>,
        expected: StatusCode,
    ) -> Response {
        let response = self.send(method, path, token, body).await;
        let step = Step {
            name,
            expected,
            actual: response.status,
            detail: response.detail.clone(),
        };

        if step.passed() {
            debug!(step = name, "Step passed");
        } else {
            warn!(step = name, expected = %expected, actual = ?response.status, "Step failed");
        }
        self.report.steps.push(step);
        response
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> Response {
        let url = match self.base.join(path) {
            Ok(url) => url,
            Err(e) => return Response::failed(format!("bad path {path}: {e}")),
        };

        let mut request = self.client.request(method, url);
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                let body = response.json::<Value>().await.unwrap_or(Value::Null);
                let detail = body
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Response {
                    status: Some(status),
                    body,
                    detail,
                }
            }
            Err(e) => Response::failed(e.to_string()),
        }
    }
}

impl Response {
    fn failed(detail: String) -> Self {
        Self {
            status: None,
            body: Value::Null,
            detail,
        }
    }
}

/// Flip the last character of a token so its signature no longer matches.
pub fn tamper(token: &str) -> String {
    let mut forged = token.to_string();
    match forged.pop() {
        Some('A') => forged.push('B'),
        Some(_) => forged.push('A'),
        None => forged.push_str("forged"),
    }
    forged
}
