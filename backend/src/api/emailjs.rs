use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::api::mailer::{EnquiryMailer, MailError};
use crate::config::emailjs::EmailJsConfig;
use crate::models::enquiry_models::TemplateParams;

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

pub struct EmailJsClient {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, MailError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl EnquiryMailer for EmailJsClient {
    async fn send(&self, params: TemplateParams) -> Result<(), MailError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: &params,
        };

        debug!("Posting enquiry from {} to EmailJS", params.from_email);
        let response = self
            .client
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("EmailJS accepted enquiry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::net::TcpListener;

    use crate::models::enquiry_models::{EnquiryRecord, Extras, WorkType};

    fn params() -> TemplateParams {
        let record = EnquiryRecord {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            class_name: "10th CBSE".to_string(),
            work_type: WorkType::Assignment,
            subject: "History".to_string(),
            deadline: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            pages: 8,
            extras: Extras::None,
            instructions: None,
        };
        TemplateParams::new(&record, "owner@example.com", "19/10/2026, 10:15:00")
    }

    fn config(api_url: String, private_key: Option<&str>) -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "public_1".to_string(),
            private_key: private_key.map(str::to_string),
            recipient: "owner@example.com".to_string(),
            api_url,
            timeout: Duration::from_millis(300),
        }
    }

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/send", addr)
    }

    #[tokio::test]
    async fn posts_credentials_and_template_params() {
        let captured = Arc::new(Mutex::new(None::<Value>));
        let sink = captured.clone();
        let app = Router::new().route(
            "/send",
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    "OK"
                }
            }),
        );
        let url = serve(app).await;

        let client = EmailJsClient::new(config(url, Some("secret"))).unwrap();
        client.send(params()).await.unwrap();

        let body = captured.lock().unwrap().clone().unwrap();
        assert_eq!(body["service_id"], "service_1");
        assert_eq!(body["template_id"], "template_1");
        assert_eq!(body["user_id"], "public_1");
        assert_eq!(body["accessToken"], "secret");
        assert_eq!(body["template_params"]["to_email"], "owner@example.com");
        assert_eq!(body["template_params"]["from_name"], "Asha");
    }

    #[tokio::test]
    async fn omits_access_token_without_private_key() {
        let captured = Arc::new(Mutex::new(None::<Value>));
        let sink = captured.clone();
        let app = Router::new().route(
            "/send",
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    "OK"
                }
            }),
        );
        let url = serve(app).await;

        let client = EmailJsClient::new(config(url, None)).unwrap();
        client.send(params()).await.unwrap();

        let body = captured.lock().unwrap().clone().unwrap();
        assert!(body.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_rejected() {
        let app = Router::new().route(
            "/send",
            post(|| async { (StatusCode::BAD_REQUEST, "The template ID is invalid") }),
        );
        let url = serve(app).await;

        let client = EmailJsClient::new(config(url, None)).unwrap();
        let err = client.send(params()).await.unwrap_err();

        match err {
            MailError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The template ID is invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let app = Router::new().route(
            "/send",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "OK"
            }),
        );
        let url = serve(app).await;

        let client = EmailJsClient::new(config(url, None)).unwrap();
        let err = client.send(params()).await.unwrap_err();

        assert!(matches!(err, MailError::Timeout), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = EmailJsClient::new(config(format!("http://{}/send", addr), None)).unwrap();
        let err = client.send(params()).await.unwrap_err();

        assert!(matches!(err, MailError::Transport(_)), "got {err:?}");
    }
}
