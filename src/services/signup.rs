use std::time::Duration;

use actix_web::HttpRequest;
use actix_web::http::header;
use validator::Validate;

use crate::dto::WebhookPayload;
use crate::forms::main::SignupForm;
use crate::models::config::AppConfig;
use crate::services::{ServiceError, ServiceResult};

// A hung webhook endpoint must not hold a request forever.
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

pub const MSG_MISSING_FIELDS: &str = "Por favor, preencha todos os campos obrigatórios.";
pub const MSG_INVALID_WHATSAPP: &str = "Por favor, insira um número de WhatsApp válido.";

/// Caller metadata forwarded alongside the signup fields.
#[derive(Clone, Debug, Default)]
pub struct RequestMeta {
    pub ip: String,
    pub user_agent: String,
}

impl RequestMeta {
    pub fn from_request(req: &HttpRequest) -> Self {
        let ip = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();
        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Self { ip, user_agent }
    }
}

/// Service validating signup submissions and forwarding them to the
/// configured webhook.
#[derive(Clone, Debug)]
pub struct SignupService {
    client: reqwest::Client,
}

impl SignupService {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Validate the form, enrich it with request metadata and deliver it
    /// to the webhook. Exactly one outbound call on success; none on
    /// validation failure.
    pub async fn process(
        &self,
        form: SignupForm,
        meta: RequestMeta,
        config: &AppConfig,
    ) -> ServiceResult<()> {
        if form.has_missing_fields() {
            return Err(ServiceError::Validation(MSG_MISSING_FIELDS.into()));
        }
        // Presence already checked; only the WhatsApp rule can fail here.
        form.validate()
            .map_err(|_| ServiceError::Validation(MSG_INVALID_WHATSAPP.into()))?;

        let payload = WebhookPayload::new(form, meta);
        let response = self
            .client
            .post(&config.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(ServiceError::WebhookDelivery)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::WebhookStatus(status));
        }

        Ok(())
    }
}
