use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::forms::main::SignupForm;
use crate::models::config::AppConfig;
use crate::services::signup::RequestMeta;

/// Client-facing view of the effective configuration.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    pub webhook_url: String,
    pub app_title: String,
    pub app_subtitle: String,
    pub app_description: String,
    pub free_trial_days: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub redirect_url: String,
}

impl From<&AppConfig> for ConfigDto {
    fn from(config: &AppConfig) -> Self {
        Self {
            webhook_url: config.webhook_url.clone(),
            app_title: config.app_title.clone(),
            app_subtitle: config.app_subtitle.clone(),
            app_description: config.app_description.clone(),
            free_trial_days: config.free_trial_days.clone(),
            redirect_url: config.redirect_url.clone(),
        }
    }
}

/// JSON envelope shared by the signup and reload endpoints.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, redirect_url: Option<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            redirect_url,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            redirect_url: None,
        }
    }
}

/// Signup submission enriched with request metadata before forwarding.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub company: String,
    pub email: String,
    pub password: String,
    pub username: String,
    pub whatsapp: String,
    pub terms_accepted: bool,
    pub timestamp: String,
    pub ip: String,
    pub user_agent: String,
}

impl WebhookPayload {
    pub fn new(form: SignupForm, meta: RequestMeta) -> Self {
        Self {
            company: form.company,
            email: form.email,
            password: form.password,
            username: form.username,
            whatsapp: form.whatsapp,
            terms_accepted: form.terms_accepted,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            ip: meta.ip,
            user_agent: meta.user_agent,
        }
    }
}
