use crate::model::command::ApplicationCommand;
use crate::model::discord::Message;
use crate::model::errors::DiscordError;
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::discord::{channel_messages_endpoint, original_response_endpoint};
use crate::shared::HTTP_CLIENT;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retries allowed after the first rate-limited attempt.
pub const MAX_RATE_LIMIT_RETRIES: u32 = 10;
const DEFAULT_RETRY_AFTER_SECONDS: f64 = 1.0;
const USER_AGENT_VALUE: &str = concat!(
    "DiscordBot (embed-exporter, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

#[derive(Deserialize)]
struct RateLimitBody {
    retry_after: Option<f64>,
}

#[derive(Clone)]
pub struct DiscordClient<C = SystemClock> {
    http: reqwest::Client,
    base_url: String,
    token: String,
    clock: C,
}

impl DiscordClient<SystemClock> {
    pub fn new<S: Into<String>, T: Into<String>>(base_url: S, token: T) -> Self {
        DiscordClient::with_clock(base_url, token, SystemClock)
    }
}

impl<C: Clock> DiscordClient<C> {
    pub fn with_clock<S: Into<String>, T: Into<String>>(base_url: S, token: T, clock: C) -> Self {
        DiscordClient {
            http: HTTP_CLIENT.clone(),
            base_url: base_url.into(),
            token: token.into(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub async fn request(&self, method: Method, endpoint: &str) -> Result<Response, DiscordError> {
        self.request_with_body::<()>(method, endpoint, None).await
    }

    /// Issues an authenticated call, sleeping out 429 responses until the
    /// retry ceiling is hit.
    pub async fn request_with_body<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Response, DiscordError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        let mut retries = 0_u32;

        loop {
            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(AUTHORIZATION, format!("Bot {}", self.token))
                .header(CONTENT_TYPE, "application/json; charset=UTF-8")
                .header(USER_AGENT, USER_AGENT_VALUE);
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                retries += 1;
                if retries > MAX_RATE_LIMIT_RETRIES {
                    tracing::error!("Too many rate limit retries for {} {}", method, endpoint);
                    return Err(DiscordError::RateLimitExceeded {
                        retries: MAX_RATE_LIMIT_RETRIES,
                    });
                }

                let retry_after = retry_after_seconds(response).await;
                tracing::warn!(
                    "Rate limited. Retrying after {} seconds (retry {}/{})",
                    retry_after,
                    retries,
                    MAX_RATE_LIMIT_RETRIES
                );
                self.clock.sleep(retry_delay(retry_after)).await;
                continue;
            }

            if !status.is_success() {
                let body = response
                    .json::<serde_json::Value>()
                    .await
                    .unwrap_or_else(|_| serde_json::json!({ "message": "Unknown error" }));
                tracing::error!("{} {} failed with status {}", method, endpoint, status);
                return Err(DiscordError::Http { status, body });
            }

            return Ok(response);
        }
    }

    /// One page of channel history, newest first.
    pub async fn get_channel_messages(
        &self,
        channel_id: &str,
        before: Option<&str>,
    ) -> Result<Vec<Message>, DiscordError> {
        let endpoint = channel_messages_endpoint(channel_id, before);
        let response = self.request(Method::GET, &endpoint).await?;
        let bytes = response.bytes().await?;
        parse_page(&bytes)
    }

    pub async fn delete_original_response(
        &self,
        application_id: &str,
        interaction_token: &str,
    ) -> Result<(), DiscordError> {
        let endpoint = original_response_endpoint(application_id, interaction_token);
        self.request(Method::DELETE, &endpoint).await?;
        Ok(())
    }

    pub async fn bulk_overwrite_commands(
        &self,
        endpoint: &str,
        commands: &[ApplicationCommand],
    ) -> Result<(), DiscordError> {
        self.request_with_body(Method::PUT, endpoint, Some(commands))
            .await?;
        Ok(())
    }
}

async fn retry_after_seconds(response: Response) -> f64 {
    match response.json::<RateLimitBody>().await {
        Ok(RateLimitBody {
            retry_after: Some(seconds),
        }) if seconds.is_finite() && seconds > 0.0 => seconds,
        Ok(_) => DEFAULT_RETRY_AFTER_SECONDS,
        Err(_) => {
            tracing::warn!("Rate limit without body, using default 1s");
            DEFAULT_RETRY_AFTER_SECONDS
        }
    }
}

pub fn retry_delay(retry_after_seconds: f64) -> Duration {
    Duration::from_millis((retry_after_seconds * 1000.0).ceil() as u64)
}

fn parse_page(bytes: &[u8]) -> Result<Vec<Message>, DiscordError> {
    let payload = serde_json::from_slice::<serde_json::Value>(bytes)
        .map_err(|e| DiscordError::MalformedPage(e.to_string()))?;

    if !payload.is_array() {
        return Err(DiscordError::MalformedPage(format!(
            "expected a list of messages, got {}",
            payload
        )));
    }

    serde_json::from_value::<Vec<Message>>(payload)
        .map_err(|e| DiscordError::MalformedPage(e.to_string()))
}
