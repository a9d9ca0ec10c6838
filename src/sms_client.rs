use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

pub struct SmsClient {
    pub http_client: Client,
    pub base_url: String,
    pub account_sid: String,
    pub auth_token: Secret<String>,
    pub sender_number: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendSmsRequest<'a> {
    from: &'a str,
    to: &'a str,
    body: &'a str,
}

#[derive(Deserialize)]
struct SendSmsResponse {
    sid: String,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SmsClientError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

impl SmsClient {
    pub fn new(
        base_url: String,
        account_sid: String,
        auth_token: Secret<String>,
        sender_number: String,
        timeout: std::time::Duration,
    ) -> SmsClient {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        SmsClient {
            http_client,
            base_url,
            account_sid,
            auth_token,
            sender_number,
        }
    }

    pub async fn send_sms(&self, to: &str, body: &str) -> Result<String, SmsClientError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );
        let request_body = SendSmsRequest {
            from: &self.sender_number,
            to,
            body,
        };

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&request_body)
            .send()
            .await?;

        if response.status().is_success() {
            let sent: SendSmsResponse = response.json().await?;
            Ok(sent.sid)
        } else {
            let status = response.status();
            // The provider answers rejections with a JSON body carrying a
            // human readable `message`; fall back to the status line if not.
            let message = match response.json::<ApiErrorResponse>().await {
                Ok(error) => error.message,
                Err(_) => format!("the provider answered with status {}", status),
            };
            Err(SmsClientError::Api(message))
        }
    }
}
