use super::payload::Payload;
use crate::config::RelayConfig;
use crate::domain::credentials::Credentials;
use crate::domain::mask;
use crate::domain::ports::TransportBox;
use crate::domain::request::FormData;
use crate::domain::reshape::{reformat_amount, reformat_card_checkout};
use crate::error::{RelayError, Result};
use crate::interfaces::cgi::writer::{CgiWriter, ContentType};
use serde_json::{Value, json};
use std::io::Write;
use std::process::ExitCode;
use std::str::FromStr;

const SEND_FAILURE: &str = "error sending request";

/// How a request ended, as far as the process exit status is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    /// The request did not name an endpoint.
    Rejected,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Handled => ExitCode::SUCCESS,
            Outcome::Rejected => ExitCode::FAILURE,
        }
    }
}

/// The request parameter naming the handler.
pub const ENDPOINT_KEY: &str = "endpoint";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SecuredFieldsSetup,
    SecuredFieldsSubmit,
    ResultPage,
}

impl FromStr for Endpoint {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "secured_fields_setup" => Ok(Self::SecuredFieldsSetup),
            "secured_fields_submit" => Ok(Self::SecuredFieldsSubmit),
            "result_page" => Ok(Self::ResultPage),
            other => Err(RelayError::UnknownEndpoint(other.to_string())),
        }
    }
}

/// Relays browser form data to the checkout API and writes the reply as the
/// CGI response.
pub struct CheckoutRelay<W: Write> {
    config: RelayConfig,
    credentials: Credentials,
    transport: TransportBox,
    out: CgiWriter<W>,
}

impl<W: Write> CheckoutRelay<W> {
    pub fn new(
        config: RelayConfig,
        credentials: Credentials,
        transport: TransportBox,
        out: CgiWriter<W>,
    ) -> Self {
        Self {
            config,
            credentials,
            transport,
            out,
        }
    }

    /// Routes one request to its handler.
    ///
    /// A request without `endpoint` is echoed back and yields a failure exit
    /// code. An unknown endpoint, or a handler missing one of its fields,
    /// is echoed back as a server error. Neither case reaches the network.
    pub async fn dispatch(&mut self, mut data: FormData) -> Result<Outcome> {
        let Some(endpoint) = data.shift_remove(ENDPOINT_KEY) else {
            tracing::warn!("Request without endpoint");
            self.out.send_debug(
                "endpoint value missing in request data:",
                ContentType::Plain,
                false,
            )?;
            self.out
                .send_debug(&dump(&data)?, ContentType::Plain, true)?;
            return Ok(Outcome::Rejected);
        };

        data.insert(
            "merchantAccount".to_string(),
            Value::String(self.config.merchant_account.clone()),
        );

        let name = match endpoint {
            Value::String(s) => s,
            other => other.to_string(),
        };
        let routed = match name.parse::<Endpoint>() {
            Ok(endpoint) => self.route(endpoint, &mut data).await,
            Err(e) => Err(e),
        };

        match routed {
            Ok(()) => Ok(Outcome::Handled),
            Err(e @ (RelayError::UnknownEndpoint(_) | RelayError::MissingField(_))) => {
                tracing::warn!(endpoint = %name, error = %e, "Request could not be routed");
                self.out
                    .send_debug("SERVER ERROR", ContentType::Plain, false)?;
                self.out.send_debug(
                    &format!("Method not found: \n{e}"),
                    ContentType::Plain,
                    true,
                )?;
                self.out
                    .send_debug(&format!("\n{}", dump(&data)?), ContentType::Plain, true)?;
                Ok(Outcome::Handled)
            }
            Err(e) => Err(e),
        }
    }

    async fn route(&mut self, endpoint: Endpoint, data: &mut FormData) -> Result<()> {
        tracing::info!(?endpoint, "Handling request");
        match endpoint {
            Endpoint::SecuredFieldsSetup => self.secured_fields_setup(data).await,
            Endpoint::SecuredFieldsSubmit => self.secured_fields_submit(data).await,
            Endpoint::ResultPage => self.result_page(data),
        }
    }

    /// Starts a checkout session for the hosted card fields.
    pub async fn secured_fields_setup(&mut self, data: &mut FormData) -> Result<()> {
        self.add_return_fields(data);
        data.insert(
            "additionalData".to_string(),
            json!({ "executeThreeD": "True" }),
        );
        reformat_amount(data)?;

        let url = self.config.setup_url.clone();
        let result = self.send_checkout(&url, data).await?;
        self.out.send_response(&result, ContentType::Json)
    }

    /// Submits the encrypted card collected by the hosted fields.
    pub async fn secured_fields_submit(&mut self, data: &mut FormData) -> Result<()> {
        self.add_return_fields(data);
        reformat_amount(data)?;
        reformat_card_checkout(data, true)?;

        let url = self.config.payments_url.clone();
        let result = self.send_checkout(&url, data).await?;
        self.out.send_response(&result, ContentType::Json)
    }

    /// Landing page after a redirect: echoes what the processor sent back.
    pub fn result_page(&mut self, data: &FormData) -> Result<()> {
        self.out
            .send_debug("Response from Adyen:", ContentType::Plain, false)?;
        self.out.send_debug(&dump(data)?, ContentType::Plain, true)
    }

    fn add_return_fields(&self, data: &mut FormData) {
        data.insert(
            "origin".to_string(),
            Value::String(self.config.local_address.clone()),
        );
        data.insert(
            "returnUrl".to_string(),
            Value::String(self.config.return_url()),
        );
    }

    async fn send_checkout(&self, url: &str, data: &FormData) -> Result<Vec<u8>> {
        let payload = Payload::Json(data);
        let headers = [
            ("Content-Type", payload.content_type()),
            ("X-API-Key", self.credentials.api_key.as_str()),
        ];
        self.send_request(url, payload, &headers).await
    }

    /// Sends one request and returns the upstream body.
    ///
    /// Encoding errors propagate. Transport failures are turned into a text
    /// body so the browser always gets a response.
    pub async fn send_request(
        &self,
        url: &str,
        payload: Payload<'_>,
        headers: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        let body = payload.encode()?;
        if let Payload::Json(data) | Payload::FormUrlEncoded(data) = payload {
            let masked = mask::secure_value(&Value::Object(data.clone()));
            tracing::debug!(%url, data = %masked, "Checkout API request");
        }

        match self.transport.post(url, headers, body).await {
            Ok(reply) => Ok(reply),
            Err(e @ RelayError::HttpStatus { .. }) => {
                tracing::warn!(%url, error = %e, "Checkout API rejected request");
                Ok(e.to_string().into_bytes())
            }
            Err(e) => {
                tracing::error!(%url, error = %e, "Failed to send request to checkout API");
                Ok(SEND_FAILURE.as_bytes().to_vec())
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.out.into_inner()
    }
}

fn dump(data: &FormData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
