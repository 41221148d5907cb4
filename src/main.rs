use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payrelay::application::relay::CheckoutRelay;
use payrelay::config::RelayConfig;
use payrelay::domain::ports::TransportBox;
use payrelay::error::RelayError;
use payrelay::infrastructure::http::HttpTransport;
use payrelay::interfaces::cgi::{self, writer::CgiWriter, writer::ContentType};
use payrelay::interfaces::csv::credentials_reader::CredentialsReader;
use payrelay::telemetry;
use std::fs::File;
use std::io;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    telemetry::init();
    let config = RelayConfig::parse();

    let stdout = io::stdout();
    let mut out = CgiWriter::new(stdout.lock());

    // Credentials are loaded before the request is even looked at
    let file = File::open(&config.credentials).into_diagnostic()?;
    let credentials = match CredentialsReader::new(file).find(&config.merchant_account) {
        Ok(credentials) => credentials,
        Err(e @ RelayError::MerchantNotFound(_)) => {
            tracing::error!(error = %e, "No credentials for merchant account");
            out.send_debug(&e.to_string(), ContentType::Plain, false)
                .into_diagnostic()?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).into_diagnostic(),
    };

    let data = cgi::read_query_env().into_diagnostic()?;

    let transport: TransportBox = Box::new(HttpTransport::new(config.timeout()).into_diagnostic()?);
    let mut relay = CheckoutRelay::new(config, credentials, transport, out);
    let outcome = relay.dispatch(data).await.into_diagnostic()?;

    Ok(outcome.into())
}
