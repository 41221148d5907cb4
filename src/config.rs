use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Relay settings. Every value can come from a flag or the environment, since
/// a CGI server starts the program without arguments.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct RelayConfig {
    /// Credentials CSV (`merchantAccount,wsUser,wsPass,apiKey`)
    #[arg(long, env = "PAYRELAY_CREDENTIALS", default_value = "credentials.csv")]
    pub credentials: PathBuf,

    /// Merchant account whose credentials sign outbound calls
    #[arg(long, env = "PAYRELAY_MERCHANT_ACCOUNT", default_value = "ColinRood")]
    pub merchant_account: String,

    /// Address the browser reaches this server on
    #[arg(long, env = "PAYRELAY_LOCAL_ADDRESS", default_value = "http://localhost:8000")]
    pub local_address: String,

    #[arg(
        long,
        env = "PAYRELAY_SETUP_URL",
        default_value = "https://checkout-test.adyen.com/services/PaymentSetupAndVerification/v30/setup"
    )]
    pub setup_url: String,

    #[arg(
        long,
        env = "PAYRELAY_PAYMENTS_URL",
        default_value = "https://checkout-test.adyen.com/services/PaymentSetupAndVerification/v32/payments"
    )]
    pub payments_url: String,

    /// Outbound request timeout in seconds
    #[arg(long, env = "PAYRELAY_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Landing page the processor redirects the shopper to.
    pub fn return_url(&self) -> String {
        format!("{}/cgi-bin/submit.py?endpoint=result_page", self.local_address)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::parse_from(["payrelay"]);

        assert_eq!(config.credentials, PathBuf::from("credentials.csv"));
        assert_eq!(config.merchant_account, "ColinRood");
        assert_eq!(
            config.return_url(),
            "http://localhost:8000/cgi-bin/submit.py?endpoint=result_page"
        );
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_flags_override() {
        let config = RelayConfig::parse_from([
            "payrelay",
            "--merchant-account",
            "Acme",
            "--local-address",
            "https://shop.example",
        ]);

        assert_eq!(config.merchant_account, "Acme");
        assert_eq!(
            config.return_url(),
            "https://shop.example/cgi-bin/submit.py?endpoint=result_page"
        );
    }
}
