use crate::domain::credentials::Credentials;
use crate::error::{RelayError, Result};
use std::io::Read;

/// Reads credential rows from a CSV source.
///
/// Cells are taken verbatim: no trimming, so padded secrets stay intact and a
/// padded account name does not match.
pub struct CredentialsReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CredentialsReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new().from_reader(source);
        Self { reader }
    }

    pub fn credentials(self) -> impl Iterator<Item = Result<Credentials>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RelayError::from))
    }

    /// Selects the credentials for `merchant_account` by exact match.
    ///
    /// Every row is read; when the account appears more than once the last
    /// row wins. Any malformed row aborts the lookup.
    pub fn find(self, merchant_account: &str) -> Result<Credentials> {
        let mut found = None;
        for row in self.credentials() {
            let row = row?;
            if row.merchant_account == merchant_account {
                found = Some(row);
            }
        }
        found.ok_or_else(|| RelayError::MerchantNotFound(merchant_account.to_string()))
    }
}
