use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const MERCHANT: &str = "Acme";

/// Writes a credentials store holding `rows` below the standard header.
pub fn credentials_file(rows: &[[&str; 4]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());

    wtr.write_record(["merchantAccount", "wsUser", "wsPass", "apiKey"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    drop(wtr);

    file.flush()?;
    Ok(file)
}

pub fn acme_credentials() -> Result<NamedTempFile, Error> {
    credentials_file(&[
        ["Other", "ws@Company.Other", "pass", "other-key"],
        [MERCHANT, "ws@Company.Acme", "pass", "acme-key"],
    ])
}
