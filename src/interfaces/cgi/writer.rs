use crate::error::Result;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Json,
    Plain,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("text/html"),
            Self::Json => f.write_str("application/json"),
            Self::Plain => f.write_str("text/plain"),
        }
    }
}

/// Writes CGI responses: header lines, a blank line, then the body.
pub struct CgiWriter<W: Write> {
    writer: W,
}

impl<W: Write> CgiWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes a full response with `Content-type` and `Content-length`.
    pub fn send_response(&mut self, body: &[u8], content_type: ContentType) -> Result<()> {
        write!(self.writer, "Content-type:{content_type}\r\n")?;
        write!(self.writer, "Content-length:{}\r\n", body.len())?;
        self.writer.write_all(b"\r\n")?;
        self.writer.write_all(body)?;
        self.writer.write_all(b"\r\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes a plaintext dump block.
    ///
    /// Only the first block of a response carries the header; follow-up
    /// blocks pass `duplicate = true`.
    pub fn send_debug(
        &mut self,
        data: &str,
        content_type: ContentType,
        duplicate: bool,
    ) -> Result<()> {
        if !duplicate {
            writeln!(self.writer, "Content-type:{content_type}\r\n")?;
        }
        writeln!(self.writer, "{data}")?;
        match content_type {
            ContentType::Html => writeln!(self.writer, "<br><br>")?,
            _ => writeln!(self.writer, "\r\n\r\n")?,
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_response_headers() {
        let mut writer = CgiWriter::new(Vec::new());
        writer
            .send_response(br#"{"ok":true}"#, ContentType::Json)
            .unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            out,
            "Content-type:application/json\r\nContent-length:11\r\n\r\n{\"ok\":true}\r\n"
        );
    }

    #[test]
    fn test_content_length_counts_bytes() {
        let mut writer = CgiWriter::new(Vec::new());
        writer
            .send_response("€".as_bytes(), ContentType::Html)
            .unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert!(out.contains("Content-length:3\r\n"));
    }

    #[test]
    fn test_send_debug_blocks() {
        let mut writer = CgiWriter::new(Vec::new());
        writer.send_debug("first", ContentType::Plain, false).unwrap();
        writer.send_debug("second", ContentType::Plain, true).unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            out,
            "Content-type:text/plain\r\n\nfirst\n\r\n\r\n\nsecond\n\r\n\r\n\n"
        );
    }

    #[test]
    fn test_send_debug_html_separator() {
        let mut writer = CgiWriter::new(Vec::new());
        writer.send_debug("hi", ContentType::Html, false).unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "Content-type:text/html\r\n\nhi\n<br><br>\n");
    }
}
