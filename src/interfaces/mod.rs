pub mod cgi;
pub mod csv;
