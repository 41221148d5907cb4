pub mod credentials_reader;
