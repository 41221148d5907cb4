pub mod credentials;
pub mod mask;
pub mod ports;
pub mod request;
pub mod reshape;
