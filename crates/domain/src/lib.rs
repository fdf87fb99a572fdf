//! Ferrous Stub Domain Layer
pub mod config;
pub mod dns_header;
pub mod dns_question;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_header::{Header, Opcode, ResponseCode, HEADER_LEN};
pub use dns_question::Question;
pub use dns_record::{RecordClass, RecordType, ResourceRecord};
pub use errors::DomainError;
