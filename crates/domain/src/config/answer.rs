use crate::dns_record::record::DEFAULT_ANSWER_TTL;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The fixed answer handed out for every question.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerConfig {
    #[serde(default = "default_answer_ipv4")]
    pub ipv4: Ipv4Addr,

    #[serde(default = "default_answer_ttl")]
    pub ttl: u32,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            ipv4: default_answer_ipv4(),
            ttl: default_answer_ttl(),
        }
    }
}

fn default_answer_ipv4() -> Ipv4Addr {
    Ipv4Addr::new(8, 8, 8, 8)
}

fn default_answer_ttl() -> u32 {
    DEFAULT_ANSWER_TTL
}
