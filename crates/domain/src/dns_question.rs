use crate::dns_record::{RecordClass, RecordType};

/// A single entry of the question section.
///
/// `qtype` and `qclass` are kept as raw codes, unknown values included, for
/// logging and classification. Responses always carry A/IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: u16, qclass: u16) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }

    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::from_u16(self.qclass)
    }

    /// Mnemonic for logs, e.g. `AAAA`, or `TYPE65280` for unknown codes.
    pub fn type_name(&self) -> String {
        match self.record_type() {
            Some(record_type) => record_type.to_string(),
            None => format!("TYPE{}", self.qtype),
        }
    }

    pub fn class_name(&self) -> String {
        match self.record_class() {
            Some(class) => class.to_string(),
            None => format!("CLASS{}", self.qclass),
        }
    }

    pub fn is_a_in(&self) -> bool {
        self.record_type() == Some(RecordType::A) && self.record_class() == Some(RecordClass::IN)
    }
}
