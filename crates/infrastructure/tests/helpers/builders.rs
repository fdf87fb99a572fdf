#![allow(dead_code)]

/// Builds raw query datagrams the way a stub resolver would send them.
pub struct QueryBuilder {
    id: u16,
    opcode: u8,
    rd: bool,
    qdcount: Option<u16>,
    questions: Vec<u8>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x3039,
            opcode: 0,
            rd: true,
            qdcount: None,
            questions: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn opcode(mut self, opcode: u8) -> Self {
        self.opcode = opcode;
        self
    }

    pub fn recursion_desired(mut self, rd: bool) -> Self {
        self.rd = rd;
        self
    }

    /// Overrides QDCOUNT independently of the questions actually added.
    pub fn qdcount(mut self, count: u16) -> Self {
        self.qdcount = Some(count);
        self
    }

    pub fn question(self, domain: &str) -> Self {
        self.typed_question(domain, 1, 1)
    }

    pub fn typed_question(mut self, domain: &str, qtype: u16, qclass: u16) -> Self {
        self.questions.extend_from_slice(&encode_labels(domain));
        self.questions.extend_from_slice(&qtype.to_be_bytes());
        self.questions.extend_from_slice(&qclass.to_be_bytes());
        self
    }

    /// Appends raw question bytes, e.g. a compressed name.
    pub fn raw_question(mut self, bytes: &[u8]) -> Self {
        self.questions.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let count = self.qdcount.unwrap_or_else(|| self.question_count());
        let mut flags_hi = (self.opcode & 0x0F) << 3;
        if self.rd {
            flags_hi |= 0x01;
        }

        let mut buf = self.id.to_be_bytes().to_vec();
        buf.push(flags_hi);
        buf.push(0x00);
        buf.extend_from_slice(&count.to_be_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
        buf.extend_from_slice(&self.questions);
        buf
    }

    fn question_count(&self) -> u16 {
        let mut count = 0;
        let mut pos = 0;
        while pos < self.questions.len() {
            loop {
                let len = self.questions[pos];
                if len & 0xC0 == 0xC0 {
                    pos += 2;
                    break;
                }
                pos += 1 + len as usize;
                if len == 0 {
                    break;
                }
            }
            pos += 4;
            count += 1;
        }
        count
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn encode_labels(domain: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00);
    buf
}
