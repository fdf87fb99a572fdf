#![allow(dead_code)]
use ferrous_stub_domain::{Header, Opcode};

pub struct HeaderBuilder {
    header: Header,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self {
            header: Header::new(0x3039),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.header.id = id;
        self
    }

    pub fn opcode(mut self, opcode: Opcode) -> Self {
        self.header.opcode = opcode;
        self
    }

    pub fn recursion_desired(mut self, rd: bool) -> Self {
        self.header.rd = rd;
        self
    }

    pub fn qdcount(mut self, count: u16) -> Self {
        self.header.qdcount = count;
        self
    }

    pub fn build(self) -> Header {
        self.header
    }
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
