use ls8_core::isa::opcodes::*;

/// Assembles LS-8 machine code one instruction at a time.
#[derive(Default)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address the next instruction will be placed at.
    pub fn here(&self) -> u8 {
        self.bytes.len() as u8
    }

    pub fn byte(mut self, b: u8) -> Self {
        self.bytes.push(b);
        self
    }

    pub fn hlt(self) -> Self {
        self.byte(HLT)
    }

    pub fn ret(self) -> Self {
        self.byte(RET)
    }

    pub fn ldi(self, reg: u8, imm: u8) -> Self {
        self.byte(LDI).byte(reg).byte(imm)
    }

    pub fn prn(self, reg: u8) -> Self {
        self.byte(PRN).byte(reg)
    }

    pub fn add(self, a: u8, b: u8) -> Self {
        self.byte(ADD).byte(a).byte(b)
    }

    pub fn mul(self, a: u8, b: u8) -> Self {
        self.byte(MUL).byte(a).byte(b)
    }

    pub fn cmp(self, a: u8, b: u8) -> Self {
        self.byte(CMP).byte(a).byte(b)
    }

    pub fn push(self, reg: u8) -> Self {
        self.byte(PUSH).byte(reg)
    }

    pub fn pop(self, reg: u8) -> Self {
        self.byte(POP).byte(reg)
    }

    pub fn call(self, reg: u8) -> Self {
        self.byte(CALL).byte(reg)
    }

    pub fn jmp(self, reg: u8) -> Self {
        self.byte(JMP).byte(reg)
    }

    pub fn jeq(self, reg: u8) -> Self {
        self.byte(JEQ).byte(reg)
    }

    pub fn jne(self, reg: u8) -> Self {
        self.byte(JNE).byte(reg)
    }

    /// Pads with zero bytes up to `addr`.
    pub fn org(mut self, addr: u8) -> Self {
        assert!(self.here() <= addr, "org {addr} is behind {}", self.here());
        self.bytes.resize(addr as usize, 0);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
