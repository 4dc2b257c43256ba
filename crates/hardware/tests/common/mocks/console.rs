use std::io;

use ls8_core::soc::Console;

/// Console whose output device is gone.
#[derive(Debug, Default)]
pub struct BrokenConsole {
    pub attempts: usize,
}

impl Console for BrokenConsole {
    fn emit(&mut self, _value: u8) -> io::Result<()> {
        self.attempts += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
    }
}
