use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Where command lines come from: stdin or a batch file.
pub struct LineSource {
    reader: Box<dyn BufRead>,
    buffer: Vec<u8>,
}

impl LineSource {
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            buffer: Vec::new(),
        }
    }

    /// Next line including its newline, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }
}
