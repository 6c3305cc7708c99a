use std::io::{self, ErrorKind, Read};

use crate::error::ShellError;

/// Line buffers grow by this many bytes at a time.
pub const BUFFER_BLOCK: usize = 1024;

/// Unbuffered standard input.
///
/// `std::io::Stdin` reads ahead; this does not, so whatever follows the
/// current line stays in fd 0 for the external command it starts.
pub struct RawStdin;

impl Read for RawStdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: `buf` is a live, writable slice of `buf.len()` bytes.
        let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(n as usize)
        }
    }
}

/// Reads one line at a time from a byte stream, one byte per `read` call.
pub struct LineReader<R> {
    input: R,
    buffer: Vec<u8>,
}

impl<R: Read> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buffer: Vec::new(),
        }
    }

    /// Returns the raw bytes of the next line without its terminator, or
    /// `None` once the stream is exhausted and nothing was read.
    pub fn read_line(&mut self) -> Result<Option<Vec<u8>>, ShellError> {
        self.buffer.clear();
        let mut byte = [0u8; 1];

        loop {
            match self.input.read(&mut byte) {
                Ok(0) => {
                    if self.buffer.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    self.push(byte[0])?;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Some(std::mem::take(&mut self.buffer)))
    }

    fn push(&mut self, byte: u8) -> Result<(), ShellError> {
        if self.buffer.len() == self.buffer.capacity() {
            self.buffer
                .try_reserve_exact(BUFFER_BLOCK)
                .map_err(|_| ShellError::OutOfMemory(self.buffer.capacity() + BUFFER_BLOCK))?;
        }
        self.buffer.push(byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_in_order() {
        let mut reader = LineReader::new(Cursor::new("pwd\ncd /tmp\n"));
        assert_eq!(reader.read_line().unwrap(), Some(b"pwd".to_vec()));
        assert_eq!(reader.read_line().unwrap(), Some(b"cd /tmp".to_vec()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut reader = LineReader::new(Cursor::new("\n"));
        assert_eq!(reader.read_line().unwrap(), Some(Vec::new()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut reader = LineReader::new(Cursor::new("exit"));
        assert_eq!(reader.read_line().unwrap(), Some(b"exit".to_vec()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_eof_on_empty_input() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_long_line_grows_buffer() {
        let long = "x".repeat(BUFFER_BLOCK * 3 + 7);
        let mut reader = LineReader::new(Cursor::new(format!("{}\n", long)));
        assert_eq!(reader.read_line().unwrap(), Some(long.into_bytes()));
    }

    #[test]
    fn test_leaves_rest_of_stream_unread() {
        let mut cursor = Cursor::new("first\nsecond\n");
        {
            let mut reader = LineReader::new(&mut cursor);
            assert_eq!(reader.read_line().unwrap(), Some(b"first".to_vec()));
        }
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_carriage_return_kept_for_tokenizer() {
        let mut reader = LineReader::new(Cursor::new("ls\r\n"));
        assert_eq!(reader.read_line().unwrap(), Some(b"ls\r".to_vec()));
    }

    #[test]
    fn test_non_utf8_bytes_kept_verbatim() {
        let mut reader = LineReader::new(Cursor::new(&b"ls caf\xe9.txt\n"[..]));
        assert_eq!(reader.read_line().unwrap(), Some(b"ls caf\xe9.txt".to_vec()));
    }
}
