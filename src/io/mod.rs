//! Buffered byte-stream copying.

use std::io::{self, ErrorKind, Read, Write};

/// Size of the copy buffer in bytes.
pub const COPY_BUFFER_SIZE: usize = 1024;

/// Copy all bytes from `reader` to `writer` through a fixed-size buffer.
///
/// Reads until the source reports end-of-stream, writing exactly the bytes
/// read each iteration. Memory use is bounded by [`COPY_BUFFER_SIZE`]
/// regardless of stream length. Returns the total number of bytes copied.
pub fn copy_stream<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }
    Ok(total)
}
