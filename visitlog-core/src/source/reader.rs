use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Opens a log for streaming. Rotated logs ending in `.gz` are decompressed
/// on the fly.
pub fn open_log(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Number of lines [`LogLines`] will yield for this file.
pub fn count_lines(path: &Path) -> io::Result<u64> {
    let mut reader = open_log(path)?;
    let mut lines = 0u64;
    let mut last = b'\n';

    loop {
        let buf = reader.fill_buf()?;
        let Some(&tail) = buf.last() else {
            break;
        };
        lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
        last = tail;
        let len = buf.len();
        reader.consume(len);
    }

    // A final line without a newline still counts.
    if last != b'\n' {
        lines += 1;
    }
    Ok(lines)
}

/// Streams lines without holding the file in memory. Bytes that are not valid
/// UTF-8 are replaced rather than failing the line.
pub struct LogLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(512),
        }
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
