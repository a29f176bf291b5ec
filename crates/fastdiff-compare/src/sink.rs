//! Destinations for detected differences.

use std::io::Write;

use fastdiff_core::{CompareError, Difference};

/// Receives differences in traversal order, as soon as they are detected.
pub trait DiffSink {
    fn emit(&mut self, diff: Difference) -> Result<(), CompareError>;
}

impl DiffSink for Vec<Difference> {
    fn emit(&mut self, diff: Difference) -> Result<(), CompareError> {
        self.push(diff);
        Ok(())
    }
}

/// Writes one line per difference.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W, CompareError> {
        self.writer
            .flush()
            .map_err(|source| CompareError::Output { source })?;
        Ok(self.writer)
    }
}

impl<W: Write> DiffSink for WriterSink<W> {
    fn emit(&mut self, diff: Difference) -> Result<(), CompareError> {
        writeln!(self.writer, "{diff}").map_err(|source| CompareError::Output { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit(Difference::only_in("dir1", "a.txt")).unwrap();
        sink.emit(Difference::only_in("dir2", "b.txt")).unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(out, "Only in dir1: a.txt\nOnly in dir2: b.txt\n");
    }

    #[test]
    fn test_writer_sink_reports_write_failure() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = WriterSink::new(Closed)
            .emit(Difference::only_in("dir1", "a.txt"))
            .unwrap_err();
        assert!(matches!(err, CompareError::Output { .. }));
    }
}
