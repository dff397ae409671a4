//! Routing of solver trace output.
//!
//! A [`CroutSolver`](crate::solver::CroutSolver) writes its verbose trace to
//! a [`PrintTarget`].  By default that is standard output, but it may be
//! redirected to a file, an arbitrary stream, or an in-memory buffer that
//! can be read back afterwards.

use std::fs::File;
use std::io::{sink, stdout, Error, ErrorKind, Result, Sink, Stdout, Write};

/// Destination of solver trace output
pub(crate) enum PrintTarget {
    Stdout(Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    Sink(Sink),
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrintTarget::Stdout(_) => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(_) => "Buffer",
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Sink(_) => "Sink",
        };
        write!(f, "PrintTarget::{name}")
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self {
            PrintTarget::Stdout(out) => out.write(buf),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Buffer(buffer) => {
                buffer.extend_from_slice(buf);
                Ok(buf.len())
            }
            PrintTarget::Stream(stream) => stream.write(buf),
            PrintTarget::Sink(sink) => sink.write(buf),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            PrintTarget::Stdout(out) => out.flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Buffer(_) => Ok(()),
            PrintTarget::Stream(stream) => stream.flush(),
            PrintTarget::Sink(sink) => sink.flush(),
        }
    }
}

/// Trait implemented by types whose trace output can be redirected
pub trait ConfigurablePrintTarget {
    /// redirect print output to stdout
    fn print_to_stdout(&mut self);
    /// redirect print output to a file
    fn print_to_file(&mut self, file: File);
    /// redirect print output to a stream
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// discard all print output
    fn print_to_sink(&mut self);
    /// redirect print output to an internal buffer, discarding
    /// anything buffered so far
    fn print_to_buffer(&mut self);
    /// get the contents of the internal print buffer
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout(stdout());
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink(sink());
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(buffer) => Ok(String::from_utf8_lossy(buffer).into_owned()),
            _ => Err(Error::new(
                ErrorKind::Other,
                "print buffering is not configured",
            )),
        }
    }
}
