use std::io::{self, Write};
use std::net::{Shutdown, TcpStream};

use tracing::debug;

/// Delivery of one finished label document.
pub trait PrinterTransport {
    fn send(&mut self, host: &str, port: u16, payload: &str) -> io::Result<()>;
}

/// Raw TCP (port 9100 style) delivery: one connection per label.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpPrinter;

impl PrinterTransport for TcpPrinter {
    fn send(&mut self, host: &str, port: u16, payload: &str) -> io::Result<()> {
        send_raw_to_printer(host, port, payload.as_bytes())
    }
}

/// Connect, write every byte, close. Nothing is read back from the printer.
pub fn send_raw_to_printer(host: &str, port: u16, data: &[u8]) -> io::Result<()> {
    let mut stream = TcpStream::connect((host, port))?;
    stream.write_all(data)?;
    stream.flush()?;
    // the peer may already have closed; the bytes are out either way
    if let Err(e) = stream.shutdown(Shutdown::Write) {
        debug!(host, port, error = %e, "shutdown after write failed");
    }
    Ok(())
}
