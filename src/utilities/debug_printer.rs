use std::io::{self, Write};
#[cfg(test)]
use std::sync::{Arc, Mutex};

use log::debug;

use super::constants::DEBUG_BANNER;

#[derive(Debug, Clone)]
enum Sink {
    Stdout,
    #[cfg(test)]
    Buffer(Arc<Mutex<Vec<u8>>>),
}

/// Prints raw responses and intermediate decisions wrapped in a banner when debug is enabled.
/// Cloned into every component that needs it instead of living in a global.
#[derive(Debug, Clone)]
pub struct DebugPrinter {
    enabled: bool,
    sink: Sink,
}

impl DebugPrinter {
    pub fn new(enabled: bool) -> Self {
        DebugPrinter {
            enabled,
            sink: Sink::Stdout,
        }
    }

    /// Writes into a shared buffer instead of stdout, returns the printer and the buffer
    #[cfg(test)]
    pub fn capturing(enabled: bool) -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (
            DebugPrinter {
                enabled,
                sink: Sink::Buffer(buffer.clone()),
            },
            buffer,
        )
    }

    pub fn print(&self, message: &str) {
        if !self.enabled {
            return;
        }
        debug!("{}", message);

        let banner = format!("{DEBUG_BANNER}\n{message}\n{DEBUG_BANNER}\n\n");
        if let Err(e) = self.write(banner.as_bytes()) {
            log::error!("Failed to write debug output: {}", e);
        }
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        match &self.sink {
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(bytes)?;
                stdout.flush()
            }
            #[cfg(test)]
            Sink::Buffer(buffer) => {
                let mut buffer = buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                buffer.write_all(bytes)
            }
        }
    }

    /// Like `print` but only builds the message when debug is enabled
    pub fn print_with<F>(&self, message: F)
    where
        F: FnOnce() -> String,
    {
        if self.enabled {
            self.print(&message());
        }
    }
}
