//! Subprocess transport speaking the engine's line protocol.
//!
//! The handshake and query exchange are a private detail of this module;
//! everything above it sees only [`EngineBackend`].

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use log::info;

use super::error::EngineError;

/// One query/response transport to an engine process or service.
pub(crate) trait EngineBackend: Send {
    /// Ask for the best move in `fen` at `depth`.
    fn query(&mut self, fen: &str, depth: u32) -> Result<String, EngineError>;
}

/// A spawned engine process driven over stdin/stdout.
pub(crate) struct UciBackend {
    child: Child,
    reader: BufReader<ChildStdout>,
    writer: ChildStdin,
}

impl UciBackend {
    /// Spawn `executable` and complete the protocol handshake.
    pub(crate) fn spawn(executable: &str) -> Result<Self, EngineError> {
        let mut child = Command::new(executable)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let stdin = child.stdin.take().ok_or_else(|| EngineError::Io {
            message: "engine stdin unavailable".to_string(),
        })?;
        let stdout = child.stdout.take().ok_or_else(|| EngineError::Io {
            message: "engine stdout unavailable".to_string(),
        })?;

        let mut backend = UciBackend {
            child,
            reader: BufReader::new(stdout),
            writer: stdin,
        };

        backend.send("uci")?;
        backend.wait_for("uciok")?;
        backend.send("isready")?;
        backend.wait_for("readyok")?;
        info!("engine process '{executable}' initialized");

        Ok(backend)
    }

    fn send(&mut self, command: &str) -> Result<(), EngineError> {
        writeln!(self.writer, "{command}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, EngineError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(EngineError::Io {
                message: "engine closed its output".to_string(),
            });
        }
        Ok(line)
    }

    fn wait_for(&mut self, token: &str) -> Result<(), EngineError> {
        loop {
            if self.read_line()?.contains(token) {
                return Ok(());
            }
        }
    }
}

impl EngineBackend for UciBackend {
    fn query(&mut self, fen: &str, depth: u32) -> Result<String, EngineError> {
        self.send(&format!("position fen {fen}"))?;
        self.send(&format!("go depth {depth}"))?;

        loop {
            let line = self.read_line()?;
            if let Some(rest) = line.trim().strip_prefix("bestmove") {
                let best = rest.split_whitespace().next().unwrap_or("");
                if best.is_empty() || best == "(none)" {
                    return Err(EngineError::Protocol {
                        message: line.trim().to_string(),
                    });
                }
                return Ok(best.to_string());
            }
        }
    }
}

impl Drop for UciBackend {
    fn drop(&mut self) {
        let _ = self.send("quit");
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
