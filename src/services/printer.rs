//! Print service
//!
//! Hands the flyer text to the system print command on stdin. The
//! command owns everything after that (queueing, paper, errors).
//! `PrintJob` runs it on a background thread so the UI keeps drawing.

use anyhow::{anyhow, bail, Context, Result};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Display form of the print command, e.g. `lp -d attic`
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pipe `text` into `program args...` and wait for it to finish
///
/// Returns whatever the command printed on stdout (e.g. a job id).
/// A command that stops reading early is still waited on, so its exit
/// status and stderr end up in the error.
pub fn print_text(program: &str, args: &[String], text: &str) -> Result<String> {
    let shown = display_command(program, args);
    tracing::info!("Printing flyer via '{}'", shown);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to launch '{}'", shown))?;

    let write_error = child.stdin.take().and_then(|mut stdin| {
        match stdin.write_all(text.as_bytes()) {
            Ok(()) => None,
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                tracing::debug!("'{}' closed stdin before reading the whole flyer", shown);
                None
            }
            Err(e) => Some(e),
        }
    });

    let output = child
        .wait_with_output()
        .with_context(|| format!("'{}' did not finish", shown))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("'{}' exited with {}: {}", shown, output.status, stderr.trim());
    }

    if let Some(e) = write_error {
        return Err(e).with_context(|| format!("Failed to send flyer to '{}'", shown));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// A print command running on a background thread
pub struct PrintJob {
    receiver: Receiver<Result<String>>,
    command: String,
    start_instant: Instant,
}

impl PrintJob {
    /// Start printing `text`; the result arrives through `poll`
    pub fn spawn(program: String, args: Vec<String>, text: String) -> Self {
        let (tx, rx) = mpsc::channel();
        let command = display_command(&program, &args);

        thread::spawn(move || {
            let result = print_text(&program, &args, &text);
            // The app may have quit already; nobody is left to tell
            let _ = tx.send(result);
        });

        Self {
            receiver: rx,
            command,
            start_instant: Instant::now(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn elapsed(&self) -> Duration {
        self.start_instant.elapsed()
    }

    /// `None` while the command is still running
    pub fn poll(&self) -> Option<Result<String>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(anyhow!(
                "print worker for '{}' stopped without a result",
                self.command
            ))),
        }
    }
}
