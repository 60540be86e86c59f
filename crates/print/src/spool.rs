//! A host that spools isolated documents to disk and hands them to a print command.
use crate::error::PrintError;
use crate::frame::IsolatedDocument;
use crate::host::{PrintHost, PrintOutcome, PrintSurface};
use docket_types::SessionId;
use log::{debug, info, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// An external program that prints a spooled file, e.g. `lp -d office`.
///
/// The spool file path is appended as the last argument. Exit status zero
/// reads as a completed print, anything else as a cancelled one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PrintCommand {
    /// Splits a `[program, args...]` list. An empty list yields `None`.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

/// Each surface is one `<session>.html` file in the spool directory.
///
/// Without a print command, printing completes as soon as the file is
/// written; the file still disappears on teardown.
#[derive(Debug, Clone)]
pub struct SpoolHost {
    dir: PathBuf,
    command: Option<PrintCommand>,
}

impl SpoolHost {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: Option<PrintCommand>) -> Self {
        self.command = command;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PrintHost for SpoolHost {
    type Surface = SpoolSurface;

    fn create_surface(
        &self,
        session: &SessionId,
        document: &IsolatedDocument,
    ) -> Result<SpoolSurface, PrintError> {
        let path = self.dir.join(format!("{}.html", session));
        debug!("[{}] Spool surface at {}.", session, path.display());
        Ok(SpoolSurface {
            id: session.clone(),
            path,
            html: document.html.clone(),
            command: self.command.clone(),
            written: false,
            job: None,
        })
    }
}

pub struct SpoolSurface {
    id: SessionId,
    path: PathBuf,
    html: String,
    command: Option<PrintCommand>,
    written: bool,
    job: Option<JoinHandle<()>>,
}

impl SpoolSurface {
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn spool_error(&self, source: io::Error) -> PrintError {
        PrintError::Spool {
            path: self.path.clone(),
            source,
        }
    }
}

impl PrintSurface for SpoolSurface {
    fn id(&self) -> &SessionId {
        &self.id
    }

    async fn ready(&mut self) -> Result<(), PrintError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| self.spool_error(e))?;
        }
        // Marked before the write so a partial file is still cleaned up.
        self.written = true;
        tokio::fs::write(&self.path, self.html.as_bytes())
            .await
            .map_err(|e| self.spool_error(e))
    }

    fn print(&mut self) -> Result<oneshot::Receiver<PrintOutcome>, PrintError> {
        let (tx, rx) = oneshot::channel();
        let Some(command) = &self.command else {
            let _ = tx.send(PrintOutcome::Completed);
            return Ok(rx);
        };

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .arg(&self.path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PrintError::Command {
                program: command.program.clone(),
                source,
            })?;
        info!("[{}] Handed {} to '{}'.", self.id, self.path.display(), command.program);

        let id = self.id.clone();
        self.job = Some(tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => {
                    let _ = tx.send(PrintOutcome::Completed);
                }
                Ok(status) => {
                    debug!("[{}] Print command exited with {}.", id, status);
                    let _ = tx.send(PrintOutcome::Cancelled);
                }
                // No signal: the pipeline's timeout settles the session.
                Err(e) => warn!("[{}] Lost track of print command: {}", id, e),
            }
        }));
        Ok(rx)
    }

    fn teardown(&mut self) {
        if let Some(job) = self.job.take() {
            job.abort();
        }
        if !self.written {
            return;
        }
        self.written = false;
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("[{}] Removed {}.", self.id, self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("[{}] Could not remove {}: {}", self.id, self.path.display(), e),
        }
    }
}
