//! Hands navigation targets to the platform opener, off the UI thread.
//!
//! The UI pushes [`NavigationTarget`]s into a bounded channel; a tokio
//! task drains it and launches each target. A failed launch is logged and
//! dropped: recovering from a blocked or missing opener is not the page's
//! job.

use std::sync::Arc;

use thiserror::Error;
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::links::NavigationTarget;
use crate::shutdown::ShutdownHandle;

pub const NAVIGATION_QUEUE: usize = 16;

pub type NavigationSender = mpsc::Sender<NavigationTarget>;
pub type NavigationReceiver = mpsc::Receiver<NavigationTarget>;

pub fn channel() -> (NavigationSender, NavigationReceiver) {
    mpsc::channel(NAVIGATION_QUEUE)
}

#[derive(Debug, Error)]
pub enum NavigateError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Status {
        program: String,
        status: std::process::ExitStatus,
    },
}

/// Something that can open a navigation target.
pub trait Opener: Send + Sync + 'static {
    fn open(
        &self,
        target: NavigationTarget,
    ) -> impl std::future::Future<Output = Result<(), NavigateError>> + Send;
}

/// Launches the desktop's default handler for URLs and `mailto:` links.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: String,
}

impl Default for SystemOpener {
    fn default() -> Self {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        Self {
            program: program.to_string(),
        }
    }
}

impl SystemOpener {
    /// Use a specific opener program instead of the platform default.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Opener for SystemOpener {
    async fn open(&self, target: NavigationTarget) -> Result<(), NavigateError> {
        let status = Command::new(&self.program)
            .arg(target.href())
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .await
            .map_err(|source| NavigateError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(NavigateError::Status {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Drain `rx` until the channel closes or shutdown is signalled.
///
/// Targets already queued are opened before a shutdown is honoured, and
/// launches still in flight are awaited before returning.
pub async fn run<O: Opener>(opener: Arc<O>, mut rx: NavigationReceiver, shutdown: ShutdownHandle) {
    let mut launches = JoinSet::new();
    loop {
        let target = tokio::select! {
            biased;
            target = rx.recv() => target,
            _ = shutdown.wait() => None,
        };
        let Some(target) = target else {
            break;
        };

        tracing::info!(target = %target, "opening navigation target");
        let opener = Arc::clone(&opener);
        launches.spawn(async move {
            if let Err(err) = opener.open(target).await {
                tracing::warn!(error = %err, "navigation target did not open");
            }
        });
    }
    while launches.join_next().await.is_some() {}
    tracing::debug!("navigator stopped");
}
