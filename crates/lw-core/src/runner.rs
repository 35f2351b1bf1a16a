//! Backend process supervision.

use crate::{Command, HealthChecker, RunnerError, RunnerResult};

use std::os::unix::process::CommandExt;
use std::process::{Command as ProcessCommand, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use nix::errno::Errno;
use nix::sys::signal::{Signal, killpg};
use nix::unistd::Pid;

/// Delay before every health check during a start.
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Something that can be (re)started and stopped by the coordinator.
pub trait TaskRunner: Send + Sync {
    /// Replace any running instance with a fresh one and return once it is
    /// ready.
    fn start(&self) -> RunnerResult<()>;

    /// Stop the running instance, if any.
    fn kill(&self) -> RunnerResult<()>;
}

/// Runs the backend command in its own process group and gates `start` on
/// the health checker.
///
/// Owns at most one child at a time. The process-group handle sits behind its
/// own lock so `kill` and `shutdown` work while `start` is polling.
pub struct CommandRunner {
    command: Command,
    health_checker: Box<dyn HealthChecker>,
    process_group: Mutex<Option<Pid>>,
    stopping: AtomicBool,
}

impl CommandRunner {
    pub fn new(command: Command, health_checker: Box<dyn HealthChecker>) -> Self {
        Self {
            command,
            health_checker,
            process_group: Mutex::new(None),
            stopping: AtomicBool::new(false),
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Process group of the tracked child, if one is running.
    pub fn pid(&self) -> Option<Pid> {
        *self.lock_process_group()
    }

    /// Kill the backend and abandon any in-progress health poll.
    ///
    /// Later calls to [`TaskRunner::start`] fail with
    /// [`RunnerError::Stopped`].
    pub fn shutdown(&self) -> RunnerResult<()> {
        self.stopping.store(true, Ordering::SeqCst);
        self.kill()
    }

    #[cfg(test)]
    pub(crate) fn track_process_group(&self, pgid: Pid) {
        *self.lock_process_group() = Some(pgid);
    }

    fn is_stopping(&self) -> bool {
        self.stopping.load(Ordering::SeqCst)
    }

    fn lock_process_group(&self) -> MutexGuard<'_, Option<Pid>> {
        self.process_group
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn spawn(&self) -> RunnerResult<Pid> {
        let mut process_group = self.lock_process_group();

        // Checked under the lock so a concurrent shutdown either sees the new
        // group or prevents it from being spawned.
        if self.is_stopping() {
            return Err(RunnerError::stopped());
        }

        let mut child = ProcessCommand::new(self.command.executable())
            .args(self.command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .process_group(0)
            .spawn()
            .map_err(|e| RunnerError::spawn(self.command.to_string(), e))?;

        let pgid = Pid::from_raw(child.id() as i32);
        *process_group = Some(pgid);
        drop(process_group);

        let reaper = thread::Builder::new()
            .name(format!("reaper-{pgid}"))
            .spawn(move || match child.wait() {
                Ok(status) => info!("Backend process {pgid} exited: {status}"),
                Err(e) => warn!("Failed to wait on backend process {pgid}: {e}"),
            });
        if let Err(e) = reaper {
            warn!("Failed to start reaper thread for process {pgid}: {e}");
        }

        Ok(pgid)
    }
}

impl TaskRunner for CommandRunner {
    fn start(&self) -> RunnerResult<()> {
        if self.is_stopping() {
            return Err(RunnerError::stopped());
        }

        // The old group is forgotten either way, so a failed signal must not
        // block the replacement.
        if let Err(e) = self.kill() {
            warn!("Continuing restart: {e}");
        }
        let pgid = self.spawn()?;
        info!("Started `{}` (process group {pgid})", self.command);

        let started = Instant::now();
        let mut checks = 0u32;
        loop {
            // Sleep first: the instance that was just killed may still be
            // answering on the backend port.
            thread::sleep(HEALTH_POLL_INTERVAL);

            if self.is_stopping() {
                return Err(RunnerError::stopped());
            }

            checks += 1;
            if self.health_checker.check() {
                info!(
                    "Backend healthy after {checks} check(s) in {}ms",
                    started.elapsed().as_millis()
                );
                return Ok(());
            }
            debug!("Backend not healthy yet (check {checks})");
        }
    }

    fn kill(&self) -> RunnerResult<()> {
        // Untracked before signalling, so a failure is reported once.
        let Some(pgid) = self.lock_process_group().take() else {
            return Ok(());
        };

        match killpg(pgid, Signal::SIGINT) {
            Ok(()) => info!("Sent SIGINT to process group {pgid}"),
            Err(Errno::ESRCH) => debug!("Process group {pgid} already exited"),
            Err(e) => return Err(RunnerError::kill_process_group(pgid, e)),
        }

        Ok(())
    }
}
