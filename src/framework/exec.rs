//! Plugin processes with a hard deadline.
//!
//! On unix the plugin leads its own process group, so a timeout takes down
//! everything it started, not only the direct child.

use crate::error::{CompatError, Result};
use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);
/// Minimum time granted to the pipe readers after the plugin exits.
const PIPE_GRACE: Duration = Duration::from_millis(100);

/// Run `cmd` and capture its output, killing its process group once `timeout` elapses.
///
/// Output still held open by background processes at the deadline counts as a timeout.
pub(crate) fn run_command_with_timeout(cmd: &mut Command, timeout: Duration) -> Result<Output> {
    let command = format!("{:?}", cmd);
    let failed = |reason: String| CompatError::PluginCommandFailed {
        command: command.clone(),
        reason,
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    own_process_group(cmd);

    let mut child = cmd.spawn().map_err(|e| failed(e.to_string()))?;
    let deadline = Instant::now() + timeout;

    let (Some(stdout), Some(stderr)) = (
        child.stdout.take().map(read_in_background),
        child.stderr.take().map(read_in_background),
    ) else {
        terminate(&mut child);
        return Err(failed("plugin output could not be captured".to_string()));
    };

    let status = match wait_until(&mut child, deadline) {
        Ok(Some(status)) => status,
        Ok(None) => {
            terminate(&mut child);
            return Err(failed(timed_out(timeout)));
        }
        Err(e) => {
            terminate(&mut child);
            return Err(failed(e.to_string()));
        }
    };

    match (collect(&stdout, deadline), collect(&stderr, deadline)) {
        (Some(stdout), Some(stderr)) => Ok(Output {
            status,
            stdout,
            stderr,
        }),
        _ => {
            kill_group(child.id());
            Err(failed(timed_out(timeout)))
        }
    }
}

fn timed_out(timeout: Duration) -> String {
    format!("timed out after {:?}", timeout)
}

fn wait_until(child: &mut Child, deadline: Instant) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Readers are detached: a reader blocked on a pipe never holds up the caller.
fn read_in_background<R: Read + Send + 'static>(mut pipe: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send(buf);
    });
    rx
}

fn collect(rx: &Receiver<Vec<u8>>, deadline: Instant) -> Option<Vec<u8>> {
    let wait = deadline
        .saturating_duration_since(Instant::now())
        .max(PIPE_GRACE);
    match rx.recv_timeout(wait) {
        Ok(buf) => Some(buf),
        Err(RecvTimeoutError::Disconnected) => Some(Vec::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

fn terminate(child: &mut Child) {
    kill_group(child.id());
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(unix)]
fn own_process_group(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    cmd.process_group(0);
}

#[cfg(not(unix))]
fn own_process_group(_cmd: &mut Command) {}

#[cfg(unix)]
fn kill_group(leader: u32) {
    let Ok(pgid) = libc::pid_t::try_from(leader) else {
        return;
    };
    // SAFETY: kill(2) takes no pointers; a negative pid targets the group the plugin leads.
    unsafe {
        libc::kill(-pgid, libc::SIGKILL);
    }
}

#[cfg(not(unix))]
fn kill_group(_leader: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_and_stderr() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo out; echo err >&2"]);
        let output = run_command_with_timeout(&mut cmd, Duration::from_secs(5)).unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "out");
        assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "err");
    }

    #[test]
    fn kills_command_after_timeout() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "exec sleep 5"]);
        let err = run_command_with_timeout(&mut cmd, Duration::from_millis(100)).unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }

    #[cfg(unix)]
    #[test]
    fn timeout_is_not_held_up_by_grandchildren() {
        let mut cmd = Command::new("bash");
        cmd.args(["-c", "sleep 6; echo done"]);

        let started = Instant::now();
        let err = run_command_with_timeout(&mut cmd, Duration::from_millis(200)).unwrap_err();

        assert!(err.to_string().contains("timed out"));
        assert!(started.elapsed() < Duration::from_secs(2), "took {:?}", started.elapsed());
    }

    #[cfg(unix)]
    #[test]
    fn timeout_kills_the_whole_process_group() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("survived");

        let mut cmd = Command::new("sh");
        cmd.args(["-c", "(sleep 1; touch \"$1\") & sleep 5", "sh"])
            .arg(&marker);
        assert!(run_command_with_timeout(&mut cmd, Duration::from_millis(200)).is_err());

        thread::sleep(Duration::from_millis(1500));
        assert!(!marker.exists());
    }

    #[cfg(unix)]
    #[test]
    fn background_process_holding_output_times_out() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "sleep 5 & echo started"]);

        let started = Instant::now();
        let err = run_command_with_timeout(&mut cmd, Duration::from_millis(300)).unwrap_err();

        assert!(err.to_string().contains("timed out"));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn missing_binary_is_an_error() {
        let mut cmd = Command::new("/nonexistent/runtime-test-plugin");
        assert!(run_command_with_timeout(&mut cmd, Duration::from_secs(1)).is_err());
    }
}
