// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gateway for running external commands.
//!
//! Every call spawns exactly one child process, captures both output
//! streams in full, and enforces a deadline. The child never sees a
//! terminal: color, paging and terminal capabilities are switched off
//! through its environment.

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::time::{sleep_until, timeout_at, Instant};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Deadline applied when no other timeout is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest accepted deadline (one day).
pub const MAX_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

const FALLBACK_PATH: &str = "/usr/bin:/bin:/usr/sbin:/sbin";

/// Search locations tried before the inherited `PATH`.
const SYSTEM_BIN_DIRS: [&str; 2] = ["/usr/local/bin", "/opt/homebrew/bin"];

/// Variables that keep the child non-interactive.
const CHILD_ENV: [(&str, &str); 3] = [("NO_COLOR", "1"), ("PB_PAGER", "cat"), ("TERM", "dumb")];

/// Captured result of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit status, or -1 when the process was terminated by a signal.
    pub exit_code: i32,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Immutable settings for a [`ProcessRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub timeout: Duration,
    /// Directories searched before the built-in locations.
    pub extra_paths: Vec<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            timeout: DEFAULT_TIMEOUT,
            extra_paths: Vec::new(),
        }
    }
}

impl RunnerConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Runs external commands with a deadline.
///
/// The runner only holds configuration, so one instance can be shared and
/// used from many tasks at once.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    config: RunnerConfig,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        ProcessRunner { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs `executable` with `args` in `working_dir`.
    ///
    /// `env` is applied after the non-interactive defaults and overrides
    /// them. A non-zero exit is not an error here; inspect
    /// [`ProcessOutput::exit_code`].
    ///
    /// # Errors
    ///
    /// - [`Error::ExecutableNotFound`] if the executable cannot be resolved
    ///   or spawned.
    /// - [`Error::Timeout`] if the deadline passes before the process exits
    ///   and its output is drained. The child is killed in that case.
    /// - [`Error::Config`] if the timeout is longer than [`MAX_TIMEOUT`].
    pub async fn run(
        &self,
        executable: &str,
        args: &[String],
        working_dir: &Path,
        env: &HashMap<String, String>,
    ) -> Result<ProcessOutput> {
        let timeout = self.config.timeout;
        let deadline = Instant::now().checked_add(timeout);
        let Some(deadline) = deadline.filter(|_| timeout <= MAX_TIMEOUT) else {
            return Err(Error::Config(format!(
                "timeout {timeout:?} exceeds the maximum of {MAX_TIMEOUT:?}"
            )));
        };

        let search_path = augmented_path(&self.config.extra_paths);
        let program = resolve_executable(executable, &search_path, working_dir)?;
        debug!(
            program = %program.display(),
            ?args,
            dir = %working_dir.display(),
            "spawning process"
        );

        let mut command = Command::new(&program);
        command
            .args(args)
            .current_dir(working_dir)
            .env("PATH", &search_path)
            .envs(CHILD_ENV)
            .envs(env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|e| {
            debug!(program = %program.display(), error = %e, "spawn failed");
            Error::ExecutableNotFound {
                path: program.display().to_string(),
            }
        })?;

        // Drain both pipes while waiting so a chatty child cannot block on a
        // full pipe buffer.
        let stdout_task = tokio::spawn(read_pipe(child.stdout.take()));
        let stderr_task = tokio::spawn(read_pipe(child.stderr.take()));

        let timed_out = Error::Timeout { timeout };

        let status = tokio::select! {
            status = child.wait() => status?,
            _ = sleep_until(deadline) => {
                warn!(program = %program.display(), "process timed out, killing");
                if let Err(e) = child.kill().await {
                    warn!(error = %e, "failed to kill timed out process");
                }
                stdout_task.abort();
                stderr_task.abort();
                return Err(timed_out);
            }
        };

        // The child has exited, but a descendant may still hold the pipes.
        let drained = timeout_at(deadline, async {
            let stdout = stdout_task.await.unwrap_or_default();
            let stderr = stderr_task.await.unwrap_or_default();
            (stdout, stderr)
        })
        .await;
        let Ok((stdout, stderr)) = drained else {
            warn!(program = %program.display(), "pipes open at deadline");
            return Err(timed_out);
        };

        let exit_code = status.code().unwrap_or(-1);
        debug!(program = %program.display(), exit_code, "process exited");
        Ok(ProcessOutput {
            stdout,
            stderr,
            exit_code,
        })
    }
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        if let Err(e) = pipe.read_to_end(&mut buf).await {
            debug!(error = %e, "pipe read failed");
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Builds the search path exported to children.
///
/// Order: `extra`, `~/.local/bin`, `/usr/local/bin`, `/opt/homebrew/bin`,
/// `~/go/bin`, `~/.cargo/bin`, then the inherited `PATH`.
pub fn augmented_path(extra: &[PathBuf]) -> OsString {
    let inherited = env::var_os("PATH").unwrap_or_else(|| OsString::from(FALLBACK_PATH));
    let home = dirs::home_dir();

    let mut entries: Vec<PathBuf> = extra.to_vec();
    if let Some(home) = &home {
        entries.push(home.join(".local/bin"));
    }
    entries.extend(SYSTEM_BIN_DIRS.iter().map(PathBuf::from));
    if let Some(home) = &home {
        entries.push(home.join("go/bin"));
        entries.push(home.join(".cargo/bin"));
    }
    entries.extend(env::split_paths(&inherited));

    env::join_paths(entries).unwrap_or(inherited)
}

/// Resolves `executable` to a file to spawn.
///
/// Names containing a path separator are taken as paths (relative ones
/// against `working_dir`); bare names are looked up in `search_path`.
pub fn resolve_executable(
    executable: &str,
    search_path: &OsString,
    working_dir: &Path,
) -> Result<PathBuf> {
    let not_found = || Error::ExecutableNotFound {
        path: executable.to_string(),
    };
    if executable.is_empty() {
        return Err(not_found());
    }

    if executable.contains(std::path::MAIN_SEPARATOR) {
        let path = working_dir.join(executable);
        return if path.is_file() {
            Ok(path)
        } else {
            Err(not_found())
        };
    }

    which::which_in(executable, Some(search_path), working_dir).map_err(|_| not_found())
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
