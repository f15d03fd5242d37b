// External launcher invocation and its stdout line protocol.
//
// The launcher is an opaque executable that provisions a game server for a
// ROM and reports back over stdout, one line at a time:
//
//   server full          the fleet is at capacity
//   address=<host:port>  where the provisioned game server listens
//
// Anything else is progress chatter and is ignored. The exit status carries
// no information; the lines are the whole protocol.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::time::timeout;

use super::config::GatewayConfig;
use crate::{log_debug, log_error, log_warn};

const ADDRESS_PREFIX: &str = "address=";

/// The token the orchestration platform embeds in the address field when it
/// failed to schedule the game server. An ad hoc convention, but it is the
/// only failure channel the launcher's downstream gives us.
const PROBLEM_TOKEN: &str = "problem";

pub const ERR_SERVER_FULL: &str = "Server Full";
pub const ERR_COULD_NOT_OPEN: &str = "Could not open launcher.";
pub const ERR_KUBERNETES: &str = "Kubernetes didn't start.";
pub const ERR_TIMED_OUT: &str = "Launcher timed out.";
pub const ERR_NO_ADDRESS: &str = "Launcher reported no address.";

/// Outcome of one launcher run. No partial states: either we have an
/// address to redirect to or a reason to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchResult {
    Address(String),
    Error(String),
}

/// Interpret the launcher's stdout lines.
///
/// Precedence: a `server full` line wins regardless of anything else, then
/// the problem-token override, then the captured address. A later
/// `address=` line overwrites an earlier one.
pub fn interpret_output<I, S>(lines: I) -> LaunchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut server_full = false;
    let mut address: Option<String> = None;

    for line in lines {
        let line = line.as_ref().trim();

        if line == "server full" {
            server_full = true;
        } else if let Some(rest) = line.strip_prefix(ADDRESS_PREFIX) {
            address = Some(rest.to_string());
        }
        // any other line is ignored
    }

    if server_full {
        return LaunchResult::Error(ERR_SERVER_FULL.to_string());
    }

    match address {
        Some(addr) if addr.contains(PROBLEM_TOKEN) => {
            LaunchResult::Error(ERR_KUBERNETES.to_string())
        }
        Some(addr) => LaunchResult::Address(addr),
        None => LaunchResult::Error(ERR_NO_ADDRESS.to_string()),
    }
}

/// Whether a launcher-reported address is safe to place in a Location
/// header. Host:port shapes only; anything else smells like header
/// injection or launcher misbehavior.
pub fn is_valid_address(addr: &str) -> bool {
    !addr.is_empty()
        && addr
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ':' | '-' | '_'))
}

async fn collect_stdout_lines(child: &mut Child) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(stdout) = child.stdout.take() {
        let mut reader = BufReader::new(stdout).lines();
        while let Ok(Some(line)) = reader.next_line().await {
            log_debug!("[LAUNCHER] {}", line);
            lines.push(line);
        }
    }

    // Exit status is not inspected; reaping the child is all that matters.
    let _ = child.wait().await;

    lines
}

/// Run the external launcher for `rom` and interpret its output.
///
/// The ROM identifier is passed as a single argv element — never through a
/// shell. The whole spawn-read-wait sequence runs under the configured
/// timeout; on expiry the child is killed so the next request isn't stuck
/// behind a hung launcher.
pub async fn run_launcher(config: &GatewayConfig, rom: &str) -> LaunchResult {
    let mut child = match Command::new(&config.launcher_path)
        .arg(rom)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            log_error!(
                "[LAUNCHER] Failed to start {}: {}",
                config.launcher_path,
                e
            );
            return LaunchResult::Error(ERR_COULD_NOT_OPEN.to_string());
        }
    };

    let deadline = Duration::from_secs(config.launch_timeout_secs);
    let collected = timeout(deadline, collect_stdout_lines(&mut child)).await;

    match collected {
        Ok(lines) => interpret_output(lines),
        Err(_) => {
            log_warn!(
                "[LAUNCHER] Timed out after {}s, killing child",
                config.launch_timeout_secs
            );
            let _ = child.kill().await;
            LaunchResult::Error(ERR_TIMED_OUT.to_string())
        }
    }
}
