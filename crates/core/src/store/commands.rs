//! Synchronous shell execution for the `pass` command templates.

use std::process::Command;

/// Run `cmd` through the shell and merge its output streams.
///
/// Non-empty standard output is followed by a newline and then standard
/// error; empty standard output yields standard error alone, with no
/// leading blank line. The exit status is deliberately ignored: a failing
/// command reports itself through the text shown to the user, never
/// through a propagated error.
pub fn run_shell_command(cmd: &str) -> String {
	let output = match Command::new("sh").arg("-c").arg(cmd).output() {
		Ok(output) => output,
		Err(err) => return format!("failed to run `{cmd}`: {err}"),
	};
	let stdout = String::from_utf8_lossy(&output.stdout);
	let stderr = String::from_utf8_lossy(&output.stderr);
	if stdout.is_empty() {
		stderr.into_owned()
	} else {
		format!("{stdout}\n{stderr}")
	}
}
