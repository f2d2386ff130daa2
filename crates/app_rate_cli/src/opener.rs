//! Operating-system URL opener.

use std::process::{Command, Stdio};

use platform_host::{ExternalUrlFuture, ExternalUrlService};

/// Opens URLs with the platform's default handler (`open`, `xdg-open`, or the Windows URL
/// protocol handler).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExternalUrlService;

impl ExternalUrlService for SystemExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let (program, args) = opener_command(std::env::consts::OS, url);
            tracing::debug!(program, ?args, "launching url opener");
            let status = Command::new(program)
                .args(&args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map_err(|err| format!("failed to launch {program}: {err}"))?;
            if status.success() {
                Ok(())
            } else {
                Err(format!("{program} exited with {status}"))
            }
        })
    }
}

/// Returns the opener program and its arguments for `os` (as in [`std::env::consts::OS`]).
fn opener_command(os: &str, url: &str) -> (&'static str, Vec<String>) {
    match os {
        "macos" | "ios" => ("open", vec![url.to_string()]),
        // Bypasses cmd.exe, which would split the URL at `&`.
        "windows" => (
            "rundll32",
            vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()],
        ),
        _ => ("xdg-open", vec![url.to_string()]),
    }
}
