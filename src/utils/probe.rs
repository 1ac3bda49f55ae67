use std::process::Command;
use tracing::debug;

/// Asks `binary` for its version and returns the first word it prints.
///
/// A missing binary, a failing command or silent output all come back as an
/// empty string, which parses to the unknown version.
pub fn installed_version(binary: &str) -> String {
    let output = match Command::new(binary).arg("version").output() {
        Ok(output) => output,
        Err(e) => {
            debug!(binary, error = %e, "could not run version command");
            return String::new();
        }
    };

    if !output.status.success() {
        debug!(binary, status = %output.status, "version command failed");
        return String::new();
    }

    first_token(&String::from_utf8_lossy(&output.stdout))
}

fn first_token(stdout: &str) -> String {
    stdout
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_first_word() {
        assert_eq!(
            first_token("v0.5.3-pre+dirty 2019-07-01T00:00:00Z abc123\n"),
            "v0.5.3-pre+dirty"
        );
        assert_eq!(first_token("  1.0.0\n"), "1.0.0");
        assert_eq!(first_token(""), "");
    }

    #[test]
    fn missing_binary_reports_nothing() {
        assert_eq!(installed_version("bin-fetch-test-binary-that-does-not-exist"), "");
    }
}
