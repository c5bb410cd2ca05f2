//! Pass/fail probes with formatted reporting

use common::{shell, CommandOutput};

/// Run a probe and print its verdict.
///
/// Passes iff the command exits 0 and, when given, the expected fragment
/// appears in its stdout. Prints `✅ description` on pass, otherwise
/// `❌ description` with the captured stderr indented beneath it. Returns the
/// verdict so the caller can fold it into an overall result.
pub async fn check(description: &str, command: &str, expected: Option<&str>) -> bool {
    let out = shell(command).await;
    report(description, &out, expected)
}

fn report(description: &str, out: &CommandOutput, expected: Option<&str>) -> bool {
    let passed = out.success() && expected.map_or(true, |needle| out.stdout.contains(needle));

    if passed {
        println!("✅ {}", description);
    } else {
        println!("❌ {}", description);
        if !out.stderr.is_empty() {
            println!("   Error: {}", out.stderr);
        }
    }

    passed
}

/// Print a category header.
pub fn section(title: &str) {
    println!("\n{}", title);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(stdout: &str, stderr: &str, code: i32) -> CommandOutput {
        CommandOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            code,
        }
    }

    #[test]
    fn passes_on_zero_exit_without_expectation() {
        assert!(report("X is running", &output("X", "", 0), None));
    }

    #[test]
    fn fails_on_nonzero_exit_regardless_of_output() {
        assert!(!report(
            "Y exists",
            &output("exists", "not found", 1),
            Some("exists")
        ));
    }

    #[test]
    fn fails_when_fragment_missing_despite_zero_exit() {
        assert!(!report(
            "WordPress database exists",
            &output("mysql\ninformation_schema", "", 0),
            Some("wordpress")
        ));
    }

    #[tokio::test]
    async fn check_runs_the_command() {
        assert!(check("echo works", "echo X", None).await);
        assert!(
            !check(
                "grep finds nothing",
                "printf 'mysql\ninformation_schema\n' | grep wordpress",
                None
            )
            .await
        );
    }
}
