//! Wrapping a cargo command line in `cargo watch`.

/// Flags handed to `cargo watch`: clear the screen, quiet, run a shell command.
pub const WATCH_FLAGS: &str = "-cqs";

/// A cargo command re-run by `cargo watch` on file changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchCommand {
    program: String,
    inner: Vec<String>,
}

impl WatchCommand {
    pub fn new(program: impl Into<String>, inner: Vec<String>) -> Self {
        Self {
            program: program.into(),
            inner,
        }
    }

    /// The re-invoked command as one shell line.
    ///
    /// `cargo watch -s` hands this string to a shell, so tokens holding
    /// whitespace or shell metacharacters are single-quoted.
    pub fn inner_command(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(&self.inner))
    }

    /// Tokens as they would be typed in a shell, with the inner command quoted.
    pub fn tokens(&self) -> Vec<String> {
        vec![
            "watch".to_string(),
            WATCH_FLAGS.to_string(),
            format!("\"{}\"", self.inner_command()),
        ]
    }

    /// Tokens for direct process execution; the inner command stays one argument.
    pub fn argv(&self) -> Vec<String> {
        vec![
            "watch".to_string(),
            WATCH_FLAGS.to_string(),
            self.inner_command(),
        ]
    }
}

/// Wraps `command` (subcommand plus args) for `cargo watch`.
pub fn wrap_watch(command: &[String]) -> Vec<String> {
    WatchCommand::new("cargo", command.to_vec()).tokens()
}
