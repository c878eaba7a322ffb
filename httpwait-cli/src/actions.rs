use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use httpwait_core::{LogLevel, Reporter};

const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Renders progress as GitHub workflow commands and writes step outputs to
/// the `$GITHUB_OUTPUT` file.
///
/// When that variable is unset (running outside a runner) outputs are
/// printed to stdout in the same `name=value` shape.
pub struct GithubActionsReporter {
    output_file: Option<PathBuf>,
    quiet: bool,
    write_error: Mutex<Option<io::Error>>,
}

impl GithubActionsReporter {
    pub fn new(output_file: Option<PathBuf>, quiet: bool) -> Self {
        Self {
            output_file,
            quiet,
            write_error: Mutex::new(None),
        }
    }

    pub fn from_env(quiet: bool) -> Self {
        let output_file = std::env::var_os(OUTPUT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(output_file, quiet)
    }

    /// Print a failure the way `core.setFailed` does.
    pub fn fail(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// First error hit while writing outputs, if any.
    pub fn take_write_error(&self) -> Option<io::Error> {
        self.write_error
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }

    fn append_output(&self, name: &str, value: &str) -> io::Result<()> {
        let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                write_output(&mut file, name, value, &delimiter)
            }
            None => write_output(&mut io::stdout().lock(), name, value, &delimiter),
        }
    }
}

impl Reporter for GithubActionsReporter {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info if self.quiet => {}
            LogLevel::Info => println!("{message}"),
            LogLevel::Warning => println!("::warning::{}", escape_data(message)),
            LogLevel::Error => println!("::error::{}", escape_data(message)),
        }
    }

    fn record_output(&self, name: &str, value: &str) {
        if let Err(e) = self.append_output(name, value) {
            tracing::error!(output = name, error = %e, "failed to write output");
            let mut slot = self.write_error.lock().unwrap_or_else(|e| e.into_inner());
            if slot.is_none() {
                *slot = Some(e);
            }
        }
    }
}

/// Escape a workflow command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Write one output entry; multi-line values use the heredoc form.
pub fn write_output<W: Write>(
    w: &mut W,
    name: &str,
    value: &str,
    delimiter: &str,
) -> io::Result<()> {
    if value.contains('\n') || value.contains('\r') {
        writeln!(w, "{name}<<{delimiter}")?;
        writeln!(w, "{value}")?;
        writeln!(w, "{delimiter}")
    } else {
        writeln!(w, "{name}={value}")
    }
}
