use std::{io::Write, process::Command};

use tempfile::NamedTempFile;

use crate::error::ForeignExecutionError;

/// Interpreter program used for `python` code when none is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Runs embedded foreign code on behalf of the evaluator.
///
/// The evaluator blocks on [`ForeignExecutor::execute`] and writes the
/// returned output verbatim. Implementations other than [`ProcessExecutor`]
/// are mostly useful in tests.
pub trait ForeignExecutor {
    /// Executes `code` written in `language` and returns its captured output.
    ///
    /// # Errors
    /// Returns a [`ForeignExecutionError`] if the language is unsupported or
    /// the code could not be run to a successful exit.
    fn execute(&mut self, language: &str, code: &str) -> Result<String, ForeignExecutionError>;
}

impl<T: ForeignExecutor + ?Sized> ForeignExecutor for &mut T {
    fn execute(&mut self, language: &str, code: &str) -> Result<String, ForeignExecutionError> {
        (**self).execute(language, code)
    }
}

/// Executes embedded code in an external interpreter process.
///
/// Only `python` is supported. The code is written to a temporary file that
/// is deleted when the call returns, then the interpreter is run with the
/// file path as its only argument. Standard output and standard error are
/// captured through separate pipes and returned as all of standard output
/// followed by all of standard error, so writes to the two streams are not
/// interleaved in their original order.
///
/// There is no timeout: a script that never exits blocks the caller forever.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    python: String,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl ProcessExecutor {
    /// Creates an executor that runs `python` code with `python_program`.
    #[must_use]
    pub fn new(python_program: impl Into<String>) -> Self {
        Self { python: python_program.into() }
    }

    /// The program used to run `python` code.
    #[must_use]
    pub fn python_program(&self) -> &str {
        &self.python
    }

    fn run_python(&self, code: &str) -> Result<String, ForeignExecutionError> {
        let mut script = tempfile::Builder::new().prefix("embedded")
                                                 .suffix(".py")
                                                 .tempfile()
                                                 .map_err(ForeignExecutionError::TempFile)?;
        write_script(&mut script, code)?;

        log::debug!("running {} {}", self.python, script.path().display());
        let result = Command::new(&self.python).arg(script.path()).output();
        // A failed removal only leaves a stray file in the temp directory.
        if let Err(e) = script.close() {
            log::warn!("could not remove embedded script: {e}");
        }

        let output = result.map_err(|source| ForeignExecutionError::Launch { program: self.python
                                                                                      .clone(),
                                                                             source })?;

        let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
        captured.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ForeignExecutionError::Failed { program: self.python.clone(),
                                                       status:  output.status,
                                                       output:  captured, });
        }

        Ok(captured)
    }
}

impl ForeignExecutor for ProcessExecutor {
    fn execute(&mut self, language: &str, code: &str) -> Result<String, ForeignExecutionError> {
        match language {
            "python" => self.run_python(code),
            other => Err(ForeignExecutionError::UnsupportedLanguage { language: other.to_string() }),
        }
    }
}

fn write_script(script: &mut NamedTempFile, code: &str) -> Result<(), ForeignExecutionError> {
    script.write_all(code.as_bytes()).map_err(ForeignExecutionError::TempFile)?;
    script.flush().map_err(ForeignExecutionError::TempFile)
}
