use std::io::Write;

use crate::{
    error::{ForeignExecutionError, RuntimeError},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        foreign::ForeignExecutor,
    },
};

impl<W: Write, F: ForeignExecutor> Context<W, F> {
    /// Records an `import` or `from` directive.
    ///
    /// No module is loaded; the name is remembered and reported through the
    /// logger.
    pub(crate) fn record_import(&mut self, name: &str, directive: &str) {
        log::info!("imported module {name} ({directive})");
        self.imports.push(name.to_string());
    }

    /// Runs embedded foreign code through the configured executor.
    ///
    /// Captured output is written to the output sink verbatim and flushed.
    /// When the foreign program exits unsuccessfully, whatever it printed is
    /// still written before the error is returned.
    ///
    /// # Parameters
    /// - `language`: Language tag from the directive.
    /// - `code`: Foreign source code.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `ForeignExecution` if the executor fails.
    /// - `Output` if the captured output cannot be written.
    pub(crate) fn eval_embedded(&mut self,
                                language: &str,
                                code: &str,
                                line: usize)
                                -> EvalResult<()> {
        log::debug!("line {line}: executing embedded {language} code");

        match self.foreign.execute(language, code) {
            Ok(output) => {
                self.out.write_all(output.as_bytes())?;
                self.out.flush()?;
                Ok(())
            },
            Err(source) => {
                if let ForeignExecutionError::Failed { output, .. } = &source {
                    self.out.write_all(output.as_bytes())?;
                    self.out.flush()?;
                }
                Err(RuntimeError::ForeignExecution { source, line })
            },
        }
    }
}
