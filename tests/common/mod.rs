#![allow(dead_code)]

use std::{process::ExitStatus, thread};

use nula::{Error, error::ForeignExecutionError, execute_with, interpreter::foreign::ForeignExecutor};

/// Foreign executor that records every request and answers with canned
/// output instead of launching a process.
#[derive(Default)]
pub struct RecordingExecutor {
    pub calls:  Vec<(String, String)>,
    pub output: String,
    pub fails:  bool,
}

impl RecordingExecutor {
    pub fn answering(output: &str) -> Self {
        Self { output: output.to_string(),
               ..Self::default() }
    }

    /// Reports an unsuccessful exit after printing `output`.
    pub fn failing(output: &str) -> Self {
        Self { output: output.to_string(),
               fails: true,
               ..Self::default() }
    }
}

impl ForeignExecutor for RecordingExecutor {
    fn execute(&mut self, language: &str, code: &str) -> Result<String, ForeignExecutionError> {
        self.calls.push((language.to_string(), code.to_string()));
        if self.fails {
            return Err(ForeignExecutionError::Failed { program: "python3".to_string(),
                                                       status:  exit_status(1),
                                                       output:  self.output.clone(), });
        }
        Ok(self.output.clone())
    }
}

/// Runs `src` with a recording executor and returns the result together with
/// everything written to the output sink.
pub fn run(src: &str) -> (Result<(), Error>, String) {
    let mut out = Vec::new();
    let result = execute_with(src, &mut out, RecordingExecutor::default());
    (result, String::from_utf8(out).expect("output is UTF-8"))
}

pub fn assert_output(src: &str, expected: &str) {
    match run(src) {
        (Ok(()), output) => assert_eq!(output, expected, "unexpected output for:\n{src}"),
        (Err(e), output) => panic!("Script failed: {e}\nOutput so far:\n{output}"),
    }
}

pub fn assert_failure(src: &str) -> (Error, String) {
    match run(src) {
        (Err(e), output) => (e, output),
        (Ok(()), _) => panic!("Script succeeded but was expected to fail:\n{src}"),
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    std::os::unix::process::ExitStatusExt::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    std::os::windows::process::ExitStatusExt::from_raw(code.unsigned_abs())
}

/// Runs `f` on a thread with enough stack for programs that nest as deeply
/// as the interpreter allows, even in an unoptimized build.
pub fn with_large_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    thread::Builder::new().stack_size(256 * 1024 * 1024)
                          .spawn(f)
                          .expect("spawn test thread")
                          .join()
                          .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}
