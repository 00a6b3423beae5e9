use nula::{
    error::ForeignExecutionError,
    interpreter::foreign::{DEFAULT_PYTHON, ForeignExecutor, ProcessExecutor},
};

#[test]
fn default_program_is_python3() {
    assert_eq!(ProcessExecutor::default().python_program(), DEFAULT_PYTHON);
    assert_eq!(ProcessExecutor::new("python").python_program(), "python");
}

#[test]
fn only_python_is_supported() {
    let err = ProcessExecutor::default().execute("lua", "print(1)").unwrap_err();
    assert!(matches!(err, ForeignExecutionError::UnsupportedLanguage { ref language } if language == "lua"),
            "{err:?}");
}

#[test]
fn missing_interpreter_is_launch_error() {
    let err = ProcessExecutor::new("nula-test-no-such-interpreter").execute("python", "pass")
                                                                   .unwrap_err();
    assert!(matches!(err, ForeignExecutionError::Launch { .. }), "{err:?}");
}

#[cfg(unix)]
#[test]
fn code_reaches_the_interpreter_through_a_file() {
    // `cat` prints the script it is handed, standing in for the interpreter.
    let output = ProcessExecutor::new("cat").execute("python", "print('hi')\n").unwrap();
    assert_eq!(output, "print('hi')\n");
}

#[cfg(unix)]
#[test]
fn unsuccessful_exit_is_reported_with_output() {
    let err = ProcessExecutor::new("false").execute("python", "pass").unwrap_err();
    assert!(matches!(err, ForeignExecutionError::Failed { .. }), "{err:?}");
}

#[cfg(unix)]
#[test]
fn script_file_is_removed_after_the_call() {
    // `echo` prints the script path it is handed.
    let output = ProcessExecutor::new("echo").execute("python", "print(1)").unwrap();
    let path = std::path::Path::new(output.trim_end());

    let name = path.file_name().and_then(|n| n.to_str()).unwrap();
    assert!(name.starts_with("embedded") && name.ends_with(".py"), "{name}");
    assert!(!path.exists(), "{} was left behind", path.display());
}

#[cfg(unix)]
#[test]
fn standard_output_comes_before_standard_error() {
    let output = ProcessExecutor::new("sh").execute("python", "echo err >&2\necho out\n").unwrap();
    assert_eq!(output, "out\nerr\n");
}
