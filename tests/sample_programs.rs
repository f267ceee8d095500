// tests/sample_programs.rs
//
// Direct-run output of the greeting programs.
//
use std::process::Command;

fn stdout_of(exe: &str) -> String {
    let out = Command::new(exe).output().unwrap();
    assert!(out.status.success(), "{exe} exited with {}", out.status);
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn hello_prints_one_line() {
    assert_eq!(stdout_of(env!("CARGO_BIN_EXE_hello")), "Hello, World!\n");
}

#[test]
fn hello_add_prints_greeting_then_sum() {
    assert_eq!(stdout_of(env!("CARGO_BIN_EXE_hello-add")), "Hello, World!\n2 + 3 = 5\n");
}

#[test]
fn library_matches_programs() {
    use toolshim::greeting::{add, greet, greet_default};
    assert_eq!(greet_default(), greet("World"));
    assert_eq!(format!("{}\n", greet_default()), stdout_of(env!("CARGO_BIN_EXE_hello")));
    assert_eq!(add(2, 3), 5);
}

#[cfg(unix)]
#[test]
fn closed_stdout_is_not_a_panic() {
    use std::process::Stdio;

    for exe in [env!("CARGO_BIN_EXE_hello"), env!("CARGO_BIN_EXE_hello-add")] {
        let mut child = Command::new(exe)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();
        drop(child.stdout.take());
        let status = child.wait().unwrap();
        // 101 is the panic exit code; a broken pipe must surface as an io error.
        assert_ne!(status.code(), Some(101), "{exe} panicked on closed stdout");
    }
}
