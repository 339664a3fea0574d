//! BZZ decoding through an external program.
//!
//! DjVuLibre ships a `bzz` utility; `bzz -d - -` decodes standard input to
//! standard output. [`CommandBzz`] runs such a program once per compressed
//! chunk.

use oxidjvu_core::BzzDecoder;
use oxidjvu_core::error::{DjvuError, Result};
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

/// A [`BzzDecoder`] that pipes each buffer through an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBzz {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandBzz {
    /// Program run by [`CommandBzz::default`].
    pub const DEFAULT_PROGRAM: &'static str = "bzz";

    /// Arguments passed by [`CommandBzz::default`].
    pub const DEFAULT_ARGS: [&'static str; 3] = ["-d", "-", "-"];

    /// Run `program` with no arguments.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Parse a whitespace-separated command line such as `"bzz -d - -"`.
    ///
    /// No quoting is supported.
    pub fn from_command_line(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| DjvuError::bzz_failure("empty BZZ command line"))?;
        Ok(words.fold(Self::new(program), Self::arg))
    }

    /// The program to run.
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// The arguments passed to the program.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl Default for CommandBzz {
    fn default() -> Self {
        Self::DEFAULT_ARGS
            .iter()
            .fold(Self::new(Self::DEFAULT_PROGRAM), |cmd, arg| cmd.arg(*arg))
    }
}

impl BzzDecoder for CommandBzz {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let name = self.program.to_string_lossy();
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DjvuError::bzz_failure(format!("cannot run {}: {}", name, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| DjvuError::bzz_failure(format!("{}: stdin not captured", name)))?;

        // Feed stdin from a second thread so a full stdout pipe cannot stall us.
        let (output, fed) = thread::scope(|scope| {
            let feeder = scope.spawn(move || stdin.write_all(input));
            let output = child.wait_with_output();
            (output, feeder.join())
        });

        let output =
            output.map_err(|e| DjvuError::bzz_failure(format!("{}: {}", name, e)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DjvuError::bzz_failure(format!(
                "{} exited with {}: {}",
                name,
                output.status,
                stderr.trim()
            )));
        }
        match fed {
            Ok(Ok(())) => Ok(output.stdout),
            Ok(Err(e)) => Err(DjvuError::bzz_failure(format!(
                "{}: writing input failed: {}",
                name, e
            ))),
            Err(_) => Err(DjvuError::bzz_failure(format!(
                "{}: input thread panicked",
                name
            ))),
        }
    }
}
