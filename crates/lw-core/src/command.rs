use std::fmt;

/// The backend invocation: an executable and its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    executable: String,
    args: Vec<String>,
}

impl Command {
    pub fn new(executable: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            executable: executable.into(),
            args,
        }
    }

    /// Split a command line on whitespace; the first token is the executable.
    ///
    /// Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let executable = tokens.next()?;
        Some(Self::new(executable, tokens.map(String::from).collect()))
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
