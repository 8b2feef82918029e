use std::sync::Mutex;

use async_trait::async_trait;
use enforcer_git::GitError;

use crate::Result;
use crate::traits::{GitRunner, Reporter};

pub struct MockGitRunner {
    output: String,
    fail: bool,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockGitRunner {
    #[must_use]
    pub fn with_output(output: &str) -> Self {
        Self {
            output: output.to_string(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            output: String::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl GitRunner for MockGitRunner {
    async fn run(&self, args: &[String]) -> Result<String> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(args.to_vec());

        if self.fail {
            return Err(GitError::CommandFailed {
                args: args.join(" "),
                status: "exit status: 128".to_string(),
            }
            .into());
        }
        Ok(self.output.clone())
    }
}

#[derive(Default)]
pub struct MockReporter {
    messages: Mutex<Vec<String>>,
}

impl MockReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock poisoned").clone()
    }
}

impl Reporter for MockReporter {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .expect("lock poisoned")
            .push(message.to_string());
    }
}
