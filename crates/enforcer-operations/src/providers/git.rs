use std::path::PathBuf;

use async_trait::async_trait;
use enforcer_git::GitCli;

use crate::Result;
use crate::traits::GitRunner;

pub struct GitCliRunner {
    cli: GitCli,
}

impl GitCliRunner {
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            cli: GitCli::new(workdir),
        }
    }
}

#[async_trait]
impl GitRunner for GitCliRunner {
    async fn run(&self, args: &[String]) -> Result<String> {
        Ok(self.cli.run(args).await?)
    }
}
