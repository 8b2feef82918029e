use async_trait::async_trait;

use crate::Result;

#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Runs git with `args` and returns the complete standard output once the
    /// process has exited.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be started or exits unsuccessfully.
    async fn run(&self, args: &[String]) -> Result<String>;
}

#[async_trait]
impl<T: GitRunner + ?Sized> GitRunner for &T {
    async fn run(&self, args: &[String]) -> Result<String> {
        (**self).run(args).await
    }
}
