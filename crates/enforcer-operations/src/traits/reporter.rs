/// Destination for the informational lines shown in the pipeline log.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
}

impl<T: Reporter + ?Sized> Reporter for &T {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}
