use enforcer_operations::traits::Reporter;

/// Writes informational lines to stdout, which pipelines capture as the
/// step log.
pub(crate) struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }
}
