mod annotation;
mod console;

pub(crate) use annotation::report_failure;
pub(crate) use console::ConsoleReporter;
