use std::error::Error;

use crate::environment::FailureFormat;

pub(crate) fn report_failure(error: &dyn Error, format: FailureFormat) {
    match format {
        FailureFormat::WorkflowCommand => println!("{}", workflow_error(error)),
        FailureFormat::Plain => eprint!("{}", plain_error(error)),
    }
}

fn workflow_error(error: &dyn Error) -> String {
    let mut message = error.to_string();

    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    format!("::error::{}", escape_data(&message))
}

fn plain_error(error: &dyn Error) -> String {
    let mut output = format!("error: {error}\n");

    let mut source = error.source();
    while let Some(cause) = source {
        output.push_str(&format!("caused by: {cause}\n"));
        source = cause.source();
    }

    output
}

// Workflow command data escaping: `%`, CR and LF.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
