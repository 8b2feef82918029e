mod enforce;

pub use enforce::{EnforceInput, EnforceOperation, EnforceOutcome};
