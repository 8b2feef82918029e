use super::ResolveArgs;
use crate::error::Result;

pub(crate) fn run(args: &ResolveArgs) -> Result<()> {
    let context = args.pull_request.context()?;
    println!("{}", args.pull_request.changelog_path(&context));
    Ok(())
}
