use crate::cli::AssignArgs;
use crate::config::InputDocument;
use crate::error::Result;
use crate::report;
use stereokit::workflows::assign::assign_parities;
use tracing::info;

pub fn run(args: AssignArgs) -> Result<()> {
    info!("Starting 'assign' command with input {:?}.", args.input);

    let document = InputDocument::from_file(&args.input)?;
    let (molecule, config) = document.into_parts(args.skip_incomplete.then_some(true))?;

    let assigned = assign_parities(&molecule, &config)?;
    info!("Derived {} parity records.", assigned.len());

    report::write_assignments(std::io::stdout().lock(), &assigned, args.format)
}
