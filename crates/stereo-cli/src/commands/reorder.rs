use crate::cli::ReorderArgs;
use crate::error::Result;
use std::io::Write;
use stereokit::core::stereo::parity::ParityRecord;
use tracing::debug;

pub fn run(args: ReorderArgs) -> Result<()> {
    let reordered = reorder(&args)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", reordered)?;
    writeln!(stdout, "sign: {}", reordered.sign_class())?;
    Ok(())
}

fn reorder(args: &ReorderArgs) -> Result<ParityRecord> {
    let mut record = ParityRecord::new(&args.refs, args.value)?;
    debug!("Reordering {} to {:?}.", record, args.to);
    record.reorder(&args.to)?;
    Ok(record)
}
