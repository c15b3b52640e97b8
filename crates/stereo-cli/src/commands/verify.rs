use crate::cli::VerifyArgs;
use crate::config::InputDocument;
use crate::error::{CliError, Result};
use crate::report;
use stereokit::workflows::verify::{Verdict, verify_parities};
use tracing::{info, warn};

pub fn run(args: VerifyArgs) -> Result<()> {
    info!("Starting 'verify' command with input {:?}.", args.input);

    let document = InputDocument::from_file(&args.input)?;
    let (molecule, config) = document.into_parts(args.skip_incomplete.then_some(true))?;

    let verifications = verify_parities(&molecule, &config)?;
    if verifications.is_empty() {
        warn!("No stereocenter in the input declares a parity; nothing to verify.");
    }

    report::write_verifications(std::io::stdout().lock(), &verifications, args.format)?;

    let inverted = verifications
        .iter()
        .filter(|v| v.verdict == Verdict::Inverted)
        .count();
    if inverted > 0 {
        return Err(CliError::InvertedParity { count: inverted });
    }
    Ok(())
}
