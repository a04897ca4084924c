//! Segment command implementation.

use crate::cli::SegmentArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use symposium_dialogue::DialogueSegmenter;

/// Execute the segment command.
pub async fn execute_segment(args: SegmentArgs, formatter: &Formatter) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let transcript = DialogueSegmenter::new().segment(&text);
    println!("{}", formatter.format_transcript(&transcript)?);
    Ok(())
}
