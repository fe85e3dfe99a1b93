use std::io::{BufRead, Write};

use tracing::warn;

use crate::types::feed_table::{FeedSelection, FeedTable};

use super::app_error::AppError;

/// Asks for a line until a known one is entered.
pub fn prompt_route<'a, R: BufRead, W: Write>(
    feeds: &'a FeedTable,
    input: &mut R,
    output: &mut W,
) -> Result<FeedSelection<'a>, AppError> {
    let choices = feeds.routes().join(", ");

    loop {
        writeln!(output, "Please choose a line among the following ones: ")?;
        writeln!(output, "{}", choices)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::NoSelection);
        }

        match feeds.select(&line) {
            Ok(selection) => return Ok(selection),
            Err(e) => warn!("{}", e),
        }
    }
}

/// Uses `preset` when it names a known line, otherwise falls back to asking.
pub fn choose_route<'a, R: BufRead, W: Write>(
    feeds: &'a FeedTable,
    preset: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<FeedSelection<'a>, AppError> {
    if let Some(preset) = preset {
        match feeds.select(preset) {
            Ok(selection) => return Ok(selection),
            Err(e) => warn!("{}", e),
        }
    }

    prompt_route(feeds, input, output)
}
