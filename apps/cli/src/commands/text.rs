use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use samurai_editor::{run_command, CommandReport, EditorHost, MemoryBuffer, TextCommand};
use crate::commands::read_input;
use crate::error::CliError;
use crate::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextAction {
    Normalize,
    Alnum,
    SafeString,
    Getalize,
    Ncr,
    LinesToCommas,
    CommasToLines,
    TabsToLines,
    LinesToTabs,
    Overlap,
    Uniq,
    TsvToTable,
    Anchor { url: String },
    Replace { find: String, with: String },
}

#[derive(Debug, Serialize)]
struct TextOutput<'a> {
    command: &'a str,
    edits: usize,
    text: &'a str,
}

/// Result of running one action over the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub command: TextCommand,
    pub edits: usize,
    pub text: String,
}

impl TextAction {
    pub fn command(&self) -> TextCommand {
        match self {
            Self::Normalize => TextCommand::UnicodeNormalize,
            Self::Alnum => TextCommand::AlnumNormalize,
            Self::SafeString => TextCommand::SafeString,
            Self::Getalize => TextCommand::Getalize,
            Self::Ncr => TextCommand::NumericCharacterReference,
            Self::LinesToCommas => TextCommand::LinesToCommas,
            Self::CommasToLines => TextCommand::CommasToLines,
            Self::TabsToLines => TextCommand::TabsToLines,
            Self::LinesToTabs => TextCommand::LinesToTabs,
            Self::Overlap => TextCommand::Overlap,
            Self::Uniq => TextCommand::Uniq,
            Self::TsvToTable => TextCommand::TsvToTable,
            Self::Anchor { .. } => TextCommand::AnchorPaste,
            Self::Replace { find, with } => TextCommand::Replace {
                find: find.clone(),
                replace: with.clone(),
            },
        }
    }
}

pub fn text_command(action: TextAction, text: Option<String>, output: OutputFormat) -> Result<()> {
    let input = read_input(text)?;
    let transformed = transform(&action, &input)?;

    match output {
        OutputFormat::Pretty => print!("{}", transformed.text),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&TextOutput {
                command: transformed.command.name(),
                edits: transformed.edits,
                text: &transformed.text,
            })
            .map_err(CliError::from)?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Runs `action` over `input` and returns the resulting buffer.
///
/// The input is the buffer, fully selected. `tsv-to-table` treats it as the
/// clipboard instead, and `replace` leaves it unselected so every match is hit.
pub fn transform(action: &TextAction, input: &str) -> Result<Transformed, CliError> {
    if let TextAction::Replace { find, .. } = action {
        if find.is_empty() {
            return Err(CliError::invalid_args("--find must not be empty"));
        }
    }

    let command = action.command();
    let mut buffer = match action {
        TextAction::TsvToTable => MemoryBuffer::new("").with_clipboard(input),
        TextAction::Anchor { url } => MemoryBuffer::new(input).with_clipboard(url),
        _ => MemoryBuffer::new(input),
    };
    if !matches!(action, TextAction::TsvToTable | TextAction::Replace { .. }) {
        buffer.select_all();
    }

    let report: CommandReport = run_command(&mut buffer, &command)?;
    debug!("{} made {} edits", command.name(), report.edits);

    Ok(Transformed {
        command,
        edits: report.edits,
        text: buffer.text(),
    })
}
