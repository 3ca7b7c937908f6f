use tracing::{debug, info, warn};
use samurai_types::{Region, SamuraiError};
use samurai_charset::{getalize, normalize_alnum, normalize_selective, to_safe_string};
use samurai_transpose::{
    anchor, assign_replacements, commas_to_lines, lines_to_commas, lines_to_tabs,
    numeric_character_reference, overlap_lines, split_rows, split_tsv_cells, tabs_to_lines,
    tsv_to_table, uniq_lines,
};
use crate::host::EditorHost;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    SafeString,
    UnicodeNormalize,
    AlnumNormalize,
    Getalize,
    NumericCharacterReference,
    LinesToCommas,
    CommasToLines,
    TabsToLines,
    LinesToTabs,
    Overlap,
    Uniq,
    RegionRowPaste,
    RegionTsvPaste,
    TsvToTable,
    AnchorPaste,
    Replace { find: String, replace: String },
}

impl TextCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SafeString => "convert_safe_string",
            Self::UnicodeNormalize => "unicode_normalize",
            Self::AlnumNormalize => "alnum_normalize",
            Self::Getalize => "uncompatible_getalize",
            Self::NumericCharacterReference => "numerical_character_reference",
            Self::LinesToCommas => "lines_to_commas",
            Self::CommasToLines => "commas_to_lines",
            Self::TabsToLines => "tabs_to_lines",
            Self::LinesToTabs => "lines_to_tabs",
            Self::Overlap => "overlap",
            Self::Uniq => "uniq",
            Self::RegionRowPaste => "region_row_paste",
            Self::RegionTsvPaste => "region_tsv_paste",
            Self::TsvToTable => "tsv_to_table",
            Self::AnchorPaste => "anchor_paste",
            Self::Replace { .. } => "replace",
        }
    }
}

/// What a command changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandReport {
    /// Number of regions replaced or inserted.
    pub edits: usize,
    /// Selection indices a paste command had no clipboard entry for.
    pub unfilled: Vec<usize>,
}

pub fn run_command<H: EditorHost>(
    host: &mut H,
    command: &TextCommand,
) -> Result<CommandReport, SamuraiError> {
    info!("Running command: {}", command.name());
    let selection = first_selection(host);

    let report = match command {
        TextCommand::SafeString => transform_selection_or_buffer(host, to_safe_string)?,
        TextCommand::UnicodeNormalize => transform_selection_or_buffer(host, normalize_selective)?,
        TextCommand::AlnumNormalize => transform_selection_or_buffer(host, normalize_alnum)?,
        TextCommand::Getalize => transform_selection_or_buffer(host, getalize)?,
        TextCommand::NumericCharacterReference => {
            if selection.empty() {
                CommandReport::default()
            } else {
                transform_region(host, selection, numeric_character_reference)?
            }
        }
        TextCommand::LinesToCommas => transform_region(host, selection, lines_to_commas)?,
        TextCommand::CommasToLines => transform_region(host, selection, commas_to_lines)?,
        TextCommand::TabsToLines => transform_region(host, selection, tabs_to_lines)?,
        TextCommand::LinesToTabs => transform_region(host, selection, lines_to_tabs)?,
        TextCommand::Overlap => transform_region(host, selection, overlap_lines)?,
        TextCommand::Uniq => transform_region(host, selection, uniq_lines)?,
        TextCommand::RegionRowPaste => {
            let replacements = split_rows(&host.clipboard());
            paste_into_selections(host, &replacements)?
        }
        TextCommand::RegionTsvPaste => {
            let replacements = split_tsv_cells(&host.clipboard());
            paste_into_selections(host, &replacements)?
        }
        TextCommand::TsvToTable => {
            let html = tsv_to_table(&host.clipboard());
            host.insert(selection.start, &html)?;
            CommandReport { edits: 1, ..Default::default() }
        }
        TextCommand::AnchorPaste => anchor_paste(host)?,
        TextCommand::Replace { find, replace } => replace_literal(host, find, replace)?,
    };

    debug!("Command {} made {} edits", command.name(), report.edits);
    Ok(report)
}

fn first_selection<H: EditorHost>(host: &H) -> Region {
    host.selections()
        .first()
        .copied()
        .unwrap_or_else(|| Region::caret(0))
}

/// 選択範囲がなければバッファ全体を対象にする
fn selection_or_buffer<H: EditorHost>(host: &H) -> Region {
    let selection = first_selection(host);
    if selection.empty() {
        host.whole_buffer()
    } else {
        selection
    }
}

fn transform_region<H, F>(host: &mut H, region: Region, f: F) -> Result<CommandReport, SamuraiError>
where
    H: EditorHost,
    F: Fn(&str) -> String,
{
    let text = host.substr(region);
    let transformed = f(&text);
    host.replace(region, &transformed)?;
    Ok(CommandReport { edits: 1, ..Default::default() })
}

fn transform_selection_or_buffer<H, F>(host: &mut H, f: F) -> Result<CommandReport, SamuraiError>
where
    H: EditorHost,
    F: Fn(&str) -> String,
{
    let region = selection_or_buffer(host);
    transform_region(host, region, f)
}

/// Replaces each region with its text, last region first so earlier offsets stay valid.
fn apply_edits<H: EditorHost>(host: &mut H, mut edits: Vec<(Region, String)>) -> Result<usize, SamuraiError> {
    edits.sort_by(|a, b| b.0.cmp(&a.0));
    let count = edits.len();
    for (region, text) in edits {
        host.replace(region, &text)?;
    }
    Ok(count)
}

fn paste_into_selections<H: EditorHost>(
    host: &mut H,
    replacements: &[String],
) -> Result<CommandReport, SamuraiError> {
    let placeholders: Vec<Region> = host
        .selections()
        .into_iter()
        .filter(|region| !region.empty())
        .collect();

    let (filled, unfilled) = assign_replacements(&placeholders, replacements);
    for index in &unfilled {
        warn!("Placeholder[{}] is not replaced.", index);
    }

    let edits = apply_edits(host, filled)?;
    Ok(CommandReport { edits, unfilled })
}

fn anchor_paste<H: EditorHost>(host: &mut H) -> Result<CommandReport, SamuraiError> {
    let url = host.clipboard();
    let selection = first_selection(host);

    if selection.empty() {
        host.insert(selection.start, &anchor(&url, &url))?;
    } else {
        let text = host.substr(selection);
        host.replace(selection, &anchor(&url, &text))?;
    }
    Ok(CommandReport { edits: 1, ..Default::default() })
}

/// 選択範囲内、または選択がなければバッファ全体で文字列を置換する
fn replace_literal<H: EditorHost>(
    host: &mut H,
    find: &str,
    replace: &str,
) -> Result<CommandReport, SamuraiError> {
    if find.is_empty() {
        debug!("Empty search string, nothing to replace");
        return Ok(CommandReport::default());
    }

    let selection = first_selection(host);
    if !selection.empty() {
        return transform_region(host, selection, |text| text.replace(find, replace));
    }

    let matches = host.find_all(&regex::escape(find))?;
    let edits = matches
        .into_iter()
        .map(|region| (region, replace.to_string()))
        .collect();
    let edits = apply_edits(host, edits)?;
    Ok(CommandReport { edits, ..Default::default() })
}
