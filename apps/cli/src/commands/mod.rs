pub mod text;
pub mod classify;
pub mod config;

pub use text::*;
pub use classify::*;
pub use config::*;

use std::io::Read;
use anyhow::Result;

use crate::error::CliError;

/// `--text` が指定されていなければ標準入力を読む
pub fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(CliError::from)?;
            Ok(input)
        }
    }
}
