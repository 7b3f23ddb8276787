//! Rendering of command results.
//!
//! Both renderers are stateless: the markup "template" is a block writer
//! supplied by each command, applied once per record.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Markup template failed on record {index}")]
    Template { index: usize },
}

/// Serialize records as an indented JSON array.
pub fn render_structured<T: Serialize>(records: &[T]) -> Result<Vec<u8>, RenderError> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Apply `write_block` to every record in order, separating blocks with a
/// blank line. No records renders as an empty string.
pub fn render_markup<T, F>(records: &[T], write_block: F) -> Result<String, RenderError>
where
    F: Fn(&mut String, &T) -> fmt::Result,
{
    let mut out = String::new();

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_block(&mut out, record).map_err(|_| RenderError::Template { index })?;
    }

    Ok(out)
}
