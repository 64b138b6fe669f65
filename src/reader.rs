use crate::config::Source;
use anyhow::Context;
use std::fs;
use std::io::{self, Read};

/// Raw JSON text for the configured source.
pub fn read_source(source: &Source) -> anyhow::Result<String> {
    match source {
        Source::Stdin => {
            tracing::debug!("reading bounding boxes from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Source::File(path) => {
            tracing::debug!(path = %path.display(), "reading bounding boxes from file");
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        Source::Inline(json) => Ok(json.clone()),
    }
}
