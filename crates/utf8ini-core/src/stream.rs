//! Suspending load and save
//!
//! These drivers run the same [`LineParser`] and [`lines`] renderer as the
//! blocking entry points, awaiting only on line reads and writes. The
//! resulting document or text is identical to the blocking variants.

use std::fmt::Write as _;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;
use utf8ini_ast::Document;

use crate::error::Result;
use crate::generator::{lines, GeneratorConfig, Line};
use crate::parser::LineParser;

/// Load INI text from an async reader into `doc`
///
/// The document is cleared first. On a read error the lines already
/// processed stay in the document.
pub async fn load_async<R>(doc: &mut Document, reader: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut parser = LineParser::new(doc);
    let mut reader = reader.lines();
    while let Some(line) = reader.next_line().await? {
        parser.feed(&line);
    }
    parser.finish();
    Ok(())
}

/// Write a document to an async writer with default configuration
pub async fn save_async<W>(doc: &Document, writer: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    save_async_with_config(doc, writer, GeneratorConfig::default()).await
}

/// Write a document to an async writer, then flush it
pub async fn save_async_with_config<W>(
    doc: &Document,
    mut writer: W,
    config: GeneratorConfig,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let eol = config.line_ending.as_str();
    let mut buffer = String::new();
    let mut sections = 0;
    let mut settings = 0;

    for line in lines(doc) {
        match line {
            Line::Header(_) => sections += 1,
            Line::Setting(_) => settings += 1,
            _ => {}
        }
        buffer.clear();
        // Formatting into a String cannot fail.
        let _ = write!(buffer, "{}{}", line, eol);
        writer.write_all(buffer.as_bytes()).await?;
    }
    writer.flush().await?;

    debug!("Saved {} sections with {} settings", sections, settings);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::parser::parse_str;

    const SAMPLE: &str = "; top\n[A]\nx = 1\n[B]\ny\n[A]\nz=3\n";

    #[tokio::test]
    async fn test_load_async_matches_blocking() {
        let mut doc = Document::new();
        load_async(&mut doc, SAMPLE.as_bytes()).await.unwrap();
        assert_eq!(generate(&doc), generate(&parse_str(SAMPLE)));
    }

    #[tokio::test]
    async fn test_save_async_matches_generate() {
        let doc = parse_str(SAMPLE);
        let mut output = Vec::new();
        save_async(&doc, &mut output).await.unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), generate(&doc));
    }
}
