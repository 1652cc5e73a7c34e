//! Streaming class map to CSV extraction

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::parse::{decode_lossy, has_marker, match_class_line};
use crate::record::ClassSizeRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use tracing::{debug, info};

/// Counters for one extraction run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractStats {
    /// Input lines seen
    pub lines: usize,
    /// Lines carrying the class marker
    pub marker_lines: usize,
    /// CSV rows written
    pub records: usize,
    /// Marker lines the pattern rejected
    pub skipped: usize,
}

/// Class map extractor
pub struct ClassSizeExtractor {
    config: ExtractorConfig,
}

impl ClassSizeExtractor {
    /// Create an extractor with default config
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor with custom config
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract from the configured input file into the configured output file.
    ///
    /// Rows already written stay on disk if a later read or write fails.
    pub fn run(&self) -> Result<ExtractStats> {
        let input_path = &self.config.input_path;
        let output_path = &self.config.output_path;

        let input = File::open(input_path).map_err(|e| ExtractError::file(input_path, e))?;
        let output =
            File::create(output_path).map_err(|e| ExtractError::file(output_path, e))?;

        let stats = self.extract(BufReader::new(input), BufWriter::new(output))?;
        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            lines = stats.lines,
            marker_lines = stats.marker_lines,
            records = stats.records,
            skipped = stats.skipped,
            "Extraction complete"
        );
        Ok(stats)
    }

    /// Stream class records from `input` to `output` as CSV rows.
    ///
    /// Rows are written in input order with no header, one per matching line.
    /// Invalid UTF-8 is dropped per line rather than failing the run.
    pub fn extract<R: BufRead, W: Write>(&self, mut input: R, output: W) -> Result<ExtractStats> {
        let mut writer = csv_writer(output);
        let mut stats = ExtractStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let chunk = decode_lossy(&buf);
            for line in split_lines(&chunk) {
                stats.lines += 1;
                if let Some(record) = self.process_line(line, &mut stats) {
                    writer.write_record([&record.class_name, &record.size])?;
                    stats.records += 1;
                }
            }
        }

        writer.flush()?;
        Ok(stats)
    }

    fn process_line(&self, line: &str, stats: &mut ExtractStats) -> Option<ClassSizeRecord> {
        if !has_marker(line) {
            return None;
        }
        stats.marker_lines += 1;

        let record = match_class_line(line);
        if record.is_none() {
            stats.skipped += 1;
            debug!(line = stats.lines, "Skipping non-conforming class line");
        }
        record
    }
}

impl Default for ClassSizeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract with the given config
pub fn extract_class_sizes(config: &ExtractorConfig) -> Result<ExtractStats> {
    ClassSizeExtractor::with_config(config.clone()).run()
}

fn csv_writer<W: Write>(output: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(output)
}

/// Split a chunk read up to `\n` into lines, treating `\r\n` and lone `\r`
/// as line ends too.
fn split_lines(chunk: &str) -> impl Iterator<Item = &str> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_str(input: &[u8]) -> (String, ExtractStats) {
        let mut out = Vec::new();
        let stats = ClassSizeExtractor::new().extract(input, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn test_single_row() {
        let (csv, stats) = extract_str(b"@@ Class 128 java.lang.String\n");
        assert_eq!(csv, "java/lang/String,128\r\n");
        assert_eq!(stats.records, 1);
    }

    #[test]
    fn test_lambda_row() {
        let (csv, _) = extract_str(b"@@ Class 64 com.foo.Bar$$Lambda.0x00000abc\n");
        assert_eq!(csv, "com/foo/Bar$$Lambda+0x00000abc,64\r\n");
    }

    #[test]
    fn test_counts() {
        let input = b"header\n@@ Class header info\n@@ Class 8 A\nsome other text\n@@ Class 16 B";
        let (csv, stats) = extract_str(input);
        assert_eq!(csv, "A,8\r\nB,16\r\n");
        assert_eq!(
            stats,
            ExtractStats {
                lines: 5,
                marker_lines: 3,
                records: 2,
                skipped: 1,
            }
        );
    }

    #[test]
    fn test_line_endings() {
        let (csv, stats) = extract_str(b"@@ Class 1 A\r\n@@ Class 2 B\r@@ Class 3 C\n\n");
        assert_eq!(csv, "A,1\r\nB,2\r\nC,3\r\n");
        assert_eq!(stats.lines, 4);
    }

    #[test]
    fn test_quotes_when_needed() {
        let (csv, _) = extract_str(b"@@ Class 5 we\"ird,name\n");
        assert_eq!(csv, "\"we\"\"ird,name\",5\r\n");
    }

    #[test]
    fn test_ascii_separator_row() {
        let (csv, _) = extract_str(b"@@ Class\x1f12\x1fFoo\n");
        assert_eq!(csv, "Foo,12\r\n");
    }

    #[test]
    fn test_empty_input() {
        let (csv, stats) = extract_str(b"");
        assert!(csv.is_empty());
        assert_eq!(stats, ExtractStats::default());
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\n").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(split_lines("a\rb\n").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), vec![""]);
    }
}
