//! # Report Sinks
//!
//! Stateless consumers of a finished [`AnalysisReport`]. A charting front
//! end implements [`VisualizationSink`]; the crate ships a plain-text and a
//! JSON rendering.

use crate::error::Result;
use crate::pipeline::AnalysisReport;
use std::io::Write;

/// Receives finished tables for presentation
pub trait VisualizationSink {
    fn render(&mut self, report: &AnalysisReport) -> Result<()>;
}

/// Plain-text tables
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> VisualizationSink for ConsoleSink<W> {
    fn render(&mut self, report: &AnalysisReport) -> Result<()> {
        let out = &mut self.out;
        let c = &report.cleaning;

        writeln!(out, "=== Sentiment Report ({} scorer) ===", report.scorer)?;
        writeln!(
            out,
            "Records: {} read, {} analyzed, {} dropped (missing text {}, missing timestamp {}, blank {})",
            c.read,
            c.kept,
            c.dropped(),
            c.missing_text,
            c.missing_timestamp,
            c.blank_text
        )?;

        writeln!(out, "\nSentiment distribution:")?;
        if report.sentiment.distribution.is_empty() {
            writeln!(out, "  (no records)")?;
        }
        for share in &report.sentiment.distribution {
            writeln!(
                out,
                "  {:<10} {:>6}  {:>5.1}%",
                share.class.as_str(),
                share.count,
                share.share * 100.0
            )?;
        }

        writeln!(out, "\nScore spread per class (min / q1 / median / q3 / max):")?;
        for (class, s) in &report.sentiment.spread {
            writeln!(
                out,
                "  {:<10} {:>7.4} {:>7.4} {:>7.4} {:>7.4} {:>7.4}",
                class.as_str(),
                s.min,
                s.q1,
                s.median,
                s.q3,
                s.max
            )?;
        }

        writeln!(out, "\nMost common words:")?;
        if report.lexical.top_words.is_empty() {
            writeln!(out, "  (no tokens)")?;
        }
        for word in &report.lexical.top_words {
            writeln!(out, "  {}: {}", word.word, word.count)?;
        }

        writeln!(out, "\nAverage intensity per sentiment:")?;
        for (class, mean) in &report.sentiment.means {
            writeln!(out, "  {:<10} {:>8.4}", class.as_str(), mean)?;
        }

        writeln!(out, "\nFirst {} labelled posts:", report.preview.len())?;
        for row in &report.preview {
            writeln!(
                out,
                "  {:>8.4}  {:<8}  {:<10}  {}",
                row.compound,
                row.sentiment_class.as_str(),
                row.objectivity.as_str(),
                truncate(&row.text, 60)
            )?;
        }

        writeln!(
            out,
            "\nObjective vs subjective (threshold {}):",
            report.objectivity.threshold
        )?;
        for (label, count) in &report.objectivity.counts {
            let mean = report.objectivity.means.get(label).copied().unwrap_or_default();
            writeln!(out, "  {:<10} {:>6}  mean {:>8.4}", label.as_str(), count, mean)?;
        }

        out.flush()?;
        Ok(())
    }
}

/// Pretty JSON of the whole report
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> VisualizationSink for JsonSink<W> {
    fn render(&mut self, report: &AnalysisReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let single_line: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        single_line
    } else {
        let cut: String = single_line.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
