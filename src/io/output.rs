use crate::core::BmiReport;
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &BmiReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &BmiReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &BmiReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# BMI Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Weight | {:.2} kg |",
            report.measurement.weight_kg
        )?;
        writeln!(
            self.writer,
            "| Height | {:.2} {} ({:.2} m) |",
            report.measurement.height_raw, report.measurement.unit, report.height_meters
        )?;
        writeln!(self.writer, "| BMI | {:.2} |", report.result.value)?;
        writeln!(self.writer, "| Band | {} |", report.result.band)?;
        writeln!(self.writer, "| Severity | {} |", report.result.severity)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}.", report.result.band.message())?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(config),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &BmiReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header("BMI Report"))?;
        writeln!(
            self.writer,
            "{}",
            f.dim(&format!(
                "Weight {:.2} kg, height {:.2} {} ({:.2} m)",
                report.measurement.weight_kg,
                report.measurement.height_raw,
                report.measurement.unit,
                report.height_meters
            ))
        )?;
        writeln!(
            self.writer,
            "Your BMI is {}.",
            f.bold(&format!("{:.2}", report.result.value))
        )?;
        writeln!(
            self.writer,
            "{}",
            f.severity(report.result.severity, report.result.band.message())
        )?;
        Ok(())
    }
}

/// Select a writer for the chosen format and destination. Terminal output to
/// a file is written without styling.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let writer: Box<dyn OutputWriter> = match (format, output) {
        (OutputFormat::Json, Some(path)) => Box::new(JsonWriter::new(File::create(path)?)),
        (OutputFormat::Json, None) => Box::new(JsonWriter::new(std::io::stdout())),
        (OutputFormat::Markdown, Some(path)) => Box::new(MarkdownWriter::new(File::create(path)?)),
        (OutputFormat::Markdown, None) => Box::new(MarkdownWriter::new(std::io::stdout())),
        (OutputFormat::Terminal, Some(path)) => Box::new(TerminalWriter::new(
            File::create(path)?,
            FormattingConfig::plain(),
        )),
        (OutputFormat::Terminal, None) => {
            Box::new(TerminalWriter::new(std::io::stdout(), formatting))
        }
    };
    Ok(writer)
}
