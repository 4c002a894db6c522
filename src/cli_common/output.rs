//! Модуль для форматирования и вывода результатов

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Формат вывода результатов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("Unknown output format: {}", s)),
        }
    }
}

/// Writer для вывода результатов
pub struct OutputWriter {
    writer: Box<dyn Write>,
    format: OutputFormat,
    pretty: bool,
}

impl OutputWriter {
    /// Создает writer для stdout
    pub fn stdout(format: OutputFormat) -> Self {
        Self::from_writer(Box::new(io::stdout()), format)
    }

    /// Создает writer для файла
    pub fn file(path: &Path, format: OutputFormat) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(Box::new(BufWriter::new(file)), format))
    }

    /// Файл, если указан, иначе stdout
    pub fn to_target(path: Option<&Path>, format: OutputFormat) -> Result<Self> {
        match path {
            Some(path) => Self::file(path, format),
            None => Ok(Self::stdout(format)),
        }
    }

    pub fn from_writer(writer: Box<dyn Write>, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            pretty: false,
        }
    }

    /// Включает pretty-печать для JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Записывает сериализуемый объект
    pub fn write_object<T: Serialize>(&mut self, obj: &T) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(obj)?
        } else {
            serde_json::to_string(obj)?
        };
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    /// Записывает строку
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    /// Записывает заголовок
    pub fn write_header(&mut self, header: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer, "\n{}", header.bold().blue())?;
                writeln!(self.writer, "{}", "=".repeat(header.len()).blue())?;
            }
            OutputFormat::Json => {
                writeln!(self.writer, "{}", header)?;
            }
        }
        Ok(())
    }

    /// Завершает запись и сбрасывает буфер
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Итоги команды `parse`
#[derive(Debug, Default, Serialize)]
pub struct BuildSummary {
    pub files: usize,
    pub built: usize,
    pub failed: usize,
    pub nodes: usize,
    pub duration: Option<String>,
}

impl BuildSummary {
    /// Выводит итоги в указанный writer
    pub fn write(&self, writer: &mut OutputWriter) -> Result<()> {
        match writer.format {
            OutputFormat::Json => {
                writer.write_object(self)?;
            }
            OutputFormat::Text => {
                writer.write_header("Summary")?;
                writer.write_line(&format!("Files: {}", self.files))?;
                writer.write_line(&format!("Built: {}", self.built))?;
                writer.write_line(&format!("Failed: {}", self.failed))?;
                writer.write_line(&format!("Nodes: {}", self.nodes))?;

                if let Some(duration) = &self.duration {
                    writer.write_line(&format!("Duration: {}", duration))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_object_compact_and_pretty() {
        let sink = Shared::default();
        let mut writer = OutputWriter::from_writer(Box::new(sink.clone()), OutputFormat::Json);
        writer.write_object(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(sink.text(), "{\"a\":1}\n");

        let sink = Shared::default();
        let mut writer =
            OutputWriter::from_writer(Box::new(sink.clone()), OutputFormat::Json).with_pretty(true);
        writer.write_object(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(sink.text(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_summary_as_json() {
        let sink = Shared::default();
        let mut writer = OutputWriter::from_writer(Box::new(sink.clone()), OutputFormat::Json);
        let summary = BuildSummary {
            files: 2,
            built: 1,
            failed: 1,
            nodes: 6,
            duration: None,
        };
        summary.write(&mut writer).unwrap();

        let value: serde_json::Value = serde_json::from_str(sink.text().trim()).unwrap();
        assert_eq!(value["failed"], 1);
        assert_eq!(value["nodes"], 6);
    }
}
