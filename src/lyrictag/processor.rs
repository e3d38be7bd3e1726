//! Processing API for annotated lyrics
//!
//! This module provides an extensible API for processing lyrics sources with
//! different stages (sections, render) and formats (simple, json, yaml).
//! A processing spec is written as `<stage>-<format>`, e.g. `sections-json`
//! or `render-simple`.
//!
//! Parsing itself never fails; processing errors cover only file I/O and
//! malformed spec strings.

use crate::lyrictag::parsing::parse_document;
use crate::lyrictag::render::{render_source, RenderOptions, Rendered};
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// The parsed section list, before any display projection
    Sections,
    /// The toggle-filtered display projection
    Render,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "sections-json" or "render-simple"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = match format_str.split_once('-') {
            Some(parts) => parts,
            None => return Err(ProcessingError::InvalidFormat(format_str.to_string())),
        };

        let stage = match stage {
            "sections" => ProcessingStage::Sections,
            "render" => ProcessingStage::Render,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        Ok(Self { stage, format })
    }

    /// All valid processing specifications
    pub fn all() -> Vec<ProcessingSpec> {
        let stages = [ProcessingStage::Sections, ProcessingStage::Render];
        let formats = [OutputFormat::Simple, OutputFormat::Json, OutputFormat::Yaml];
        stages
            .iter()
            .flat_map(|&stage| formats.iter().map(move |&format| ProcessingSpec { stage, format }))
            .collect()
    }

    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Sections => "sections",
            ProcessingStage::Render => "render",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        format!("{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    SerializationError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
        }
    }
}

/// Process a lyrics source string according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    options: RenderOptions,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Sections => {
            let document = parse_document(source);
            match spec.format {
                OutputFormat::Simple => Ok(format_sections_simple(&document)),
                OutputFormat::Json => serde_json::to_string_pretty(&document)
                    .map_err(|e| ProcessingError::SerializationError(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&document)
                    .map_err(|e| ProcessingError::SerializationError(e.to_string())),
            }
        }
        ProcessingStage::Render => {
            let rendered = render_source(source, options);
            match spec.format {
                OutputFormat::Simple => Ok(format_rendered_simple(&rendered)),
                OutputFormat::Json => serde_json::to_string_pretty(&rendered)
                    .map_err(|e| ProcessingError::SerializationError(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&rendered)
                    .map_err(|e| ProcessingError::SerializationError(e.to_string())),
            }
        }
    }
}

/// Process a lyrics file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: RenderOptions,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec, options)
}

/// Line-oriented text dump of the parsed section list
fn format_sections_simple(document: &crate::lyrictag::ast::Document) -> String {
    let mut out = String::new();
    for section in document.iter_sections() {
        out.push_str(&format!("== {}\n", section.section_type));
        for tag in &section.style_tags {
            if tag.value.is_empty() {
                out.push_str(&format!("  [{}]\n", tag.category));
            } else {
                out.push_str(&format!("  [{}: {}]\n", tag.category, tag.value));
            }
        }
        for effect in &section.effect_tags {
            out.push_str(&format!("  *{}*\n", effect));
        }
        for line in &section.lyric_lines {
            out.push_str(&format!("  {}\n", line));
        }
    }
    out
}

/// Line-oriented text dump of the display projection
fn format_rendered_simple(rendered: &Rendered) -> String {
    match rendered {
        Rendered::Unstructured(raw) => raw.clone(),
        Rendered::Sections(sections) => {
            let mut out = String::new();
            for section in sections {
                out.push_str(&format!("== {} ({:?})\n", section.title, section.color));
                for tag in &section.style_tags {
                    out.push_str(&format!("  [{}]\n", tag.label));
                }
                for effect in &section.effect_tags {
                    out.push_str(&format!("  *{}*\n", effect));
                }
                for line in &section.lyric_lines {
                    out.push_str(&format!("  {}\n", line));
                }
            }
            out
        }
    }
}
