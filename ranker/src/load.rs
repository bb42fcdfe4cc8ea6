use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One raw document and the identifier it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDoc {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputDoc {
    Text(String),
    Record {
        #[serde(default)]
        id: Option<String>,
        #[serde(alias = "text")]
        body: String,
    },
}

impl InputDoc {
    fn into_source(self, fallback_id: String) -> SourceDoc {
        match self {
            InputDoc::Text(text) => SourceDoc { id: fallback_id, text },
            InputDoc::Record { id, body } => SourceDoc { id: id.unwrap_or(fallback_id), text: body },
        }
    }
}

/// Load documents from a file or, recursively, from a directory.
///
/// `.json` holds an array of documents or a single one, `.jsonl` one per line;
/// any other file is a single plain-text document. Directory entries are read
/// in file-name order so the corpus order is reproducible.
pub fn load_path(input: &Path) -> Result<Vec<SourceDoc>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        bail!("input path {} does not exist", input.display());
    }

    let mut docs = Vec::new();
    for file in files {
        let loaded = match file.extension().and_then(|s| s.to_str()) {
            Some("jsonl") => load_jsonl(&file),
            Some("json") => load_json(&file),
            _ => load_text(&file),
        }
        .with_context(|| format!("failed to load {}", file.display()))?;
        tracing::debug!(file = %file.display(), docs = loaded.len(), "loaded input file");
        docs.extend(loaded);
    }
    Ok(docs)
}

fn load_jsonl(file: &Path) -> Result<Vec<SourceDoc>> {
    let reader = BufReader::new(File::open(file)?);
    let mut docs = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("line {}", line_no + 1))?;
        docs.push(doc.into_source(format!("{}:{}", file.display(), line_no + 1)));
    }
    Ok(docs)
}

fn load_json(file: &Path) -> Result<Vec<SourceDoc>> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .enumerate()
            .map(|(i, v)| -> Result<SourceDoc> {
                let doc: InputDoc = serde_json::from_value(v)?;
                Ok(doc.into_source(format!("{}#{}", file.display(), i)))
            })
            .collect(),
        other => {
            let doc: InputDoc = serde_json::from_value(other)?;
            Ok(vec![doc.into_source(file.display().to_string())])
        }
    }
}

fn load_text(file: &Path) -> Result<Vec<SourceDoc>> {
    let text = fs::read_to_string(file)?;
    Ok(vec![SourceDoc { id: file.display().to_string(), text }])
}
