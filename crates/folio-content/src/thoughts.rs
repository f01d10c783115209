use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use folio_core::{estimate_read_time, split_front_matter};
use serde::Deserialize;

const THOUGHT_EXT: &str = "md";

/// Front-matter fields authored at the top of a thought file.
#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    excerpt: String,
    date: NaiveDate,
}

/// Listing metadata for one thought.
#[derive(Clone, Debug, PartialEq)]
pub struct ThoughtMeta {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_time: String,
}

/// A fully loaded thought: metadata plus the markdown body.
#[derive(Clone, Debug, PartialEq)]
pub struct Thought {
    pub meta: ThoughtMeta,
    pub body: String,
}

#[derive(Debug)]
pub enum ContentError {
    Io { path: PathBuf, source: io::Error },
    FrontMatter { path: PathBuf, message: String },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ContentError::FrontMatter { path, message } => {
                write!(f, "bad front matter in {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Io { source, .. } => Some(source),
            ContentError::FrontMatter { .. } => None,
        }
    }
}

/// Lists every thought under `dir`, newest first.
pub fn list_thoughts(dir: &Path) -> Result<Vec<ThoughtMeta>, ContentError> {
    let mut thoughts = Vec::new();
    for path in thought_files(dir)? {
        thoughts.push(read_meta(&path)?);
    }
    thoughts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(thoughts)
}

/// Slugs of every thought under `dir`, in name order.
pub fn thought_slugs(dir: &Path) -> Result<Vec<String>, ContentError> {
    Ok(thought_files(dir)?
        .iter()
        .filter_map(|path| file_stem(path))
        .collect())
}

/// Loads one thought by slug. A missing file is `Ok(None)`; a present but
/// malformed file is an error naming the file.
pub fn load_thought(dir: &Path, slug: &str) -> Result<Option<Thought>, ContentError> {
    let path = dir.join(format!("{}.{}", slug, THOUGHT_EXT));
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ContentError::Io {
                path,
                source: err,
            });
        }
    };
    let (front, body) = parse_document(&path, &content)?;
    Ok(Some(Thought {
        meta: meta_from(slug.to_string(), front, body),
        body: body.to_string(),
    }))
}

fn thought_files(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    let entries = fs::read_dir(dir).map_err(|err| ContentError::Io {
        path: dir.to_path_buf(),
        source: err,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| ContentError::Io {
            path: dir.to_path_buf(),
            source: err,
        })?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(THOUGHT_EXT) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_meta(path: &Path) -> Result<ThoughtMeta, ContentError> {
    let content = fs::read_to_string(path).map_err(|err| ContentError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;
    let (front, body) = parse_document(path, &content)?;
    let slug = file_stem(path).ok_or_else(|| ContentError::FrontMatter {
        path: path.to_path_buf(),
        message: "file name is not valid UTF-8".to_string(),
    })?;
    Ok(meta_from(slug, front, body))
}

fn parse_document<'a>(
    path: &Path,
    content: &'a str,
) -> Result<(FrontMatter, &'a str), ContentError> {
    let (header, body) = split_front_matter(content).ok_or_else(|| ContentError::FrontMatter {
        path: path.to_path_buf(),
        message: "missing --- front matter fence".to_string(),
    })?;
    let front: FrontMatter =
        serde_yaml::from_str(header).map_err(|err| ContentError::FrontMatter {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
    Ok((front, body))
}

fn meta_from(slug: String, front: FrontMatter, body: &str) -> ThoughtMeta {
    ThoughtMeta {
        slug,
        title: front.title,
        excerpt: front.excerpt,
        date: front.date,
        read_time: estimate_read_time(body),
    }
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
}
