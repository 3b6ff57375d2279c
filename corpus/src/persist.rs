use crate::summary::TermSummary;
use crate::term::CollectionConfig;
use crate::term_corpus::TermCorpus;
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_terms: usize,
    pub num_articles: usize,
    pub created_at: String,
    pub version: u32,
    pub config: CollectionConfig,
}

pub struct ResultPaths {
    pub root: PathBuf,
}

impl ResultPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn corpora(&self) -> PathBuf { self.root.join("collection.bin") }
    fn meta(&self) -> PathBuf { self.root.join("meta.json") }
    fn summaries_dir(&self) -> PathBuf { self.root.join("summaries") }
}

fn write_bincode<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut f = File::create(path)?;
    f.write_all(&bincode::serialize(value)?)?;
    Ok(())
}

fn read_bincode<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let mut buf = Vec::new();
    File::open(path)?.read_to_end(&mut buf)?;
    Ok(bincode::deserialize(&buf)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut f = File::create(path)?;
    f.write_all(serde_json::to_string_pretty(value)?.as_bytes())?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let mut buf = String::new();
    File::open(path)?.read_to_string(&mut buf)?;
    Ok(serde_json::from_str(&buf)?)
}

pub fn save_corpora(paths: &ResultPaths, corpora: &[TermCorpus]) -> Result<()> {
    create_dir_all(&paths.root)?;
    write_bincode(&paths.corpora(), corpora)
}

pub fn load_corpora(paths: &ResultPaths) -> Result<Vec<TermCorpus>> { read_bincode(&paths.corpora()) }

pub fn save_meta(paths: &ResultPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    write_json(&paths.meta(), meta)
}

pub fn load_meta(paths: &ResultPaths) -> Result<MetaFile> { read_json(&paths.meta()) }

/// Writes `summaries/<label>.json`; path separators in the label are replaced.
pub fn save_summary(paths: &ResultPaths, summary: &TermSummary) -> Result<PathBuf> {
    let dir = paths.summaries_dir();
    create_dir_all(&dir)?;
    let name = summary.label.replace(['/', '\\'], "_");
    let file = dir.join(format!("{name}.json"));
    write_json(&file, summary)?;
    Ok(file)
}
