// File: src/persistence.rs
//
// Dictionary directories: small JSON tables next to bincode-encoded tries.
// Every file is written through a temp file and renamed into place.

use crate::core::context::ProbabilityTable;
use crate::dict::{Dictionary, DictionaryTables, Meta, FORMAT_VERSION};
use crate::error::{MorphError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

const META: &str = "meta.json";
const GRAMMEMES: &str = "grammemes.json";
const GRAMTAB: &str = "gramtab.json";
const SUFFIXES: &str = "suffixes.json";
const PARADIGM_PREFIXES: &str = "paradigm-prefixes.json";
const PARADIGMS: &str = "paradigms.bin";
const WORDS: &str = "words.bin";
const PROBABILITIES: &str = "p_t_given_w.bin";

fn prediction_file(prefix_id: usize) -> String {
    format!("prediction-suffixes-{prefix_id}.bin")
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> MorphError + '_ {
    move |source| MorphError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(io_error(path))
}

fn read_json<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    serde_json::from_reader(open(&path)?).map_err(|source| MorphError::Json { path, source })
}

fn read_bincode<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    bincode::deserialize_from(open(&path)?).map_err(|source| MorphError::Bincode { path, source })
}

// Serializes into a temp file in `dir`, then renames it over `name`.
fn write_atomically<F>(dir: &Path, name: &str, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>, &Path) -> Result<()>,
{
    let path = dir.join(name);
    let temp_file = NamedTempFile::new_in(dir).map_err(io_error(&path))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer, &path)?;
        writer.flush().map_err(io_error(&path))?;
    }
    temp_file
        .persist(&path)
        .map_err(|e| MorphError::Io { path: path.clone(), source: e.error })?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<()> {
    write_atomically(dir, name, |writer, path| {
        serde_json::to_writer_pretty(writer, value).map_err(|source| MorphError::Json {
            path: path.to_path_buf(),
            source,
        })
    })
}

fn write_bincode<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<()> {
    write_atomically(dir, name, |writer, path| {
        bincode::serialize_into(writer, value).map_err(|source| MorphError::Bincode {
            path: path.to_path_buf(),
            source,
        })
    })
}

fn check_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(MorphError::DictionaryNotFound {
            path: dir.to_path_buf(),
        })
    }
}

/// Reads only `meta.json` and checks the format version.
pub fn load_meta(dir: &Path) -> Result<Meta> {
    check_dir(dir)?;
    let meta: Meta = read_json(dir, META)?;
    if meta.format_version != FORMAT_VERSION {
        return Err(MorphError::UnsupportedFormat {
            found: meta.format_version,
            expected: FORMAT_VERSION.to_string(),
        });
    }
    Ok(meta)
}

pub fn load_dictionary(dir: &Path) -> Result<Dictionary> {
    let meta = load_meta(dir)?;
    debug!(path = %dir.display(), language = %meta.language, "loading dictionary");

    let paradigm_prefixes: Vec<String> = read_json(dir, PARADIGM_PREFIXES)?;
    let prediction = (0..paradigm_prefixes.len())
        .map(|id| read_bincode(dir, &prediction_file(id)))
        .collect::<Result<Vec<_>>>()?;

    let dictionary = Dictionary::from_tables(DictionaryTables {
        meta,
        grammemes: read_json(dir, GRAMMEMES)?,
        gramtab: read_json(dir, GRAMTAB)?,
        suffixes: read_json(dir, SUFFIXES)?,
        paradigm_prefixes,
        paradigms: read_bincode(dir, PARADIGMS)?,
        words: read_bincode(dir, WORDS)?,
        prediction,
    })?;
    info!(path = %dir.display(), words = dictionary.words().len(), "dictionary loaded");
    Ok(dictionary)
}

pub fn save_dictionary(dictionary: &Dictionary, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;

    let mut meta = dictionary.meta().clone();
    meta.format_version = FORMAT_VERSION.to_string();
    meta.paradigm_count = dictionary.paradigms().len();
    meta.word_count = dictionary.words().len();
    meta.tag_count = dictionary.gramtab().len();

    let gramtab: Vec<&str> = dictionary.gramtab().iter().map(|t| t.as_str()).collect();
    write_json(dir, GRAMMEMES, &dictionary.catalog().records())?;
    write_json(dir, GRAMTAB, &gramtab)?;
    write_json(dir, SUFFIXES, dictionary.suffixes())?;
    write_json(dir, PARADIGM_PREFIXES, dictionary.paradigm_prefixes())?;
    write_bincode(dir, PARADIGMS, dictionary.paradigms())?;
    write_bincode(dir, WORDS, dictionary.words())?;
    for (id, index) in dictionary.prediction_indices().iter().enumerate() {
        write_bincode(dir, &prediction_file(id), index)?;
    }
    // meta goes last so a half-written directory fails the version check
    write_json(dir, META, &meta)?;
    info!(path = %dir.display(), "dictionary saved");
    Ok(())
}

pub fn probability_table_path(dir: &Path) -> PathBuf {
    dir.join(PROBABILITIES)
}

/// `Ok(None)` when the directory has no probability table.
pub fn load_probability_table(dir: &Path) -> Result<Option<ProbabilityTable>> {
    if !probability_table_path(dir).is_file() {
        return Ok(None);
    }
    let table: ProbabilityTable = read_bincode(dir, PROBABILITIES)?;
    info!(path = %dir.display(), entries = table.len(), "probability table loaded");
    Ok(Some(table))
}

pub fn save_probability_table(table: &ProbabilityTable, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;
    write_bincode(dir, PROBABILITIES, table)
}
