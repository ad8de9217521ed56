//! Reading and writing benchmark files.

use crate::error::BenchmarkError;
use crate::model::TestCase;
use oxowl::{Ontology, ParserConfig, parse_ontology_from_reader};
use oxrdfio::RdfFormat;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// Parses a JSON array of test cases.
pub fn read_benchmark_from(reader: impl Read) -> serde_json::Result<Vec<TestCase>> {
    serde_json::from_reader(reader)
}

/// Writes test cases as a pretty-printed JSON array followed by a newline.
pub fn write_benchmark_to(mut writer: impl Write, test_cases: &[TestCase]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, test_cases)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

pub fn read_benchmark(path: &Path) -> Result<Vec<TestCase>, BenchmarkError> {
    let file = File::open(path).map_err(|e| BenchmarkError::io(path, e))?;
    read_benchmark_from(BufReader::new(file)).map_err(|e| BenchmarkError::json(path, e))
}

pub fn write_benchmark(path: &Path, test_cases: &[TestCase]) -> Result<(), BenchmarkError> {
    let file = File::create(path).map_err(|e| BenchmarkError::io(path, e))?;
    write_benchmark_to(BufWriter::new(file), test_cases).map_err(|e| BenchmarkError::io(path, e))
}

/// Loads an ontology document from a file.
pub fn load_ontology(
    path: &Path,
    format: RdfFormat,
    base_iri: Option<&str>,
    config: ParserConfig,
) -> Result<Ontology, BenchmarkError> {
    let file = File::open(path).map_err(|e| BenchmarkError::io(path, e))?;
    let ontology = parse_ontology_from_reader(BufReader::new(file), format, base_iri, config)?;
    if ontology.skipped_triples() > 0 {
        warn!(
            path = %path.display(),
            skipped = ontology.skipped_triples(),
            "triples that could not be read as axioms were skipped"
        );
    }
    info!(
        path = %path.display(),
        axioms = ontology.axiom_count(),
        "ontology loaded"
    );
    Ok(ontology)
}
