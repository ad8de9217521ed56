#![allow(clippy::print_stderr, clippy::print_stdout)]
use anyhow::{Context, bail};
use clap::Parser;
use dlbench::{
    BenchmarkAssembler, EvaluationReport, GeneratorConfig, TestCase, build_prompt,
    compare_key_axioms, extend, load_ontology, read_benchmark, score, write_benchmark,
    write_benchmark_to,
};
use oxowl::{ParserConfig, ReasonerConfig, ReasonerKind};
use oxrdfio::RdfFormat;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write, stdout};
use std::path::Path;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Args, Command, ReasonerArg};

pub fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    init_logging(matches.json_logs);
    match matches.command {
        Command::Generate {
            ontology,
            format,
            base,
            lenient,
            output,
            reasoner,
            no_precompute,
            timeout_ms,
            max_iterations,
            paraphrase,
            remove_key_axiom,
        } => {
            let format = if let Some(format) = format {
                rdf_format_from_name(&format)?
            } else {
                rdf_format_from_path(&ontology)?
            };
            let parser_config = if lenient {
                ParserConfig::new().lenient()
            } else {
                ParserConfig::new()
            };
            let ontology = load_ontology(&ontology, format, base.as_deref(), parser_config)
                .with_context(|| format!("Failed to load the ontology {}", ontology.display()))?;
            let mut reasoner_config = reasoner_config(timeout_ms);
            if let Some(max_iterations) = max_iterations {
                reasoner_config = reasoner_config.with_max_iterations(max_iterations);
            }
            let config = GeneratorConfig::default()
                .with_reasoner(match reasoner {
                    ReasonerArg::El => ReasonerKind::El,
                    ReasonerArg::Structural => ReasonerKind::Structural,
                })
                .with_reasoner_config(reasoner_config)
                .with_precompute(!no_precompute)
                .with_paraphrase_variants(paraphrase)
                .with_remove_key_variants(remove_key_axiom);
            let assembly = BenchmarkAssembler::new(config).assemble(&ontology);
            info!(
                test_cases = assembly.test_cases.len(),
                skipped = assembly.diagnostics.len(),
                "benchmark generated"
            );
            write_test_cases(output.as_deref(), &assembly.test_cases)
        }
        Command::Extend { input, output } => {
            let test_cases = read_benchmark(&input)?;
            write_test_cases(output.as_deref(), &extend(&test_cases))
        }
        Command::Compare {
            ontology,
            format,
            timeout_ms,
        } => {
            let format = if let Some(format) = format {
                rdf_format_from_name(&format)?
            } else {
                rdf_format_from_path(&ontology)?
            };
            let ontology = load_ontology(&ontology, format, None, ParserConfig::new())
                .with_context(|| format!("Failed to load the ontology {}", ontology.display()))?;
            let mut out = stdout().lock();
            for comparison in compare_key_axioms(&ontology, &reasoner_config(timeout_ms)) {
                writeln!(out, "{}\t{}", comparison.subject, comparison.axiom)?;
                for run in &comparison.runs {
                    let verdict = match &run.outcome {
                        Ok(true) => "entailed".to_owned(),
                        Ok(false) => "not entailed".to_owned(),
                        Err(e) => format!("error: {e}"),
                    };
                    writeln!(
                        out,
                        "\t{}\t{verdict}\t{}µs",
                        run.reasoner,
                        run.elapsed.as_micros()
                    )?;
                }
                if !comparison.agree() {
                    writeln!(out, "\treasoners disagree")?;
                }
            }
            Ok(())
        }
        Command::Prompts { input, output } => {
            #[derive(Serialize)]
            struct Prompt<'a> {
                id: &'a str,
                prompt: String,
            }

            let test_cases = read_benchmark(&input)?;
            let prompts = test_cases
                .iter()
                .map(|test_case| Prompt {
                    id: &test_case.id,
                    prompt: build_prompt(test_case),
                })
                .collect::<Vec<_>>();
            write_json(output.as_deref(), &prompts)
        }
        Command::Score {
            benchmark,
            answers,
            output,
        } => {
            let test_cases = read_benchmark(&benchmark)?;
            let answers: FxHashMap<String, String> = serde_json::from_reader(BufReader::new(
                File::open(&answers)
                    .with_context(|| format!("Failed to open {}", answers.display()))?,
            ))
            .with_context(|| {
                format!(
                    "{} is not a JSON object from test case id to answer",
                    answers.display()
                )
            })?;
            let report = score(&test_cases, &answers);
            print_report(&report);
            if let Some(output) = output {
                write_json(Some(output.as_path()), &report.results)?;
            }
            Ok(())
        }
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn reasoner_config(timeout_ms: Option<u64>) -> ReasonerConfig {
    let config = ReasonerConfig::default();
    if let Some(timeout_ms) = timeout_ms {
        config.with_timeout(Duration::from_millis(timeout_ms))
    } else {
        config
    }
}

fn write_test_cases(output: Option<&Path>, test_cases: &[TestCase]) -> anyhow::Result<()> {
    if let Some(output) = output {
        write_benchmark(output, test_cases)?;
    } else {
        write_benchmark_to(stdout().lock(), test_cases)?;
    }
    Ok(())
}

fn write_json(output: Option<&Path>, value: &impl Serialize) -> anyhow::Result<()> {
    let mut writer: Box<dyn Write> = if let Some(output) = output {
        Box::new(BufWriter::new(File::create(output).with_context(|| {
            format!("Failed to create {}", output.display())
        })?))
    } else {
        Box::new(stdout().lock())
    };
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    Ok(writer.flush()?)
}

fn print_report(report: &EvaluationReport) {
    println!(
        "accuracy: {:.2}% ({}/{})",
        report.accuracy * 100.,
        report.correct,
        report.total
    );
    println!(
        "false positives: {} {}",
        report.false_positives.len(),
        report.false_positives.join(", ")
    );
    println!(
        "false negatives: {} {}",
        report.false_negatives.len(),
        report.false_negatives.join(", ")
    );
    if !report.unanswered.is_empty() {
        eprintln!("unanswered: {}", report.unanswered.join(", "));
    }
}

fn format_from_path<T>(
    path: &Path,
    from_extension: impl FnOnce(&str) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        from_extension(ext).map_err(|e| {
            e.context(format!(
                "Not able to guess the file format from file name extension '{ext}'"
            ))
        })
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn rdf_format_from_path(path: &Path) -> anyhow::Result<RdfFormat> {
    format_from_path(path, rdf_format_from_name)
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if name.eq_ignore_ascii_case("owl") {
        return Ok(RdfFormat::RdfXml);
    }
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}
