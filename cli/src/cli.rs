use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "dlbench")]
/// Description Logic entailment benchmark generator
pub struct Args {
    /// Write logs as JSON lines instead of human-readable text
    ///
    /// The verbosity is read from the RUST_LOG environment variable (default: info).
    #[arg(long, global = true)]
    pub json_logs: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate an EL benchmark from an ontology
    ///
    /// One test case is built for every class with at least one `A ⊑ ∃r.B` axiom.
    /// The expected answer is given by the chosen reasoner.
    Generate {
        /// Ontology file (Turtle, RDF/XML, N-Triples...)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        ontology: PathBuf,
        /// The format of the ontology file
        ///
        /// Can be an extension like "ttl" or a MIME type like "text/turtle".
        /// By default the format is guessed from the file extension.
        #[arg(long)]
        format: Option<String>,
        /// Base IRI of the ontology file
        #[arg(long, value_hint = ValueHint::Url)]
        base: Option<String>,
        /// Skip the OWL constructs that cannot be read instead of failing
        #[arg(long)]
        lenient: bool,
        /// File to write the benchmark to
        ///
        /// If no file is given, stdout is used.
        #[arg(short = 'O', long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// Reasoner giving the expected answers
        #[arg(long, value_enum, default_value_t = ReasonerArg::El)]
        reasoner: ReasonerArg,
        /// Do not classify the ontology before each entailment check
        #[arg(long)]
        no_precompute: bool,
        /// Time limit of each entailment check, in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Inference step limit of each entailment check
        #[arg(long)]
        max_iterations: Option<usize>,
        /// Also emit a paraphrased copy of every test case (tagged MR-1)
        #[arg(long)]
        paraphrase: bool,
        /// Also emit a copy of every test case without its key axiom (tagged MR-9)
        #[arg(long)]
        remove_key_axiom: bool,
    },
    /// Extend an EL benchmark to ELH
    ///
    /// Every role used in an existential restriction gets a `role ⊑ superOfRole` axiom.
    Extend {
        /// Benchmark file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// File to write the extended benchmark to
        ///
        /// If no file is given, stdout is used.
        #[arg(short = 'O', long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
    /// Run every reasoner on the key axioms of an ontology and print their verdicts and timings
    Compare {
        /// Ontology file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        ontology: PathBuf,
        /// The format of the ontology file
        ///
        /// By default the format is guessed from the file extension.
        #[arg(long)]
        format: Option<String>,
        /// Time limit of each entailment check, in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Render the language model prompt of every test case of a benchmark
    Prompts {
        /// Benchmark file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// File to write the prompts to, as a JSON object from test case id to prompt
        ///
        /// If no file is given, stdout is used.
        #[arg(short = 'O', long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
    /// Score language model answers against a benchmark
    Score {
        /// Benchmark file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        benchmark: PathBuf,
        /// JSON object from test case id to answer
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        answers: PathBuf,
        /// File to write the per test case results to
        #[arg(short = 'O', long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReasonerArg {
    /// Completion-based EL reasoner
    El,
    /// Told subsumptions, existentials and assertions only
    Structural,
}
