//! `nmms` - command-line interface for the NMMS reasoner.
//!
//! Three subcommands over JSON-persisted material bases:
//!
//! - `tell` adds a statement (`Γ |~ Δ` or `atom NAME`) to a base file,
//! - `ask` decides a sequent `Γ => Δ` against a base (exit code 0 when
//!   derivable, 2 when not, 1 on error, grep-style),
//! - `repl` runs an interactive session, or a batch file with `--batch`.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nmms_core::{parse_consequence, parse_sentence, parse_sequent, BaseDoc, MaterialBase, Mode};
use nmms_prove::{Prover, ProverConfig};

#[derive(Parser)]
#[command(name = "nmms", version, about = "NMMS material-consequence reasoner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a statement to a material base.
    Tell {
        /// Base file to update.
        #[arg(short = 'b', long)]
        base: PathBuf,
        /// Create the base file if it does not exist.
        #[arg(long)]
        create: bool,
        /// Restricted-quantifier mode (concept/role atoms).
        #[arg(long)]
        rq: bool,
        /// `Γ |~ Δ` or `atom NAME [DESCRIPTION]`.
        #[arg(required = true)]
        statement: Vec<String>,
    },
    /// Decide whether a sequent is derivable.
    Ask {
        /// Base file to consult.
        #[arg(short = 'b', long)]
        base: PathBuf,
        /// Restricted-quantifier mode (concept/role atoms).
        #[arg(long)]
        rq: bool,
        /// Print the proof trace.
        #[arg(long)]
        trace: bool,
        /// Proof-search recursion budget.
        #[arg(long, default_value_t = 25)]
        max_depth: usize,
        /// Structured JSON output.
        #[arg(long)]
        json: bool,
        /// Suppress the verdict line (the exit code carries the answer).
        #[arg(long)]
        quiet: bool,
        /// `Γ => Δ`.
        #[arg(required = true)]
        sequent: Vec<String>,
    },
    /// Interactive session, or batch execution with --batch.
    Repl {
        /// Base file to start from.
        #[arg(short = 'b', long)]
        base: Option<PathBuf>,
        /// Restricted-quantifier mode (concept/role atoms).
        #[arg(long)]
        rq: bool,
        /// Execute statements from FILE, one per line. `#` introduces
        /// comments; blank lines are skipped.
        #[arg(long)]
        batch: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Exit codes are grep-style: 0 success/derivable, 2 not derivable, 1 error.
fn run(cli: Cli) -> Result<u8> {
    match cli.command {
        Command::Tell {
            base,
            create,
            rq,
            statement,
        } => {
            cmd_tell(&base, create, mode_of(rq), &statement.join(" "))?;
            Ok(0)
        }
        Command::Ask {
            base,
            rq,
            trace,
            max_depth,
            json,
            quiet,
            sequent,
        } => cmd_ask(
            &base,
            mode_of(rq),
            trace,
            max_depth,
            json,
            quiet,
            &sequent.join(" "),
        ),
        Command::Repl { base, rq, batch } => {
            cmd_repl(base.as_deref(), mode_of(rq), batch.as_deref())
        }
    }
}

fn mode_of(rq: bool) -> Mode {
    if rq {
        Mode::Rq
    } else {
        Mode::Propositional
    }
}

fn load_base(path: &Path, mode: Mode) -> Result<MaterialBase> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read base {}", path.display()))?;
    let doc: BaseDoc = serde_json::from_str(&text)
        .with_context(|| format!("parse base document {}", path.display()))?;
    let base = MaterialBase::from_doc(&doc, mode)
        .with_context(|| format!("validate base {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        atoms = base.language().len(),
        consequences = base.consequences().len(),
        "loaded base"
    );
    Ok(base)
}

fn save_base(base: &MaterialBase, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&base.to_doc()).context("serialize base")?;
    fs::write(path, json).with_context(|| format!("write base {}", path.display()))
}

/// Apply one `tell` statement to a base: `Γ |~ Δ`, or `atom NAME` with an
/// optional trailing description (accepted as documentation, not stored).
fn apply_statement(base: &mut MaterialBase, statement: &str, mode: Mode) -> Result<String> {
    let statement = statement.trim();
    if let Some(rest) = statement.strip_prefix("atom") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            let mut words = rest.split_whitespace();
            let name = words.next().context("`atom` requires a name")?;
            let sentence = parse_sentence(name, mode)?;
            if !sentence.is_atomic() {
                bail!("`atom` requires an atomic sentence, got `{sentence}`");
            }
            base.add_atom(sentence.clone())?;
            return Ok(format!("added atom {sentence}"));
        }
    }
    let sequent = parse_consequence(statement, mode)?;
    let rendered = sequent.to_string().replace(" => ", " |~ ");
    base.add_consequence(sequent.antecedent, sequent.succedent)?;
    Ok(format!("added consequence {rendered}"))
}

fn cmd_tell(path: &Path, create: bool, mode: Mode, statement: &str) -> Result<()> {
    let mut base = if path.exists() {
        load_base(path, mode)?
    } else if create {
        MaterialBase::new()
    } else {
        bail!(
            "base {} does not exist (use --create to start a new one)",
            path.display()
        );
    };
    let message = apply_statement(&mut base, statement, mode)?;
    save_base(&base, path)?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_ask(
    path: &Path,
    mode: Mode,
    trace: bool,
    max_depth: usize,
    json: bool,
    quiet: bool,
    sequent: &str,
) -> Result<u8> {
    let base = load_base(path, mode)?;
    let parsed = parse_sequent(sequent, mode)?;
    let prover = Prover::with_config(
        &base,
        ProverConfig {
            max_depth,
            ..ProverConfig::default()
        },
    );
    let result = prover.derives(parsed.antecedent, parsed.succedent);

    if json {
        let out = serde_json::json!({
            "derivable": result.derivable,
            "depth_reached": result.depth_reached,
            "cache_hits": result.cache_hits,
            "trace": result.trace,
        });
        println!("{}", serde_json::to_string_pretty(&out).context("serialize result")?);
    } else {
        if trace {
            for line in &result.trace {
                println!("{line}");
            }
        }
        if !quiet {
            println!(
                "{}",
                if result.derivable {
                    "DERIVABLE"
                } else {
                    "NOT DERIVABLE"
                }
            );
        }
    }

    Ok(if result.derivable { 0 } else { 2 })
}

/// State of one interactive or batch session.
struct Session {
    mode: Mode,
    base: MaterialBase,
    show_trace: bool,
}

enum Action {
    Continue,
    Quit,
}

impl Session {
    fn new(mode: Mode, base: MaterialBase) -> Self {
        Session {
            mode,
            base,
            show_trace: false,
        }
    }

    fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Action> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Action::Continue);
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        match command {
            "quit" | "exit" => return Ok(Action::Quit),
            "help" => {
                writeln!(out, "{}", HELP.trim_end())?;
            }
            "show" => self.show(out)?,
            "trace" => match rest {
                "on" => self.show_trace = true,
                "off" => self.show_trace = false,
                other => bail!("usage: trace on|off (got `{other}`)"),
            },
            "save" => {
                if rest.is_empty() {
                    bail!("usage: save FILE");
                }
                save_base(&self.base, Path::new(rest))?;
                writeln!(out, "saved {rest}")?;
            }
            "load" => {
                if rest.is_empty() {
                    bail!("usage: load FILE");
                }
                self.base = load_base(Path::new(rest), self.mode)?;
                writeln!(out, "loaded {rest}")?;
            }
            "tell" => {
                let message = apply_statement(&mut self.base, rest, self.mode)?;
                writeln!(out, "{message}")?;
            }
            "ask" => {
                let sequent = parse_sequent(rest, self.mode)?;
                let prover = Prover::new(&self.base);
                let result = prover.derives(sequent.antecedent, sequent.succedent);
                if self.show_trace {
                    for line in &result.trace {
                        writeln!(out, "{line}")?;
                    }
                }
                writeln!(
                    out,
                    "{}",
                    if result.derivable {
                        "DERIVABLE"
                    } else {
                        "NOT DERIVABLE"
                    }
                )?;
            }
            other => bail!("unknown command `{other}` (try `help`)"),
        }
        Ok(Action::Continue)
    }

    fn show(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "language ({}):", self.base.language().len())?;
        for sentence in self.base.language() {
            writeln!(out, "  {sentence}")?;
        }
        writeln!(out, "consequences ({}):", self.base.consequences().len())?;
        for consequence in self.base.consequences() {
            writeln!(out, "  {}", consequence.display())?;
        }
        if !self.base.schemas().is_empty() {
            writeln!(out, "schemas ({}):", self.base.schemas().len())?;
            for schema in self.base.schemas() {
                writeln!(out, "  {}", schema_line(schema))?;
            }
        }
        Ok(())
    }
}

fn schema_line(schema: &nmms_core::Schema) -> String {
    match schema {
        nmms_core::Schema::Concept {
            role,
            individual,
            concept,
        } => format!("{role}({individual},x) |~ {concept}(x)"),
        nmms_core::Schema::Inference {
            role,
            individual,
            concept,
            consequent,
        } => {
            let mut conclusion: Vec<String> =
                consequent.iter().map(|s| s.to_string()).collect();
            conclusion.sort();
            format!(
                "{role}({individual},x), {concept}(x) |~ {}",
                conclusion.join(", ")
            )
        }
    }
}

const HELP: &str = "\
commands:
  tell Γ |~ Δ          add a base consequence
  tell atom NAME       add an atomic sentence to the language
  ask Γ => Δ           decide a sequent
  show                 list the current base
  trace on|off         toggle proof traces for ask
  save FILE            write the base as JSON
  load FILE            replace the base from JSON
  help                 this text
  quit                 leave the session
";

fn cmd_repl(base_path: Option<&Path>, mode: Mode, batch: Option<&Path>) -> Result<u8> {
    let base = match base_path {
        Some(path) if path.exists() => load_base(path, mode)?,
        _ => MaterialBase::new(),
    };
    let mut session = Session::new(mode, base);
    let stdout = io::stdout();

    if let Some(batch_path) = batch {
        let text = fs::read_to_string(batch_path)
            .with_context(|| format!("read batch file {}", batch_path.display()))?;
        let mut had_error = false;
        for (number, line) in text.lines().enumerate() {
            let mut out = stdout.lock();
            match session.execute(line, &mut out) {
                Ok(Action::Continue) => {}
                Ok(Action::Quit) => break,
                Err(err) => {
                    had_error = true;
                    eprintln!("{}:{}: {err:#}", batch_path.display(), number + 1);
                }
            }
        }
        return Ok(if had_error { 1 } else { 0 });
    }

    let stdin = io::stdin();
    loop {
        {
            let mut out = stdout.lock();
            write!(out, "nmms> ")?;
            out.flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut out = stdout.lock();
        match session.execute(&line, &mut out) {
            Ok(Action::Continue) => {}
            Ok(Action::Quit) => break,
            Err(err) => eprintln!("error: {err:#}"),
        }
    }
    Ok(0)
}
