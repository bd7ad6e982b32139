use clap::{Parser, Subcommand, ValueEnum};
use linkmargin_core::export::render_csv;
use linkmargin_shell::commands::calc::margin_table;
use linkmargin_shell::commands::tables::{bodies_table, codings_table};
use linkmargin_shell::commands::terms::terms_table;
use linkmargin_shell::commands::{self, CommandOutput};
use linkmargin_shell::session::Session;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "linkmargin")]
#[command(about = "Satellite uplink/downlink margin calculator")]
#[command(version)]
struct Cli {
    /// Run a single command instead of the interactive shell
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute margins for a parameter file
    Calc {
        /// Parameter file (key = value per line)
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print the body and coding scheme catalogs
    Tables,
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".linkmargin_history")
}

struct ShellHelper {
    commands: Vec<String>,
    fields: Vec<String>,
    bodies: Vec<String>,
}

impl ShellHelper {
    fn new() -> Self {
        Self {
            commands: [
                "SET", "UNSET", "OVERRIDE", "TARGET", "CODING", "CALC", "TERMS", "SHOW",
                "BODIES", "CODINGS", "TEMPS", "LOAD", "SAVE", "EXPORT", "RESET", "HELP", "QUIT",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            fields: linkmargin_shell::form::Field::ALL
                .iter()
                .map(|f| f.name().to_string())
                .collect(),
            bodies: linkmargin_core::Body::ALL
                .iter()
                .map(|b| b.name().to_string())
                .collect(),
        }
    }
}

fn split_path_prefix(partial: &str) -> (&Path, &str) {
    if partial.is_empty() {
        return (Path::new("."), "");
    }
    let path = Path::new(partial);
    if partial.ends_with(std::path::is_separator) {
        return (path, "");
    }
    match (path.parent(), path.file_name()) {
        (Some(p), Some(f)) => {
            let dir = if p.as_os_str().is_empty() { Path::new(".") } else { p };
            (dir, f.to_str().unwrap_or(""))
        }
        _ => (Path::new("."), partial),
    }
}

fn complete_path(partial: &str) -> Vec<Pair> {
    let (dir, prefix) = split_path_prefix(partial);
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return vec![],
    };
    let base = match partial.rfind(std::path::is_separator) {
        Some(i) => partial[..=i].to_string(),
        None => String::new(),
    };
    entries
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            if !name.starts_with(prefix) {
                return None;
            }
            let suffix = if e.path().is_dir() { std::path::MAIN_SEPARATOR_STR } else { "" };
            Some(Pair {
                display: format!("{}{}", name, suffix),
                replacement: format!("{}{}{}", base, name, suffix),
            })
        })
        .collect()
}

fn complete_word(candidates: &[String], prefix: &str) -> Vec<Pair> {
    let prefix = prefix.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&prefix))
        .map(|c| Pair { display: c.clone(), replacement: c.clone() })
        .collect()
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let up_to = &line[..pos];
        let words: Vec<&str> = up_to.split_whitespace().collect();
        let start = up_to.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let partial = if up_to.ends_with(' ') { "" } else { words.last().copied().unwrap_or("") };

        if words.is_empty() || (words.len() == 1 && !up_to.ends_with(' ')) {
            return Ok((start, complete_word(&self.commands, partial)));
        }
        // only the first argument is completed
        let arg_index = if up_to.ends_with(' ') { words.len() } else { words.len() - 1 };
        if arg_index != 1 {
            return Ok((pos, vec![]));
        }
        let matches = match words[0].to_uppercase().as_str() {
            "LOAD" | "SAVE" | "EXPORT" => complete_path(partial),
            "SET" | "UNSET" | "OVERRIDE" => complete_word(&self.fields, partial),
            "TARGET" => complete_word(&self.bodies, partial),
            _ => vec![],
        };
        Ok((start, matches))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}
impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}
impl Helper for ShellHelper {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Calc { file, format }) => run_calc(&file, format),
        Some(Commands::Tables) => {
            print_output(bodies_table());
            println!();
            print_output(codings_table());
            Ok(())
        }
        None => {
            run_shell();
            Ok(())
        }
    }
}

fn run_calc(file: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let mut session = Session::new();
    session.load_file(file)?;
    let result = session.calculate()?;
    match format {
        OutputFormat::Table => {
            println!("Target: {}  Coding: {}\n", result.target, result.coding);
            print_output(margin_table(result));
            println!();
            print_output(terms_table(result));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => print!("{}", render_csv(result)),
    }
    Ok(())
}

fn run_shell() {
    println!("linkmargin v{}", env!("CARGO_PKG_VERSION"));
    println!("Type HELP for commands, Ctrl-D to exit\n");

    let helper = ShellHelper::new();
    let mut rl = match Editor::with_config(
        rustyline::Config::builder()
            .auto_add_history(true)
            .build(),
    ) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize editor: {}", e);
            return;
        }
    };
    rl.set_helper(Some(helper));

    let history = history_path();
    let _ = rl.load_history(&history);

    let mut session = Session::new();

    loop {
        match rl.readline("link> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("QUIT") {
                    println!("Bye!");
                    break;
                }
                match commands::dispatch(&mut session, line) {
                    Ok(output) => print_output(output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(&history);
}

fn print_output(output: CommandOutput) {
    match output {
        CommandOutput::Text(s) => println!("{}", s),
        CommandOutput::Table { headers, rows } => print_table(&headers, &rows),
        CommandOutput::None => {}
    }
}

fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            let hw = headers[i].len();
            let rw = rows.iter()
                .map(|r| r.get(i).map_or(0, |s| s.len()))
                .max()
                .unwrap_or(0);
            hw.max(rw)
        })
        .collect();

    for (i, h) in headers.iter().enumerate() {
        print!("{:>width$}  ", h, width = widths[i]);
    }
    println!();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            print!("{:>width$}  ", cell, width = widths[i]);
        }
        println!();
    }
}
