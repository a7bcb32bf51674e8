use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use rustyline::history::DefaultHistory;

use pagetrace::common::types::AccessEvent;
use pagetrace::config::{EngineConfig, SessionConfig};
use pagetrace::{FlatFileCredentials, LruEngine, OperationKind, Session, SessionError, Statistics};

const HISTORY_FILE: &str = ".pagetrace_history";

#[derive(Parser)]
#[command(author, version, about = "pagetrace - LRU page fault accounting over file operations")]
struct Cli {
    /// Number of resident page frames
    #[arg(short, long, default_value_t = 4)]
    capacity: usize,

    /// Page fault log file
    #[arg(short, long, default_value = "page_fault_log.txt")]
    log_file: PathBuf,

    /// Directory holding one folder per user
    #[arg(short, long, default_value = "users_data")]
    data_dir: PathBuf,

    /// Credentials file with one "user password" pair per line
    #[arg(short, long, default_value = "users.txt")]
    users_file: PathBuf,

    /// Journal of successful file operations
    #[arg(long, default_value = "file_operations_log.txt")]
    operations_log: PathBuf,

    /// Keep a separate page fault log per user
    #[arg(long)]
    per_user_log: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and start an interactive shell
    Shell,

    /// Replay accesses to the given files through a fresh engine
    Trace {
        /// File names, accessed in order
        #[arg(required = true)]
        files: Vec<String>,

        /// Operation recorded for every access
        #[arg(short, long, default_value = "READ")]
        operation: OperationKind,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            frame_capacity: self.capacity,
            log_path: self.log_file.clone(),
            ..EngineConfig::default()
        }
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            engine: self.engine_config(),
            data_dir: self.data_dir.clone(),
            users_file: self.users_file.clone(),
            operations_log: self.operations_log.clone(),
            per_principal_logs: self.per_user_log,
        }
    }
}

/// A parsed shell line
#[derive(Debug, PartialEq)]
enum ShellCommand {
    Create(String),
    Write(String, String),
    Modify(String, String),
    Read(String),
    Search(String, String),
    Delete(String),
    List,
    Stats,
    Reset,
    Logout,
    Help,
    Exit,
}

fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let mut parts = line.trim().splitn(3, char::is_whitespace);
    let verb = parts.next().unwrap_or_default().to_lowercase();
    let file = parts.next().map(str::to_string);
    let rest = parts.next().map(|s| s.trim().to_string());

    let need_file = |usage: &str| file.clone().ok_or_else(|| format!("Usage: {}", usage));

    match verb.as_str() {
        "create" => Ok(ShellCommand::Create(need_file("create <file>")?)),
        "write" => Ok(ShellCommand::Write(need_file("write <file> <text>")?, rest.unwrap_or_default())),
        "modify" => Ok(ShellCommand::Modify(need_file("modify <file> <text>")?, rest.unwrap_or_default())),
        "read" => Ok(ShellCommand::Read(need_file("read <file>")?)),
        "search" => {
            let file = need_file("search <file> <keyword>")?;
            let keyword = rest.ok_or_else(|| "Usage: search <file> <keyword>".to_string())?;
            Ok(ShellCommand::Search(file, keyword))
        }
        "delete" => Ok(ShellCommand::Delete(need_file("delete <file>")?)),
        "ls" | "list" => Ok(ShellCommand::List),
        "stats" => Ok(ShellCommand::Stats),
        "reset" => Ok(ShellCommand::Reset),
        "logout" => Ok(ShellCommand::Logout),
        "help" => Ok(ShellCommand::Help),
        "exit" | "quit" => Ok(ShellCommand::Exit),
        other => Err(format!("Unknown command '{}'. Type 'help' for assistance.", other)),
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  create <file>                 - Create an empty file");
    println!("  write <file> <text>           - Append a line to a file");
    println!("  modify <file> <text>          - Overwrite a file");
    println!("  read <file>                   - Show a file");
    println!("  search <file> <keyword>       - Show lines containing a keyword");
    println!("  delete <file>                 - Delete a file");
    println!("  ls                            - List your files");
    println!();
    println!("Page fault analysis:");
    println!("  stats                         - Show page fault statistics");
    println!("  reset                         - Reset page fault statistics");
    println!();
    println!("Other commands:");
    println!("  logout                        - Log out and return to the login prompt");
    println!("  help                          - Display this help message");
    println!("  exit                          - Exit the CLI");
}

fn print_access(event: &AccessEvent) {
    println!("  [page {} {}]", event.page_id, event.status.short_label());
}

/// Outcome of running a shell command
enum Flow {
    Continue,
    Logout,
    Exit,
}

fn run_command(
    session: &mut Session,
    command: ShellCommand,
    rl: &mut Editor<(), DefaultHistory>,
) -> Result<Flow, SessionError> {
    match command {
        ShellCommand::Create(file) => {
            let event = session.create_file(&file)?;
            println!("File '{}' created in your folder.", file);
            print_access(&event);
        }
        ShellCommand::Write(file, text) => {
            let event = session.write_file(&file, &text)?;
            println!("Content written successfully.");
            print_access(&event);
        }
        ShellCommand::Modify(file, text) => {
            let event = session.modify_file(&file, &text)?;
            println!("File modified successfully.");
            print_access(&event);
        }
        ShellCommand::Read(file) => {
            let (content, event) = session.read_file(&file)?;
            if content.is_empty() {
                println!("(Empty file)");
            } else {
                print!("{}", content);
            }
            print_access(&event);
        }
        ShellCommand::Search(file, keyword) => {
            let (lines, event) = session.search_file(&file, &keyword)?;
            if lines.is_empty() {
                println!("Keyword not found.");
            }
            for line in lines {
                println!("{}", line);
            }
            print_access(&event);
        }
        ShellCommand::Delete(file) => {
            let answer = rl
                .readline(&format!("Are you sure you want to delete '{}'? [y/N] ", file))
                .unwrap_or_default();
            if answer.trim().eq_ignore_ascii_case("y") {
                let event = session.delete_file(&file)?;
                println!("File '{}' deleted.", file);
                print_access(&event);
            }
        }
        ShellCommand::List => {
            for name in session.workspace().list()? {
                println!("{}", name);
            }
        }
        ShellCommand::Stats => print!("{}", session.statistics()),
        ShellCommand::Reset => {
            session.reset_statistics();
            println!("Page fault analysis has been reset.");
        }
        ShellCommand::Logout => return Ok(Flow::Logout),
        ShellCommand::Help => print_help(),
        ShellCommand::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

fn login(rl: &mut Editor<(), DefaultHistory>, cli: &Cli) -> Result<Option<Session>> {
    let store = FlatFileCredentials::new(&cli.users_file);
    let config = cli.session_config();

    loop {
        let username = match rl.readline("Username: ") {
            Ok(line) => line.trim().to_string(),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let password = match rl.readline("Password: ") {
            Ok(line) => line.trim().to_string(),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match Session::login(&store, &config, &username, &password) {
            Ok(session) => {
                println!("Welcome {}!", username);
                return Ok(Some(session));
            }
            Err(SessionError::InvalidCredentials) => println!("Invalid username or password!"),
            Err(err) => return Err(err).context("Login failed"),
        }
    }
}

fn run_shell(cli: &Cli) -> Result<()> {
    println!("Welcome to pagetrace. Type 'help' for assistance or 'exit' to quit.");

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    'sessions: while let Some(mut session) = login(&mut rl, cli)? {
        loop {
            let prompt = format!("{}> ", session.principal());
            let line = match rl.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break 'sessions,
                Err(err) => {
                    println!("Error: {}", err);
                    break 'sessions;
                }
            };

            let _ = rl.add_history_entry(&line);
            if line.trim().is_empty() {
                continue;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };

            match run_command(&mut session, command, &mut rl) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Logout) => {
                    session.logout();
                    println!("You have been logged out.");
                    continue 'sessions;
                }
                Ok(Flow::Exit) => {
                    println!("Exiting...");
                    break 'sessions;
                }
                Err(err) => println!("Error: {}", err),
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }

    Ok(())
}

fn run_trace(cli: &Cli, files: &[String], operation: OperationKind, json: bool) -> Result<Statistics> {
    let mut engine = LruEngine::new(&cli.engine_config()).context("Invalid engine configuration")?;

    for file in files {
        let event = engine.process(file, operation);
        if !json {
            println!("{:<20} page {:<4} {}", file, event.page_id, event.status.short_label());
        }
    }

    Ok(engine.snapshot())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Trace { files, operation, json }) => {
            let stats = run_trace(&cli, files, *operation, *json)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!();
                print!("{}", stats);
            }
        }
        Some(Commands::Shell) | None => run_shell(&cli)?,
    }

    Ok(())
}
