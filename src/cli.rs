use clap::{Parser, ValueEnum};
use colored::*;
use log::{LevelFilter, debug};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::common::config::{TableConfig, DEFAULT_TABLE_CAPACITY};
use crate::common::exception::CliError;
use crate::common::logger::initialize_logger_with_level;
use crate::container::chained_hash_table::ChainedHashTable;
use crate::container::hash_function::HashFunctionKind;
use crate::types_db::record::Record;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum HashArg {
    CodePointSum,
    Xxh3,
}

impl From<HashArg> for HashFunctionKind {
    fn from(arg: HashArg) -> Self {
        match arg {
            HashArg::CodePointSum => HashFunctionKind::CodePointSum,
            HashArg::Xxh3 => HashFunctionKind::Xxh3,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of buckets in the table
    #[arg(short, long, default_value_t = DEFAULT_TABLE_CAPACITY)]
    capacity: usize,

    /// Hash function used to place contacts into buckets
    #[arg(long, value_enum, default_value_t = HashArg::CodePointSum)]
    hash: HashArg,

    /// Run the scripted demonstration and exit
    #[arg(long)]
    demo: bool,

    /// Log table operations at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn table_config(&self) -> TableConfig {
        TableConfig {
            capacity: self.capacity,
            hash_function: self.hash.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { name: String, number: String },
    Search { name: String },
    Dump,
    Stats,
    Help,
    Quit,
}

/// Parses one line of REPL input.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err(CliError::Usage("help".to_string()));
    };
    let rest: Vec<&str> = parts.collect();

    match (verb.to_lowercase().as_str(), rest.as_slice()) {
        ("insert", [name, number]) => Ok(Command::Insert {
            name: name.to_string(),
            number: number.to_string(),
        }),
        ("insert", _) => Err(CliError::Usage("insert <name> <number>".to_string())),
        ("search", [name]) => Ok(Command::Search {
            name: name.to_string(),
        }),
        ("search", _) => Err(CliError::Usage("search <name>".to_string())),
        ("dump", []) => Ok(Command::Dump),
        ("stats", []) => Ok(Command::Stats),
        ("help", _) => Ok(Command::Help),
        ("quit" | "exit", _) => Ok(Command::Quit),
        (other, _) => Err(CliError::UnknownCommand(other.to_string())),
    }
}

pub struct CLI {
    table: ChainedHashTable<HashFunctionKind>,
    demo: bool,
}

impl CLI {
    pub fn new() -> Result<Self, CliError> {
        let args = Args::parse();
        initialize_logger_with_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
        debug!("Parsed arguments: {:?}", args);
        let mut cli = Self::from_config(&args.table_config())?;
        cli.demo = args.demo;
        Ok(cli)
    }

    pub fn from_config(config: &TableConfig) -> Result<Self, CliError> {
        Ok(Self {
            table: ChainedHashTable::from_config(config)?,
            demo: false,
        })
    }

    pub fn table(&self) -> &ChainedHashTable<HashFunctionKind> {
        &self.table
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.demo {
            for line in self.run_demo() {
                println!("{}", line);
            }
            return Ok(());
        }
        self.run_repl()
    }

    /// Executes a command and returns the lines to show the user.
    pub fn execute_command(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Insert { name, number } => {
                let record = Record::new(name.as_str(), number);
                match self.table.insert(&name, record) {
                    Some(previous) => vec![format!("Updated (was {})", previous)],
                    None => vec![format!("Inserted {}", name)],
                }
            }
            Command::Search { name } => match self.table.search(&name) {
                Some(record) => vec![record.to_string()],
                None => vec![format!("{} not found", name)],
            },
            Command::Dump => self.table.dump(),
            Command::Stats => vec![self.table.stats().to_string()],
            Command::Help => help_lines(),
            Command::Quit => Vec::new(),
        }
    }

    /// Replays the reference walkthrough: a record, an update, an anagram
    /// collision and a miss.
    pub fn run_demo(&mut self) -> Vec<String> {
        let script = [
            "insert Riley 123-456-7890",
            "insert John 909-876-1234",
            "insert Rebecca 111-555-0002",
            "search John",
            "search Chris",
            "insert Rebecca 999-444-9999",
            "search Rebecca",
            "insert Amy 111-222-3333",
            "insert May 222-333-1111",
            "search Amy",
            "search May",
            "dump",
        ];

        let mut output = Vec::new();
        for line in script {
            output.push(format!("> {}", line));
            match parse_command(line) {
                Ok(command) => output.extend(self.execute_command(command)),
                Err(e) => output.push(format!("Error: {}", e)),
            }
        }
        output
    }

    fn run_repl(&mut self) -> Result<(), CliError> {
        println!("{}", "\nPhonebook".blue().bold());
        println!("Type 'help' for commands\n");

        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline("phonebook> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;

                    match parse_command(line) {
                        Ok(Command::Quit) => break,
                        Ok(command) => {
                            for output in self.execute_command(command) {
                                println!("{}", output);
                            }
                        }
                        Err(e) => println!("{}", format!("Error: {}", e).red()),
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }
}

fn help_lines() -> Vec<String> {
    [
        "Available Commands:",
        "  insert <name> <number> - Add or update a contact",
        "  search <name>          - Look up a contact",
        "  dump                   - Show every bucket",
        "  stats                  - Show table shape",
        "  help                   - Show this help message",
        "  quit                   - Exit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
