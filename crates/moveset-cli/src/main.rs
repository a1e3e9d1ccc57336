//! Species Move Assistant CLI
//!
//! Command-line tool for turning typed move lists into move-ID lists and for
//! checking species and name usage across data tables.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use moveset_core::data_files::{MOVES_FILE, SPECIES_FILE, WILD_AREAS_FILE};
use moveset_core::{
    load_move_table, name_collisions, names_used, process_batch, read_table,
    resolve_data_file, species_coverage, MoveTable, OverrideMap, ParseRequest, Resolver,
    SessionFile,
};
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "moveset")]
#[command(about = "Species Move Assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Session file with saved settings (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the move table and overrides come from
#[derive(Args)]
struct TableArgs {
    /// Move table CSV file
    #[arg(short, long)]
    moves: Option<PathBuf>,

    /// Directories searched for the move table
    #[arg(short, long)]
    data_dir: Vec<PathBuf>,

    /// Extra move IDs (name:id,name:id...)
    #[arg(short = 'x', long)]
    overrides: Option<String>,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write the resolved text to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a plain move list (base, disc, egg, tutor moves)
    List {
        #[command(flatten)]
        table: TableArgs,

        #[command(flatten)]
        out: OutputArgs,

        /// Move list text; read from stdin if omitted
        input: Option<String>,
    },

    /// Resolve a level-up move list
    LevelUp {
        #[command(flatten)]
        table: TableArgs,

        #[command(flatten)]
        out: OutputArgs,

        /// Level-up list text; read from stdin if omitted
        input: Option<String>,
    },

    /// Resolve six-line species moveset records into tab-separated rows
    Batch {
        #[command(flatten)]
        table: TableArgs,

        #[command(flatten)]
        out: OutputArgs,

        /// File of records; read from stdin if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Prompt for lists one at a time
    Interactive {
        #[command(flatten)]
        table: TableArgs,
    },

    /// List species used and unused by wild areas
    SpeciesCoverage {
        /// Species CSV file
        #[arg(long)]
        species: Option<PathBuf>,

        /// Wild area CSV file
        #[arg(long)]
        wild_areas: Option<PathBuf>,

        /// Directories searched for the default tables
        #[arg(short, long)]
        data_dir: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List every name used by generic NPCs and trainers
    NamesUsed {
        /// Generic NPCs CSV file (name in column 2)
        #[arg(long)]
        npcs: PathBuf,

        /// Trainers CSV file (name in column 3)
        #[arg(long)]
        trainers: PathBuf,

        /// Only show names used more than once
        #[arg(long)]
        collisions: bool,
    },

    /// Create a session file template
    CreateConfig {
        /// Output path for the session file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        table: TableArgs,
    },
}

/// Machine-readable result of one command
#[derive(Serialize)]
struct Report<'a, U: Serialize> {
    generated_at: DateTime<Utc>,
    mode: &'a str,
    output: &'a str,
    unresolved: U,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> moveset_core::Result<()> {
    let session = match &cli.config {
        Some(path) => SessionFile::load(path)?,
        None => SessionFile::default(),
    };

    match cli.command {
        Commands::List { table, out, input } => {
            let text = input_or_stdin(input)?;
            cmd_parse(session, table, &out, ParseRequest::List(text))
        }
        Commands::LevelUp { table, out, input } => {
            let text = input_or_stdin(input)?;
            cmd_parse(session, table, &out, ParseRequest::LevelUp(text))
        }
        Commands::Batch { table, out, input } => cmd_batch(session, table, &out, input.as_deref()),
        Commands::Interactive { table } => cmd_interactive(session, table),
        Commands::SpeciesCoverage {
            species,
            wild_areas,
            data_dir,
            format,
        } => cmd_species_coverage(session, species, wild_areas, data_dir, format),
        Commands::NamesUsed {
            npcs,
            trainers,
            collisions,
        } => cmd_names_used(&npcs, &trainers, collisions),
        Commands::CreateConfig { output, table } => cmd_create_config(&output, table),
    }
}

fn cmd_parse(
    session: SessionFile,
    args: TableArgs,
    out: &OutputArgs,
    request: ParseRequest,
) -> moveset_core::Result<()> {
    let session = session.merged_with(args.moves, args.data_dir, args.overrides);
    let table = load_table(&session)?;
    let overrides = load_overrides(session.overrides.as_deref());
    let resolver = Resolver::new(&table, &overrides);

    let result = request.parse(&resolver);

    match out.format {
        Format::Text => {
            println!("{}", result);
            write_output(out.output.as_deref(), &result.output)?;
            if !result.is_complete() {
                print_not_found(&result.unresolved);
            }
        }
        Format::Json => {
            write_output(out.output.as_deref(), &result.output)?;
            print_report(request.mode_name(), &result.output, &result.unresolved)?;
        }
    }

    Ok(())
}

fn cmd_batch(
    session: SessionFile,
    args: TableArgs,
    out: &OutputArgs,
    input: Option<&Path>,
) -> moveset_core::Result<()> {
    let session = session.merged_with(args.moves, args.data_dir, args.overrides);
    let table = load_table(&session)?;
    let overrides = load_overrides(session.overrides.as_deref());
    let resolver = Resolver::new(&table, &overrides);

    let content = match input {
        Some(path) => fs::read_to_string(path).map_err(|e| moveset_core::Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => read_stdin()?,
    };

    let result = process_batch(content.lines(), &resolver);
    log::debug!("processed {} record(s)", result.records);

    match out.format {
        Format::Text => {
            print!("{}", result.output);
            write_output(out.output.as_deref(), &result.output)?;
            let unresolved: Vec<String> = result.unresolved.into_iter().collect();
            print_not_found(&unresolved);
        }
        Format::Json => {
            write_output(out.output.as_deref(), &result.output)?;
            print_report("batch", &result.output, &result.unresolved)?;
        }
    }

    Ok(())
}

fn cmd_interactive(session: SessionFile, args: TableArgs) -> moveset_core::Result<()> {
    let session = session.merged_with(args.moves, args.data_dir, args.overrides);
    let table = load_table(&session)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    let overrides = match session.overrides.as_deref() {
        Some(raw) => load_overrides(Some(raw)),
        None => match prompt(&mut lines, "Extra Move Ids (name:id,name:id...)> ")? {
            Some(raw) => load_overrides(Some(&raw)),
            None => return Ok(()),
        },
    };
    let resolver = Resolver::new(&table, &overrides);

    loop {
        let mode = match prompt(&mut lines, "Regular (0) or Level-Up (1)?> ")? {
            Some(mode) if !mode.is_empty() => mode,
            _ => return Ok(()),
        };

        let Some(text) = prompt(&mut lines, "Input> ")? else {
            return Ok(());
        };

        let request = if mode == "0" {
            ParseRequest::List(text)
        } else {
            ParseRequest::LevelUp(text)
        };

        let result = request.parse(&resolver);
        println!("{}", result);
        if !result.is_complete() {
            print_not_found(&result.unresolved);
        }
    }
}

fn cmd_species_coverage(
    session: SessionFile,
    species: Option<PathBuf>,
    wild_areas: Option<PathBuf>,
    data_dir: Vec<PathBuf>,
    format: Format,
) -> moveset_core::Result<()> {
    let roots = if data_dir.is_empty() {
        session.data_dirs
    } else {
        data_dir
    };

    let species_path = resolve_data_file(species.as_deref(), &roots, SPECIES_FILE)?;
    let wild_areas_path = resolve_data_file(wild_areas.as_deref(), &roots, WILD_AREAS_FILE)?;

    let coverage = species_coverage(&read_table(&species_path)?, &read_table(&wild_areas_path)?)?;

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&coverage)?);
        return Ok(());
    }

    println!("Used Species:");
    for s in &coverage.used {
        println!("{} - {}", s.id, s.name);
    }

    println!("{}", "-".repeat(20));
    println!("Unused Species:");
    for s in &coverage.unused {
        println!("{} - {}", s.id, s.name);
    }

    Ok(())
}

fn cmd_names_used(npcs: &Path, trainers: &Path, collisions_only: bool) -> moveset_core::Result<()> {
    let npcs = read_table(npcs)?;
    let trainers = read_table(trainers)?;

    let names = names_used(&[(&npcs, 1), (&trainers, 2)])?;

    if collisions_only {
        let collisions = name_collisions(&names);
        println!("Names Used More Than Once ({}):", collisions.len());
        for n in &collisions {
            println!("{}", n);
        }
    } else {
        println!("Names Used:");
        for n in &names {
            println!("{}", n);
        }
    }

    Ok(())
}

fn cmd_create_config(output: &Path, args: TableArgs) -> moveset_core::Result<()> {
    let mut session = SessionFile::default().merged_with(args.moves, args.data_dir, args.overrides);

    // Leave a usable default when nothing was given
    if session.moves_file.is_none() && session.data_dirs.is_empty() {
        session.data_dirs.push(PathBuf::from("Assets/Resources/Data"));
    }

    session.save(output)?;
    println!("Created session file: {}", output.display());
    println!();
    println!("Edit the file to configure your session, then run:");
    println!("  moveset --config {} interactive", output.display());

    Ok(())
}

fn load_table(session: &SessionFile) -> moveset_core::Result<MoveTable> {
    let path = resolve_data_file(session.moves_file.as_deref(), &session.data_dirs, MOVES_FILE)?;
    load_move_table(path)
}

fn load_overrides(raw: Option<&str>) -> OverrideMap {
    let Some(raw) = raw else {
        return OverrideMap::new();
    };

    match OverrideMap::try_parse(raw) {
        Ok(map) => map,
        Err(e) => {
            log::warn!("{}; ignoring all extra move IDs", e);
            OverrideMap::new()
        }
    }
}

fn input_or_stdin(input: Option<String>) -> moveset_core::Result<String> {
    match input {
        Some(text) => Ok(text),
        None => Ok(read_stdin()?.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn read_stdin() -> io::Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<R: BufRead>(reader: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn write_output(path: Option<&Path>, output: &str) -> moveset_core::Result<()> {
    if let Some(path) = path {
        fs::write(path, output)?;
        eprintln!("Output written to {}", path.display());
    }
    Ok(())
}

fn print_not_found(unresolved: &[String]) {
    if !unresolved.is_empty() {
        println!("Not Found:\n{}", unresolved.join("\n"));
    }
}

fn print_report<U: Serialize>(mode: &str, output: &str, unresolved: U) -> moveset_core::Result<()> {
    let report = Report {
        generated_at: Utc::now(),
        mode,
        output,
        unresolved,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
