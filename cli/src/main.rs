use std::fs::File;
use std::path::Path;
use std::time::Instant;

use clap::{Parser, Subcommand};
use crossterm::style::{Attribute, Color as TermColor, Stylize};
use spinners::Spinner;

use cornerdb::cubie::CubieCube;
use cornerdb::error::Error;
use cornerdb::pruning::{create_corner_depth_table, CornerDepthTable};
use cornerdb::scramble::{gen_scramble, scramble_from_str, scramble_to_str};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "generates the corner depth table and writes it to disk")]
    Generate {
        #[arg(short, long, default_value = "tables/corner_depth")]
        output: String,
    },

    #[command(about = "prints the corner lower bound for a scramble")]
    Lookup {
        #[arg(short, long)]
        scramble: String,

        #[arg(short, long, default_value = "tables/corner_depth")]
        table: String,
    },

    #[command(about = "generates scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 25)]
        length: usize,
    },
}

fn generate(output: &str) -> Result<(), Error> {
    let start = Instant::now();
    let mut table = CornerDepthTable::new();
    table.generate(&CubieCube::default())?;

    if let Some(dir) = Path::new(output).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let mut sink = File::create(output)?;
    table.write(&mut sink)?;

    println!("Table written to {} in {:?}", output, start.elapsed());
    Ok(())
}

fn lookup(scramble: &str, table: &str) -> Result<(), Error> {
    let scramble = scramble_from_str(scramble)?;
    let state = CubieCube::from(&scramble);

    let mut spinner = Spinner::new(spinners::Spinners::Dots, "Preparing tables".to_owned());
    let table = create_corner_depth_table(table)?;
    spinner.stop_with_newline();

    println!("Scramble: {}", scramble_to_str(&scramble)?.trim());
    println!("Corner lower bound: {}", table.lookup(&state));
    Ok(())
}

fn scramble(length: usize) -> Result<(), Error> {
    let ss = gen_scramble(length);
    println!("Scramble: {}", scramble_to_str(&ss)?.trim());
    Ok(())
}

fn main() {
    let program = Cli::parse();

    let result = match &program.command {
        Some(Commands::Generate { output }) => generate(output),
        Some(Commands::Lookup { scramble, table }) => lookup(scramble, table),
        Some(Commands::Scramble { length }) => scramble(*length),
        _ => Ok(()),
    };

    if let Err(error) = result {
        let styled = "Error:".with(TermColor::Red).attribute(Attribute::Bold);
        println!("{styled} {error}");
    }
}
