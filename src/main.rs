//! vim2sourceview - Vim color scheme converter

use std::io;
use std::process::ExitCode;

use clap::Parser;

use vim2sourceview::{SchemeOptions, convert};

#[derive(Parser)]
#[command(name = "vim2sourceview")]
#[command(about = "Convert Vim color schemes to GtkSourceView style schemes", long_about = None)]
#[command(after_help = "EXAMPLES:
    vim2sourceview < zenburn.vim > zenburn.xml
    vim2sourceview -n Zenburn -a \"Jane Doe\" < zenburn.vim")]
struct Cli {
    /// Author recorded in the scheme header
    #[arg(short, long, value_name = "AUTHOR")]
    author: Option<String>,

    /// Scheme version attribute (defaults to 1.0)
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    version: Option<String>,

    /// Scheme name, overriding any name discovered in the script
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,

    /// Scheme description, overriding the derived default
    #[arg(short, long, value_name = "DESCRIPTION")]
    description: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = SchemeOptions {
        name: cli.name,
        version: cli.version,
        author: cli.author,
        description: cli.description,
    };

    match convert(io::stdin().lock(), &options) {
        Ok(xml) => {
            print!("{xml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: parse_vim: {e}");
            ExitCode::FAILURE
        }
    }
}
