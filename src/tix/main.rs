use clap::Parser;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::io::Read;
use tix::config::TixConfig;
use tix::error::{Result, TixError};
use tix::model::{Comment, Issue, User};
use tix::render::Printer;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let printer = init_printer(&cli)?;

    match &cli.command {
        Commands::Show { input } => {
            let issue: Issue = read_record(input)?;
            print!("{}", printer.card(&issue));
        }
        Commands::List { input } => {
            let issues: Vec<Issue> = read_record(input)?;
            for issue in &issues {
                println!("{}", printer.oneline(issue));
            }
        }
        Commands::Tree { input } => {
            let issue: Issue = read_record(input)?;
            let out = printer.tree(&issue);
            if out.ends_with('\n') {
                print!("{}", out);
            } else {
                println!("{}", out);
            }
        }
        Commands::Comments { input } => {
            let comments: Vec<Comment> = read_record(input)?;
            print!("{}", printer.comments(&comments));
        }
    }
    Ok(())
}

fn init_printer(cli: &Cli) -> Result<Printer> {
    let proj_dirs =
        ProjectDirs::from("com", "tix", "tix").expect("Could not determine config dir");
    let file_config = TixConfig::load(proj_dirs.config_dir()).unwrap_or_default();

    let mut config = file_config.render_config();
    if let Some(width) = cli.width {
        config.width = width;
    }
    if cli.no_color {
        config.use_color = false;
    }
    if let Some(me) = &cli.me {
        config.me = Some(User::new(me));
    }

    Ok(Printer::new(config))
}

fn read_record<T: DeserializeOwned>(input: &str) -> Result<T> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };

    if content.trim().is_empty() {
        return Err(TixError::Input(format!("Empty input: {}", input)));
    }

    Ok(serde_json::from_str(&content)?)
}
