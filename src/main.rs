// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI entry point for steno
//!
//! Provides command-line interface for validating rules, generating and
//! comparing dictionaries, and tidying Typey Type progress files.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::debug;

use steno_dictgen::{
    core::{parse_outline, validate_rules, DictionaryFactory, FactoryOpts, NumberOption, Rules},
    files, logging, progress,
};

#[derive(Parser)]
#[command(name = "steno")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Turn on debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Plover dictionary file from a rules file
    #[command(visible_alias = "gen-dict")]
    GenerateDictionary {
        /// Path to the rules file
        rules: PathBuf,

        /// Dictionary file to write
        #[arg(short, long, default_value = "dict.json")]
        output: PathBuf,

        /// Skip ctrl-gui, shift-ctrl-gui, ctrl-alt-gui and shift-ctrl-alt-gui
        #[arg(long)]
        no_nonstandard_mods: bool,

        /// Skip modifier + letter entries
        #[arg(long)]
        no_fingerspellings: bool,

        /// What #S #T #P #H #A #O type
        #[arg(long, value_enum, default_value_t = NumberOption::DigitsLow)]
        numbers_left: NumberOption,

        /// What the same chords with a star type
        #[arg(long, value_enum, default_value_t = NumberOption::FunctionsLow)]
        number_stars_left: NumberOption,

        /// Overwrite an existing output without backing it up
        #[arg(long)]
        no_backup: bool,
    },

    /// Check a rules file for collisions
    #[command(visible_alias = "check-rules")]
    ValidateRules {
        /// Path to the rules file
        rules: PathBuf,
    },

    /// Print the briefs two dictionaries both define
    #[command(visible_alias = "cmp-dict")]
    CompareDictionaries {
        a: PathBuf,
        b: PathBuf,

        /// Print collisions as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print outlines in canonical notation
    #[command(visible_alias = "norm")]
    Normalize {
        #[arg(required = true)]
        outlines: Vec<String>,
    },

    /// Merge two Typey Type progress files, summing counts
    #[command(visible_alias = "merge")]
    MergeProgress {
        a: PathBuf,
        b: PathBuf,

        /// Output file (defaults to overwriting the first input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite without backing up
        #[arg(long)]
        no_backup: bool,
    },

    /// Trim whitespace from the words of a Typey Type progress file
    #[command(visible_alias = "clean")]
    CleanProgress {
        a: PathBuf,

        /// Output file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite without backing up
        #[arg(long)]
        no_backup: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::GenerateDictionary {
            rules,
            output,
            no_nonstandard_mods,
            no_fingerspellings,
            numbers_left,
            number_stars_left,
            no_backup,
        } => {
            let opts = FactoryOpts {
                nonstandard_mod_combos: !no_nonstandard_mods,
                fingerspellings: !no_fingerspellings,
                numbers_left,
                number_stars_left,
            };
            generate_dictionary(&rules, &output, opts, !no_backup)?
        }
        Commands::ValidateRules { rules } => {
            load_valid_rules(&rules)?;
        }
        Commands::CompareDictionaries { a, b, json } => compare_dictionaries(&a, &b, json)?,
        Commands::Normalize { outlines } => normalize(&outlines),
        Commands::MergeProgress {
            a,
            b,
            output,
            no_backup,
        } => merge_progress(&a, &b, output.as_deref(), !no_backup)?,
        Commands::CleanProgress {
            a,
            output,
            no_backup,
        } => clean_progress(&a, output.as_deref(), !no_backup)?,
    }

    Ok(())
}

/// Expand a leading tilde in a path argument
fn expand(path: &Path) -> anyhow::Result<PathBuf> {
    let path = path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid path encoding: {}", path.display()))?;
    Ok(files::expand_path(path))
}

/// Load a rules file and print every violation; exits on any
fn load_valid_rules(rules_path: &Path) -> anyhow::Result<Rules> {
    let path = expand(rules_path)?;
    println!("{} Reading rules: {}", "→".cyan(), path.display());

    let rules = files::read_rules_file(&path)?;
    debug!(rules = ?rules, "Rules loaded");

    let report = validate_rules(&rules);
    if report.is_valid() {
        println!("{} {}", "✓".green().bold(), "Rules are valid".bold());
        return Ok(rules);
    }

    println!(
        "{} Found {} violation{}:\n",
        "✗".red().bold(),
        report.len(),
        if report.len() == 1 { "" } else { "s" }
    );
    for violation in &report.violations {
        println!("  {} {}", "✗".red(), violation);
    }
    println!("\n{}", "⚠ These commands will collide while typing!".yellow());
    std::process::exit(1);
}

fn generate_dictionary(
    rules_path: &Path,
    output: &Path,
    opts: FactoryOpts,
    backup: bool,
) -> anyhow::Result<()> {
    let rules = load_valid_rules(rules_path)?;
    let output = expand(output)?;

    debug!(opts = ?opts, "Factory options");
    let dictionary = DictionaryFactory::new(opts).generate(&rules);

    let backup_path = files::write_dictionary_file(&dictionary, &output, backup)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if let Some(backup_path) = backup_path {
        println!("{} Backed up previous file to {}", "→".cyan(), backup_path.display());
    }
    println!(
        "{} Wrote {} entries to {}",
        "✓".green().bold(),
        dictionary.len(),
        output.display()
    );

    Ok(())
}

fn compare_dictionaries(a_path: &Path, b_path: &Path, json: bool) -> anyhow::Result<()> {
    let a = files::read_dictionary_file(&expand(a_path)?)?;
    let b = files::read_dictionary_file(&expand(b_path)?)?;

    let collisions = a.collisions_with(&b);

    if json {
        print!("{}", files::to_pretty_json(&collisions)?);
        return Ok(());
    }

    if collisions.is_empty() {
        println!("{} {}", "✓".green().bold(), "No collisions detected!".bold());
        return Ok(());
    }

    println!(
        "{} Found {} collision{}:\n",
        "✗".yellow().bold(),
        collisions.len(),
        if collisions.len() == 1 { "" } else { "s" }
    );
    for collision in &collisions {
        println!("  {}", collision);
    }
    println!(
        "\n{}",
        "You may want to perform lookups to see if there are other briefs for the definitions. \
         You may also check for multi-brief combinations (such as `RE` to mean `{re^}` for a word \
         starting in \"re\")"
            .yellow()
    );

    Ok(())
}

fn normalize(outlines: &[String]) {
    for notation in outlines {
        match parse_outline(notation) {
            Ok(outline) => println!("{}", outline),
            Err(e) => {
                eprintln!("{} {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        }
    }
}

fn merge_progress(
    a_path: &Path,
    b_path: &Path,
    output: Option<&Path>,
    backup: bool,
) -> anyhow::Result<()> {
    let a_path = expand(a_path)?;
    let (a, a_summary) = progress::clean(progress::read_progress_file(&a_path)?);
    println!("{} {}: {}", "→".cyan(), a_path.display(), a_summary);

    let b_path = expand(b_path)?;
    let (b, b_summary) = progress::clean(progress::read_progress_file(&b_path)?);
    println!("{} {}: {}", "→".cyan(), b_path.display(), b_summary);

    let (merged, summary) = progress::merge(a, b);

    let output = match output {
        Some(output) => expand(output)?,
        None => a_path,
    };
    progress::write_progress_file(&merged, &output, backup)?;

    println!("{} {}", "✓".green().bold(), summary);
    Ok(())
}

fn clean_progress(path: &Path, output: Option<&Path>, backup: bool) -> anyhow::Result<()> {
    let path = expand(path)?;
    let (cleaned, summary) = progress::clean(progress::read_progress_file(&path)?);

    let output = match output {
        Some(output) => expand(output)?,
        None => path,
    };
    progress::write_progress_file(&cleaned, &output, backup)?;

    println!("{} {}", "✓".green().bold(), summary);
    Ok(())
}
