//! Implementation of `sift init`.

use std::{fs, io, path::Path, process::ExitCode};

use sift_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};

use crate::cli::{args::InitCommand, context::CommandContext, output::subheader};

/// Entry appended to `.gitignore` so the local index stays untracked.
const INDEX_IGNORE_ENTRY: &str = ".sift/";

/// Writes a starter `.sift.toml`, locally or in the home directory.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let global = global_config_path();
    let home = global.as_deref().and_then(|p| p.parent());
    let wants_global = cmd.global || home == Some(ctx.cwd.as_path());

    let (target, template) = if wants_global {
        let Some(path) = global else {
            eprintln!("error: could not determine home directory");
            return ExitCode::FAILURE;
        };
        (path, global_template())
    } else {
        (ctx.cwd.join(CONFIG_FILENAME), local_template())
    };

    if target.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}\nuse --force to overwrite",
            target.display()
        );
        return ExitCode::FAILURE;
    }
    if let Err(e) = fs::write(&target, &template) {
        eprintln!("error: failed to write {}: {e}", target.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}\n", target.display());
    println!("{}", subheader("Configuration written:"));
    template.lines().for_each(|line| println!("   {line}"));

    if !wants_global {
        match ignore_index_dir(&ctx.cwd.join(".gitignore")) {
            Ok(true) => println!("Added {INDEX_IGNORE_ENTRY} to .gitignore"),
            Ok(false) => {}
            Err(e) => eprintln!("warning: could not update .gitignore: {e}"),
        }
    }
    ExitCode::SUCCESS
}

/// Appends the index directory to an existing `.gitignore`.
///
/// Returns `Ok(false)` when there is no `.gitignore` or the entry is already listed.
fn ignore_index_dir(gitignore: &Path) -> io::Result<bool> {
    let existing = match fs::read_to_string(gitignore) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    let listed = existing
        .lines()
        .any(|line| matches!(line.trim(), ".sift" | INDEX_IGNORE_ENTRY));
    if listed {
        return Ok(false);
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(INDEX_IGNORE_ENTRY);
    updated.push('\n');
    fs::write(gitignore, updated)?;
    Ok(true)
}
