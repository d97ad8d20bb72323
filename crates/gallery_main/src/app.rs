//! Command-line front end
//!
//! Thin presentation layer over the registry: each command rebuilds the
//! display list from the persisted state, applies one operation, and prints
//! a short result message.

use anyhow::Result;
use gallery_core::{Gallery, GalleryError, SourceRef};

pub fn run(gallery: &'static Gallery) -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("list") => cmd_list(gallery),
        Some("add") => match args.get(1) {
            Some(source) => cmd_add(gallery, source),
            None => usage(),
        },
        Some("remove") => match args.get(1) {
            Some(name) => cmd_remove(gallery, name),
            None => usage(),
        },
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            usage()
        }
    }
}

fn usage() -> Result<()> {
    eprintln!("Usage: shoebox [list | add <file> | remove <name>]");
    Ok(())
}

/// Print one line per known image, newest first
fn cmd_list(gallery: &'static Gallery) -> Result<()> {
    let entries = match gallery.registry.load() {
        Ok(entries) => entries,
        Err(e) => return notify(e),
    };

    if entries.is_empty() {
        println!("No images.");
        return Ok(());
    }

    for entry in entries {
        println!("{}  {}", entry.name, entry.display_path);
    }
    Ok(())
}

fn cmd_add(gallery: &'static Gallery, source: &str) -> Result<()> {
    if let Err(e) = gallery.registry.load() {
        return notify(e);
    }

    match gallery.registry.register(&SourceRef::Content(source.to_string())) {
        Ok(entry) => {
            println!("Image saved as {}.", entry.name);
            Ok(())
        }
        Err(e) => notify(e),
    }
}

fn cmd_remove(gallery: &'static Gallery, name: &str) -> Result<()> {
    if let Err(e) = gallery.registry.load() {
        return notify(e);
    }

    match gallery.registry.remove_named(name) {
        Ok(()) => {
            println!("File removed.");
            Ok(())
        }
        Err(e) => notify(e),
    }
}

/// Surface a recoverable failure as a short message; anything else aborts
fn notify(e: GalleryError) -> Result<()> {
    if e.is_recoverable() {
        tracing::error!("{}", e);
        println!("{}", e.user_message());
        Ok(())
    } else {
        Err(e.into())
    }
}
