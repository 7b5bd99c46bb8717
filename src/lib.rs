// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use application::{NotesService, Page};
use domain::{Note, NoteId};
use infrastructure::{Config, ContentRenderer, HttpNotesService};
use ports::{Alert, ConsoleAlert};
use tracing::{debug, info};

use crate::cli::args::{Args, Command};
use crate::constants::LIST_EXCERPT_CHARS;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notedeck with arguments");

    // Initialize infrastructure
    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        debug!(%base_url, "Using base URL from command line");
        config.service.base_url = base_url;
    }
    let service = HttpNotesService::new(&config.service)?;
    info!(base_url = service.base_url(), "Using notes service");

    let stdout = std::io::stdout();
    execute(
        args.command,
        &config,
        Arc::new(service),
        Arc::new(ConsoleAlert),
        &mut stdout.lock(),
    )
    .await
}

/// Mount a page against `service` and carry out one command on it.
pub async fn execute(
    command: Command,
    config: &Config,
    service: Arc<dyn NotesService>,
    alert: Arc<dyn Alert>,
    out: &mut impl Write,
) -> Result<()> {
    let mut page = Page::mount(service, alert).await;

    match command {
        Command::Show { output } => {
            let html = page.render();
            let mut renderer = ContentRenderer::new();
            match output {
                Some(path) => {
                    renderer.write_to(&path, &html)?;
                    writeln!(out, "Wrote {}", path.display())?;
                }
                None if config.render.open_browser => {
                    let path = renderer.create_temp_file(&html)?;
                    renderer.open_in_browser(&path)?;
                }
                None => write!(out, "{html}")?,
            }
        }
        Command::List { archived, json } => {
            let notes = if archived {
                page.archive().state().notes().to_vec()
            } else {
                page.active().state().notes().to_vec()
            };
            if json {
                let rendered =
                    serde_json::to_string_pretty(&notes).context("Failed to serialize notes")?;
                writeln!(out, "{rendered}")?;
            } else {
                write_notes(out, &notes)?;
            }
        }
        Command::Add { title, body } => {
            let form = page.form_mut();
            form.set_title(title);
            form.set_body(body);
            let pending = form.submit()?;
            form.settle(pending)
                .await
                .context("Note was not created")?;
            write_page_summary(out, &page)?;
        }
        Command::Archive { note_id } => {
            let refresh = page
                .active()
                .archive_note(&NoteId::new(note_id))
                .await
                .context("Note was not archived")?;
            refresh.wait().await.context("Archive list did not refresh")?;
            write_page_summary(out, &page)?;
        }
        Command::Unarchive { note_id } => {
            let refresh = page
                .archive()
                .unarchive_note(&NoteId::new(note_id))
                .await
                .context("Note was not unarchived")?;
            refresh.wait().await.context("Active list did not refresh")?;
            write_page_summary(out, &page)?;
        }
        Command::Delete { note_id, archived } => {
            let id = NoteId::new(note_id);
            let deleted = if archived {
                page.archive().delete_archived_note(&id).await
            } else {
                page.active().delete_note(&id).await
            };
            deleted.context("Note was not deleted")?;
            write_page_summary(out, &page)?;
        }
    }

    Ok(())
}

fn write_notes(out: &mut impl Write, notes: &[Note]) -> Result<()> {
    for note in notes {
        writeln!(
            out,
            "{}\t{}\t{}",
            note.id,
            note.title,
            util::text::excerpt(&note.body, LIST_EXCERPT_CHARS)
        )?;
    }
    Ok(())
}

fn write_page_summary(out: &mut impl Write, page: &Page) -> Result<()> {
    let active = page.active().state();
    let archived = page.archive().state();
    writeln!(out, "Active notes ({})", active.notes().len())?;
    write_notes(out, active.notes())?;
    writeln!(out, "Archived notes ({})", archived.notes().len())?;
    write_notes(out, archived.notes())?;
    Ok(())
}
