//! Interactive session implementation
//!
//! Reads one command per line and applies it to the in-memory catalog. The
//! session subscribes to both stores and echoes every change notification
//! after the command that caused it.

use super::Selector;
use crate::app::App;
use crate::render;
use anyhow::Result;
use literate_core::{Book, BookFilter, BookId, Section, StoreEvent, Viewport};
use std::io::{self, BufRead, IsTerminal, Write};
use tokio::sync::broadcast::{self, error::TryRecvError};

const HELP: &str = "\
Commands:
  list                      list books in the current section
  search [TEXT]             filter by title/author (no text clears)
  favorites on|off          show only favorites
  fav SEL                   toggle favorite
  read SEL                  toggle read
  del SEL                   delete a book
  add TITLE by AUTHOR       add a book at the front
  sample                    add the sample placeholder book
  show SEL                  book details
  share SEL                 share text
  region                    frame the map around the listed books
  map                       map markers
  section listings|library  switch section
  help                      this text
  quit                      leave
SEL is a book id or its position in the list.";

/// Run the session on stdin/stdout
pub fn shell(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    run_session(app, stdin.lock(), &mut stdout, prompt)
}

struct Session<'a> {
    app: &'a mut App,
    filter: BookFilter,
    viewport: Viewport,
    subscriptions: Vec<(Section, broadcast::Receiver<StoreEvent>)>,
}

/// Drive a session from any line source until EOF or `quit`
pub fn run_session<R, W>(app: &mut App, input: R, out: &mut W, prompt: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let subscriptions = Section::ALL
        .iter()
        .map(|&section| (section, app.catalog.section(section).subscribe()))
        .collect();
    let mut session = Session {
        app,
        filter: BookFilter::new(),
        viewport: Viewport::default(),
        subscriptions,
    };

    writeln!(
        out,
        "{} ({} books). Type 'help' for commands.",
        session.app.section,
        session.app.store().len()
    )?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "literate> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;

        let keep_going = session.execute(line.trim(), out)?;
        session.drain_events(out)?;
        if !keep_going {
            break;
        }
    }

    Ok(())
}

impl Session<'_> {
    /// Apply one command line. Returns `false` to end the session.
    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        tracing::debug!(command, rest, "Session command");

        match command {
            "" => {}
            "quit" | "exit" => return Ok(false),
            "help" => writeln!(out, "{}", HELP)?,
            "list" => self.list(out)?,
            "search" => {
                self.filter.query = (!rest.is_empty()).then(|| rest.to_string());
                self.list(out)?;
            }
            "favorites" => match rest {
                "on" => {
                    self.filter.favorites_only = true;
                    self.list(out)?;
                }
                "off" => {
                    self.filter.favorites_only = false;
                    self.list(out)?;
                }
                _ => writeln!(out, "Usage: favorites on|off")?,
            },
            "fav" => {
                if let Some(id) = self.select(rest, out)? {
                    self.app.store_mut().toggle_favorite(id);
                }
            }
            "read" => {
                if let Some(id) = self.select(rest, out)? {
                    self.app.store_mut().toggle_read(id);
                }
            }
            "del" | "delete" => {
                if let Some(id) = self.select(rest, out)? {
                    self.app.store_mut().delete(id);
                }
            }
            "add" => {
                if rest.is_empty() {
                    writeln!(out, "Usage: add TITLE by AUTHOR")?;
                } else {
                    let (title, author) = rest
                        .rsplit_once(" by ")
                        .map(|(t, a)| (t.trim(), a.trim()))
                        .unwrap_or((rest, "Unknown Author"));
                    self.app.store_mut().add(Book::new(title, author));
                }
            }
            "sample" => {
                self.app.store_mut().add_sample();
            }
            "show" => {
                if let Some(id) = self.select(rest, out)? {
                    if let Some(book) = self.app.store().get(id) {
                        render::book_detail(out, book, &self.app.cover(book))?;
                    }
                }
            }
            "share" => {
                if let Some(id) = self.select(rest, out)? {
                    if let Some(book) = self.app.store().get(id) {
                        writeln!(out, "{}", book.share_text())?;
                    }
                }
            }
            "region" => {
                let books = self.app.store().filtered(&self.filter);
                if !self.viewport.frame(books.iter().copied()) {
                    writeln!(out, "No located books; keeping the current view")?;
                }
                render::region(out, &self.viewport.region())?;
            }
            "map" => render::annotations(out, &self.app.store().annotations())?,
            "section" => match rest.parse::<Section>() {
                Ok(section) => {
                    self.app.section = section;
                    self.list(out)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            other => writeln!(out, "Unknown command: {} (try 'help')", other)?,
        }

        Ok(true)
    }

    fn list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.app.section)?;
        render::book_list(out, self.app.store(), &self.filter)
    }

    /// Resolve a selector against the current section, reporting misses
    fn select<W: Write>(&self, text: &str, out: &mut W) -> io::Result<Option<BookId>> {
        let id = text
            .parse::<Selector>()
            .ok()
            .and_then(|selector| selector.resolve(self.app.store()));
        if id.is_none() {
            writeln!(out, "No such book")?;
        }
        Ok(id)
    }

    fn drain_events<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for (section, rx) in &mut self.subscriptions {
            loop {
                match rx.try_recv() {
                    Ok(event) => writeln!(out, "* {}: {}", section, event)?,
                    Err(TryRecvError::Lagged(missed)) => {
                        writeln!(out, "* {}: {} changes not shown", section, missed)?
                    }
                    Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                }
            }
        }
        Ok(())
    }
}
