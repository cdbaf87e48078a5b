// browse.rs
//
// Terminal front-end for the search engine. Each stdin line is an input
// event: free text goes through the debouncer, `:`-commands flip badges and
// apply immediately.

use crate::domain::{Listing, Purpose};
use crate::errors::ServerError;
use crate::search::{Debouncer, ResultView, SearchConfig, SearchSession};
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

const HELP: &str = "type to search, :all :sale :rental change purpose, :featured toggles, :quit exits";

#[derive(Debug, PartialEq)]
enum Input {
    Text(String),
    Badge(Option<Purpose>),
    ToggleFeatured,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        ":all" => Input::Badge(None),
        ":sale" => Input::Badge(Some(Purpose::Sale)),
        ":rental" => Input::Badge(Some(Purpose::Rental)),
        ":featured" => Input::ToggleFeatured,
        ":help" | ":?" => Input::Help,
        ":quit" | ":q" => Input::Quit,
        _ => Input::Text(line.to_string()),
    }
}

pub fn run(listings: Arc<Vec<Listing>>, config: &SearchConfig) -> Result<(), ServerError> {
    info!(count = listings.len(), "browsing catalogue");
    println!("{HELP}");

    let session = Arc::new(Mutex::new(SearchSession::new(listings)));
    print_session(&session);

    let debounced = Arc::clone(&session);
    let debouncer = Debouncer::new(config.debounce, move |text: String| {
        match debounced.lock() {
            Ok(mut s) => {
                s.set_query(&text);
                print_view(&s.results());
            }
            Err(_) => warn!("search session lock poisoned, dropping input"),
        }
    });

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| {
            error!(error = %e, "failed to read from stdin");
            ServerError::InternalError
        })?;

        match parse_input(&line) {
            Input::Text(text) => debouncer.push(text),
            Input::Badge(badge) => {
                with_session(&session, |s| s.set_badge(badge))?;
                print_session(&session);
            }
            Input::ToggleFeatured => {
                with_session(&session, SearchSession::toggle_featured)?;
                print_session(&session);
            }
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
        }
    }

    // Flushes the last pending query.
    drop(debouncer);
    Ok(())
}

fn with_session<F>(session: &Mutex<SearchSession>, f: F) -> Result<(), ServerError>
where
    F: FnOnce(&mut SearchSession),
{
    let mut guard = session.lock().map_err(|_| ServerError::InternalError)?;
    f(&mut *guard);
    Ok(())
}

fn print_session(session: &Mutex<SearchSession>) {
    if let Ok(s) = session.lock() {
        print_view(&s.results());
    }
}

fn print_view(view: &ResultView<'_>) {
    let mut out = io::stdout().lock();
    let _ = out.write_all(render_text(view).as_bytes());
    let _ = out.flush();
}

pub fn render_text(view: &ResultView<'_>) -> String {
    let mut out = format!("\n== {} ({}) ==\n", view.label, view.listings.len());
    if view.used_fallback {
        out.push_str("No exact match. Featured listings:\n");
    }
    if view.listings.is_empty() {
        out.push_str("  (nothing here)\n");
    }
    for l in &view.listings {
        let star = if l.featured { "*" } else { " " };
        out.push_str(&format!(
            "{star} #{:<4} {:<40} {:<30} {}\n",
            l.id,
            l.title,
            l.location_label(),
            l.price_label()
        ));
    }
    out
}
