use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use crate::disambiguation::select;
use crate::error::{Error, Result};
use crate::models::{ActorCandidate, FilmEntry, FilmographyReport};
use crate::output::{order_movies, write_movies, Order};
use crate::parsers::{parse_candidates, parse_filmography};
use crate::scrapers::PageSource;
use crate::storage::Storage;

/// Everything one run needs from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub query: String,
    pub order: Order,
    pub save_to_disk: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotFound,
    Listed {
        actor: ActorCandidate,
        movies: Vec<FilmEntry>,
        saved_to: Option<PathBuf>,
    },
}

/// Search, pick an actor, fetch and parse their credits, then print them
/// (and save them when asked).
///
/// Fails fast: whatever was already written to `output` stays written.
/// Asking to save without a `storage` fails before anything is fetched.
pub async fn run<S, R, W>(
    source: &S,
    storage: Option<&dyn Storage>,
    options: &RunOptions,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome>
where
    S: PageSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let storage = match (options.save_to_disk, storage) {
        (true, None) => return Err(Error::StorageUnavailable),
        (true, Some(storage)) => Some(storage),
        (false, _) => None,
    };

    let search_html = source.search_page(&options.query).await?;
    let candidates = parse_candidates(&search_html)?;
    info!("Found {} search results for '{}'", candidates.len(), options.query);

    let actor = match select(candidates, &options.query, input, output)? {
        Some(actor) => actor,
        None => {
            writeln!(output, "No actors found named {}", options.query)?;
            return Ok(Outcome::NotFound);
        }
    };

    let profile_html = source.profile_page(&actor.profile_ref).await?;
    let movies = order_movies(parse_filmography(&profile_html)?, options.order);
    info!("Found {} movies for {}", movies.len(), actor.name);

    write_movies(output, &movies)?;

    let saved_to = match storage {
        Some(storage) => {
            let path = storage.save(&FilmographyReport::new(&actor, &movies)).await?;
            writeln!(output, "Saved filmography to {}", path.display())?;
            Some(path)
        }
        None => None,
    };

    Ok(Outcome::Listed {
        actor,
        movies,
        saved_to,
    })
}
