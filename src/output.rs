use std::io::Write;

use crate::error::Result;
use crate::models::FilmEntry;

/// Listing order. Profile pages list the most recent credits first, so
/// `Descending` is the page's own order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    pub fn from_descending_flag(descending: bool) -> Self {
        if descending {
            Order::Descending
        } else {
            Order::Ascending
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }
}

/// Reorders movies parsed in page order.
pub fn order_movies(mut movies: Vec<FilmEntry>, order: Order) -> Vec<FilmEntry> {
    if order == Order::Ascending {
        movies.reverse();
    }
    movies
}

pub fn write_movies<W: Write>(output: &mut W, movies: &[FilmEntry]) -> Result<()> {
    writeln!(output, "Movies:")?;
    for (i, movie) in movies.iter().enumerate() {
        writeln!(output, "{}) {}, {}", i + 1, movie.title, movie.year)?;
    }
    Ok(())
}
