pub mod cli;
pub mod config;
pub mod disambiguation;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod pipeline;
pub mod scrapers;
pub mod storage;
pub mod utils;

pub use error::{Error, Result, SelectionError};
