use std::io::{BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};
use tracing::{debug, info};

use crate::error::{Error, Result, SelectionError};
use crate::models::ActorCandidate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disambiguation {
    NotFound,
    Unique(ActorCandidate),
    Ambiguous(Vec<ActorCandidate>),
}

/// Keeps the candidates whose name equals `search_term` ignoring case.
/// Substrings and near misses never match.
pub fn disambiguate(candidates: Vec<ActorCandidate>, search_term: &str) -> Disambiguation {
    let mut matches: Vec<ActorCandidate> = candidates
        .into_iter()
        .filter(|candidate| candidate.matches_name(search_term))
        .collect();

    debug!("{} candidates named '{}'", matches.len(), search_term);

    match matches.len() {
        0 => Disambiguation::NotFound,
        1 => Disambiguation::Unique(matches.remove(0)),
        _ => Disambiguation::Ambiguous(matches),
    }
}

/// Parses a 1-based selection into a 0-based index below `count`.
pub fn parse_selection(input: &str, count: usize) -> std::result::Result<usize, SelectionError> {
    let trimmed = input.trim();
    let selection: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => SelectionError::OutOfRange {
            selection: i64::MAX,
            max: count,
        },
        IntErrorKind::NegOverflow => SelectionError::OutOfRange {
            selection: i64::MIN,
            max: count,
        },
        _ => SelectionError::NotANumber(trimmed.to_string()),
    })?;

    if selection < 1 || selection as u64 > count as u64 {
        return Err(SelectionError::OutOfRange {
            selection,
            max: count,
        });
    }

    Ok(selection as usize - 1)
}

pub fn write_choices<W: Write>(
    output: &mut W,
    matches: &[ActorCandidate],
    search_term: &str,
) -> Result<()> {
    writeln!(output, "Found {} actors with name {}", matches.len(), search_term)?;
    writeln!(output, "Please select one actor by entering the corresponding number:\n")?;

    for (i, actor) in matches.iter().enumerate() {
        writeln!(output, "{}) {}", i + 1, actor.name)?;
        if let Some(known_for) = &actor.known_for {
            writeln!(output, "   Known as")?;
            writeln!(output, "   {} in {}", known_for.role, known_for.work)?;
        }
        writeln!(output)?;
    }

    Ok(())
}

/// Lists `matches` and reads selections until a valid one arrives.
///
/// Invalid input is reported on `output` and asked for again. Running out of
/// input fails with [`Error::PromptClosed`].
pub fn prompt_selection<R: BufRead, W: Write>(
    mut matches: Vec<ActorCandidate>,
    search_term: &str,
    input: &mut R,
    output: &mut W,
) -> Result<ActorCandidate> {
    write_choices(output, &matches, search_term)?;

    loop {
        write!(output, "Selection: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::PromptClosed);
        }

        match parse_selection(&line, matches.len()) {
            Ok(index) => {
                let actor = matches.swap_remove(index);
                info!("Selected {} ({})", actor.name, actor.profile_ref);
                return Ok(actor);
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// Picks the actor for `search_term`, prompting only when several share the
/// name. `Ok(None)` means nobody matched.
pub fn select<R: BufRead, W: Write>(
    candidates: Vec<ActorCandidate>,
    search_term: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<ActorCandidate>> {
    match disambiguate(candidates, search_term) {
        Disambiguation::NotFound => Ok(None),
        Disambiguation::Unique(actor) => Ok(Some(actor)),
        Disambiguation::Ambiguous(matches) => {
            prompt_selection(matches, search_term, input, output).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn willises() -> Vec<ActorCandidate> {
        vec![
            ActorCandidate::new("Bruce Willis", "/name/nm0000246/")
                .with_known_for("Actor", "Die Hard"),
            ActorCandidate::new("Bruce Willis", "/name/nm4481332/"),
            ActorCandidate::new("Rumer Willis", "/name/nm0000981/"),
        ]
    }

    #[test]
    fn no_match_is_not_found() {
        assert_eq!(
            disambiguate(willises(), "bruce"),
            Disambiguation::NotFound
        );
    }

    #[test]
    fn single_match_is_selected_without_prompting() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let actor = select(willises(), "rumer willis", &mut input, &mut output).unwrap();

        assert_eq!(actor.map(|a| a.profile_ref.0), Some("/name/nm0000981/".to_string()));
        assert!(output.is_empty());
    }

    #[test]
    fn not_found_touches_no_io() {
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut output = Vec::new();

        let actor = select(willises(), "john mcclane", &mut input, &mut output).unwrap();

        assert_eq!(actor, None);
        assert!(output.is_empty());
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn parse_selection_distinguishes_errors() {
        assert_eq!(parse_selection("2\n", 3), Ok(1));
        assert_eq!(parse_selection(" 1 ", 1), Ok(0));
        assert_eq!(
            parse_selection("two", 3),
            Err(SelectionError::NotANumber("two".to_string()))
        );
        assert_eq!(
            parse_selection("0", 3),
            Err(SelectionError::OutOfRange { selection: 0, max: 3 })
        );
        assert_eq!(
            parse_selection("4", 3),
            Err(SelectionError::OutOfRange { selection: 4, max: 3 })
        );
        assert_eq!(
            parse_selection("-1", 3),
            Err(SelectionError::OutOfRange { selection: -1, max: 3 })
        );
    }

    #[test]
    fn oversized_numbers_are_out_of_range() {
        assert!(matches!(
            parse_selection("99999999999999999999", 2),
            Err(SelectionError::OutOfRange { max: 2, .. })
        ));
        assert!(matches!(
            parse_selection("-99999999999999999999", 2),
            Err(SelectionError::OutOfRange { max: 2, .. })
        ));
        assert_eq!(
            parse_selection("", 2),
            Err(SelectionError::NotANumber(String::new()))
        );
    }

    #[test]
    fn ambiguous_match_reprompts_until_valid() {
        let mut input = Cursor::new(b"abc\n7\n2\n".to_vec());
        let mut output = Vec::new();

        let actor = select(willises(), "Bruce Willis", &mut input, &mut output)
            .unwrap()
            .unwrap();

        assert_eq!(actor.profile_ref.0, "/name/nm4481332/");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Found 2 actors with name Bruce Willis\n\
             Please select one actor by entering the corresponding number:\n\
             \n\
             1) Bruce Willis\n\
             \x20  Known as\n\
             \x20  Actor in Die Hard\n\
             \n\
             2) Bruce Willis\n\
             \n\
             Selection: Ensure your selection is a number\n\
             Selection: Ensure your selection is between 1 and 2\n\
             Selection: "
        );
    }

    #[test]
    fn closed_input_stops_the_prompt() {
        let mut input = Cursor::new(b"nope\n".to_vec());
        let mut output = Vec::new();

        let result = select(willises(), "bruce willis", &mut input, &mut output);

        assert!(matches!(result, Err(Error::PromptClosed)));
    }
}
