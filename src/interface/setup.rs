use std::io::{BufRead, Write};

use crate::config::MAX_DIMENSION;
use crate::error::SetupError;

pub const WELCOME: &str = "\nWelcome to multidimensional Tic-Tac-Toe!\n\n\
The board will contain (n+1)^n spaces for n dimensions.\n\
For even dimensions starting with the 4th, the center space can be made unplayable.\n\
Claim n+1 spaces in a row to win!\n";

/// Whether a center lock question applies to this dimension count.
pub fn offers_center_lock(dimension: usize) -> bool {
    dimension > 2 && dimension % 2 == 0
}

/// Settles the center lock from a flag or config value. Returns `None` when
/// the dimension has a lockable center and nobody has chosen yet. A lock
/// requested for any other dimension is dropped with a warning.
pub fn settled_center_lock(dimension: usize, requested: Option<bool>) -> Option<bool> {
    if offers_center_lock(dimension) {
        return requested;
    }
    if requested == Some(true) {
        log::warn!(
            "center lock ignored for {} dimensions: only even dimensions above 2 have a lockable center",
            dimension
        );
    }
    Some(false)
}

/// Asks for the dimension count. Answers below 2 are raised to 2 and answers
/// above the supported maximum are lowered to it.
pub fn prompt_dimension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_attempts: usize,
) -> Result<usize, SetupError> {
    let answer = ask(
        input,
        output,
        max_attempts,
        "dimension count",
        "How many dimensions of Tic-Tac-Toe would you like to attempt? ",
        "A whole number is required.",
        |answer| answer.parse::<usize>().ok(),
    )?;

    if answer < 2 {
        writeln!(
            output,
            "Tic-Tac-Toe requires at least 2 dimensions and you chose {}, so we will use 2.",
            answer
        )?;
        return Ok(2);
    }
    if answer > MAX_DIMENSION {
        writeln!(
            output,
            "{} dimensions is more than this board can handle, so we will use {}.",
            answer, MAX_DIMENSION
        )?;
        return Ok(MAX_DIMENSION);
    }
    Ok(answer)
}

/// Asks whether the center stays selectable. Returns `true` when it should be locked.
pub fn prompt_center_lock<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_attempts: usize,
) -> Result<bool, SetupError> {
    ask(
        input,
        output,
        max_attempts,
        "center lock",
        "Do you want the center most space selectable (Y/N)? ",
        "Y/N type input is required.",
        |answer| match answer {
            "Y" => Some(false),
            "N" => Some(true),
            _ => None,
        },
    )
}

fn ask<R, W, T>(
    input: &mut R,
    output: &mut W,
    max_attempts: usize,
    question: &'static str,
    prompt: &str,
    hint: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, SetupError>
where
    R: BufRead,
    W: Write,
{
    for attempt in 1..=max_attempts {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        if attempt < max_attempts {
            writeln!(
                output,
                "{} Remaining attempts: {}; failure will result in termination.",
                hint,
                max_attempts - attempt
            )?;
        }
    }
    Err(SetupError::AttemptsExhausted {
        question,
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimension_from(answers: &str) -> Result<usize, SetupError> {
        prompt_dimension(&mut answers.as_bytes(), &mut Vec::<u8>::new(), 3)
    }

    #[test]
    fn test_dimension_accepts_number() {
        assert_eq!(dimension_from("4\n").unwrap(), 4);
    }

    #[test]
    fn test_dimension_retries_then_accepts() {
        assert_eq!(dimension_from("four\n\n3\n").unwrap(), 3);
    }

    #[test]
    fn test_dimension_gives_up_after_attempts() {
        assert!(matches!(
            dimension_from("a\nb\nc\n5\n"),
            Err(SetupError::AttemptsExhausted { attempts: 3, .. })
        ));
    }

    #[test]
    fn test_dimension_is_clamped() {
        assert_eq!(dimension_from("1\n").unwrap(), 2);
        assert_eq!(dimension_from("30\n").unwrap(), MAX_DIMENSION);
    }

    #[test]
    fn test_end_of_input_gives_up() {
        assert!(matches!(
            dimension_from(""),
            Err(SetupError::AttemptsExhausted { .. })
        ));
    }

    #[test]
    fn test_center_lock_answers() {
        let mut out = Vec::new();
        assert!(prompt_center_lock(&mut "N\n".as_bytes(), &mut out, 3).unwrap());
        assert!(!prompt_center_lock(&mut "maybe\nY\n".as_bytes(), &mut out, 3).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Y/N type input is required. Remaining attempts: 2"));
    }

    #[test]
    fn test_center_lock_wants_capital_letters() {
        let mut out = Vec::<u8>::new();
        assert!(prompt_center_lock(&mut "n\ny\nN\n".as_bytes(), &mut out, 3).unwrap());
        assert!(matches!(
            prompt_center_lock(&mut "y\nn\nyes\n".as_bytes(), &mut out, 3),
            Err(SetupError::AttemptsExhausted { attempts: 3, .. })
        ));
    }

    #[test]
    fn test_settled_center_lock() {
        assert_eq!(settled_center_lock(4, None), None);
        assert_eq!(settled_center_lock(4, Some(true)), Some(true));
        assert_eq!(settled_center_lock(6, Some(false)), Some(false));
        assert_eq!(settled_center_lock(3, Some(true)), Some(false));
        assert_eq!(settled_center_lock(2, None), Some(false));
    }

    #[test]
    fn test_center_lock_offered_for_even_dimensions_above_two() {
        assert!(!offers_center_lock(2));
        assert!(!offers_center_lock(3));
        assert!(offers_center_lock(4));
        assert!(offers_center_lock(6));
    }
}
