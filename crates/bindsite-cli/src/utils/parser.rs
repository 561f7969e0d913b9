use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Residue list is empty. Expected comma-separated integers (e.g., '45,46,102').")]
    EmptyResidueList,

    #[error("Invalid residue id '{0}'. Expected an integer sequence number.")]
    InvalidResidueId(String),
}

/// Parses a comma-separated residue id list (e.g., "45,46,102") into numbers.
pub fn parse_residue_list(input: &str) -> Result<Vec<isize>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyResidueList);
    }

    input
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<isize>()
                .map_err(|_| ParseError::InvalidResidueId(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_list() {
        assert_eq!(parse_residue_list("45,46,102"), Ok(vec![45, 46, 102]));
    }

    #[test]
    fn parses_a_single_id() {
        assert_eq!(parse_residue_list("7"), Ok(vec![7]));
    }

    #[test]
    fn negative_sequence_numbers_are_valid() {
        assert_eq!(parse_residue_list("-2,5"), Ok(vec![-2, 5]));
    }

    #[test]
    fn tolerates_incidental_whitespace() {
        assert_eq!(parse_residue_list(" 45, 46 "), Ok(vec![45, 46]));
    }

    #[test]
    fn rejects_non_integer_tokens() {
        assert_eq!(
            parse_residue_list("45,abc"),
            Err(ParseError::InvalidResidueId("abc".to_string()))
        );
    }

    #[test]
    fn rejects_empty_tokens() {
        assert_eq!(
            parse_residue_list("45,,46"),
            Err(ParseError::InvalidResidueId("".to_string()))
        );
    }

    #[test]
    fn rejects_an_empty_list() {
        assert_eq!(parse_residue_list(""), Err(ParseError::EmptyResidueList));
        assert_eq!(parse_residue_list("   "), Err(ParseError::EmptyResidueList));
    }
}
