// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Parsing of textual feature lists.
//!
//! Turns a comma-separated list such as `1,2,3,4,5` into a sorted value
//! vector. Tokens are trimmed before parsing so `1, 2, 3` is accepted.
//! Parsing stops at the first bad token and reports it verbatim; semantic
//! validation (finiteness, duplicates, target size) is the model's job.

use sift_core::num::{CriterionValue, total_order};
use std::str::FromStr;

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFeatureError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "f64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseFeatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse feature token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseFeatureError {}

/// Parses a comma-separated feature list into a sorted value vector.
///
/// Returns the values sorted ascending. An empty input yields an empty
/// vector (rejected later by model validation); an empty token between
/// commas is a parse error.
pub fn parse_feature_list<T>(input: &str) -> Result<Vec<T>, ParseFeatureError>
where
    T: CriterionValue + FromStr,
{
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        let value = token.parse::<T>().map_err(|_| ParseFeatureError {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        })?;
        values.push(value);
    }

    values.sort_by(|a, b| total_order(*a, *b));
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::{ParseFeatureError, parse_feature_list};

    #[test]
    fn test_parse_sorted_output() {
        let values = parse_feature_list::<f64>("5,1,3,2,4").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_parse_accepts_whitespace() {
        let values = parse_feature_list::<f64>(" 1, 2 ,3 ").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_accepts_fractional_and_negative() {
        let values = parse_feature_list::<f64>("-1.5,2.25,0").unwrap();
        assert_eq!(values, vec![-1.5, 0.0, 2.25]);
    }

    #[test]
    fn test_parse_empty_input_yields_empty_vector() {
        let values = parse_feature_list::<f64>("").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_feature_list::<f64>("1,two,3").unwrap_err();
        assert_eq!(
            err,
            ParseFeatureError {
                token: "two".to_string(),
                type_name: "f64",
            }
        );
        assert_eq!(
            err.to_string(),
            "Could not parse feature token 'two' as type f64"
        );
    }

    #[test]
    fn test_parse_rejects_empty_token() {
        let err = parse_feature_list::<f64>("1,,3").unwrap_err();
        assert_eq!(err.token, "");
    }
}
