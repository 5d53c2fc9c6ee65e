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

/// Joins a sequence of displayable values into `[a, b, c]` form.
///
/// Shared by `Display` implementations and the DOT renderer so value lists
/// look the same everywhere.
pub fn join_values<T>(values: &[T]) -> String
where
    T: std::fmt::Display,
{
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::join_values;

    #[test]
    fn test_join_values_empty() {
        let values: [f64; 0] = [];
        assert_eq!(join_values(&values), "[]");
    }

    #[test]
    fn test_join_values_single() {
        assert_eq!(join_values(&[4.0]), "[4]");
    }

    #[test]
    fn test_join_values_many() {
        assert_eq!(join_values(&[1.0, 2.5, 3.0]), "[1, 2.5, 3]");
    }
}
