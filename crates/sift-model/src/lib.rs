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

//! Problem description for feature subset selection.
//!
//! This crate holds everything the search engine consumes but does not own:
//! the validated feature set with its target size, the `Selection` value
//! reported back to callers, search-space accounting, typed index
//! definitions, and parsing of textual feature lists.
//!
//! Module map
//! - `model`: `FeatureModel` (validated features + target size),
//!   `ModelError`, `Complexity`.
//! - `selection`: the winning subset and its criterion score.
//! - `index`: typed indices for feature positions.
//! - `parse`: comma-separated feature list parsing.

pub mod index;
pub mod model;
pub mod parse;
pub mod selection;
