//! Counts the words between the nearest occurrences of two words in a text.
//!
//! ```
//! use word_distance::distance::find_shortest_distance;
//!
//! let text = "We do value and reward motivation in our development team.";
//! assert_eq!(find_shortest_distance("motivation", "development", text), Some(2));
//! assert_eq!(find_shortest_distance("foo", "bar", ""), None);
//! ```

pub mod distance;
pub mod tokenizer;
