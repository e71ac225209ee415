//! Utility matrix text format (`.txt` / `.csv`).
//!
//! Rating files are plain text, one user per line:
//!
//! ```text
//! 0.0          <- optional minimum rating
//! 5.0          <- optional maximum rating
//! 5 3 - 4      <- user 0, item 2 not rated
//! 4 - 2 3
//! ```
//!
//! - Cells are separated by whitespace or commas; a line containing a comma
//!   is read as CSV, so an empty field is an unrated cell.
//! - `-`, `?`, and `NA` mark an unrated cell.
//! - Blank lines and lines starting with `#` are ignored.
//!
//! # Example
//!
//! ```
//! use collabfilter::format::{HeaderMode, UtilityFile};
//!
//! let file = UtilityFile::parse("1\n5\n5 3 -\n4 - 2\n", HeaderMode::Auto).expect("valid file");
//! assert_eq!(file.min_rating, Some(1.0));
//! assert_eq!(file.max_rating, Some(5.0));
//! assert_eq!(file.matrix.shape(), (2, 3));
//! assert_eq!(file.matrix.get(0, 2), None);
//! ```

mod utility;

pub use utility::{render_completed, HeaderMode, UtilityFile};
