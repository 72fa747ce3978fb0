//! One-level expansion of mixed scalar and list arguments.
//!
//! Reducers accept any mix of numbers and flat lists:
//!
//! ```text
//! (sum 1 [2 3] 4)      ;; visits 1, 2, 3, 4
//! (max [] 5 [7 -1])    ;; visits 5, 7, -1
//! ```
//!
//! Each visited element carries a [`Provenance`] so that a coercion failure
//! can point at the exact argument or list item.

use std::fmt;

use numeris_foundation::Value;

/// Where a flattened value came from.
///
/// Indices are zero-based; `Display` renders them one-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// A scalar argument at this position.
    Argument(usize),
    /// Item `j` of the list argument at position `i`.
    Item(usize, usize),
    /// A named parameter of a fixed-arity operation.
    Role(&'static str),
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(i) => write!(f, "argument {}", i + 1),
            Self::Item(i, j) => write!(f, "argument {} item {}", i + 1, j + 1),
            Self::Role(name) => write!(f, "{name}"),
        }
    }
}

/// Iterator over the elements of an argument list, expanding lists one level.
///
/// Order is left to right, and list items appear in place of their list.
/// A list nested inside a list is yielded as-is; coercing it fails.
pub struct Flatten<'a> {
    args: &'a [Value],
    outer: usize,
    inner: usize,
}

impl<'a> Flatten<'a> {
    /// Creates a flattening iterator over `args`.
    #[must_use]
    pub fn new(args: &'a [Value]) -> Self {
        Self {
            args,
            outer: 0,
            inner: 0,
        }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = (Provenance, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let arg = self.args.get(self.outer)?;
            match arg {
                Value::List(items) => {
                    if let Some(item) = items.get(self.inner) {
                        let provenance = Provenance::Item(self.outer, self.inner);
                        self.inner += 1;
                        return Some((provenance, item));
                    }
                    self.outer += 1;
                    self.inner = 0;
                }
                _ => {
                    let provenance = Provenance::Argument(self.outer);
                    self.outer += 1;
                    return Some((provenance, arg));
                }
            }
        }
    }
}
