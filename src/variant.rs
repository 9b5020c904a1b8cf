//! Tagged unions whose variants each wrap one payload, and the operations
//! `#[derive(Variant)]` generates for them.
//!
//! Visiting requires the operation to apply to every payload with the same
//! output, otherwise the derived impl does not hold:
//!
//! ```compile_fail
//! use hetero::prelude::*;
//!
//! #[derive(Variant)]
//! enum Number {
//!   Small(u8),
//!   Text(String)
//! }
//!
//! struct Double;
//!
//! impl<'a> Func<&'a u8> for Double {
//!   type Output = u8;
//!
//!   fn call(&mut self, arg: &'a u8) -> u8 {
//!     arg * 2
//!   }
//! }
//!
//! // No `Func<&String>` for `Double`.
//! let _ = Number::Small(1).visit(Double);
//! ```
//!
//! The derive itself only accepts non-generic enums whose variants each
//! wrap exactly one payload, with no payload type repeated.
//!
//! ```compile_fail
//! use hetero::prelude::*;
//!
//! #[derive(Variant)]
//! struct Plain(u8);
//! ```
//!
//! ```compile_fail
//! use hetero::prelude::*;
//!
//! #[derive(Variant)]
//! enum Nothing {}
//! ```
//!
//! ```compile_fail
//! use hetero::prelude::*;
//!
//! #[derive(Variant)]
//! enum Boxed<T> {
//!   Item(T)
//! }
//! ```
//!
//! ```compile_fail
//! use hetero::prelude::*;
//!
//! #[derive(Variant)]
//! enum Pair {
//!   Both(u8, u16)
//! }
//! ```
//!
//! ```compile_fail
//! use hetero::prelude::*;
//!
//! #[derive(Variant)]
//! enum Flag {
//!   On(bool),
//!   Off
//! }
//! ```
//!
//! ```compile_fail
//! use hetero::prelude::*;
//!
//! #[derive(Variant)]
//! enum Twice {
//!   First(u8),
//!   Second(u8)
//! }
//! ```
//!
//! The same enums with the offending part fixed are accepted:
//!
//! ```
//! use hetero::prelude::*;
//!
//! #[derive(Variant)]
//! enum Once {
//!   First(u8),
//!   Second(u16)
//! }
//!
//! assert_eq!(Once::VARIANTS, ["First", "Second"]);
//! assert_eq!(Once::from(3u16).variant_name(), "Second");
//! ```

use thiserror::Error;

pub use hetero_macro::Variant;

pub trait Variant {
  /// Variant names in declaration order.
  const VARIANTS: &'static [&'static str];

  fn variant_name(&self) -> &'static str;
}

/// Dispatches `F` on a shared borrow of whichever payload is present.
pub trait Visit<F> {
  type Output;

  fn visit(&self, f: F) -> Self::Output;
}

/// Dispatches `F` on a mutable borrow of whichever payload is present.
pub trait VisitMut<F> {
  type Output;

  fn visit_mut(&mut self, f: F) -> Self::Output;
}

/// Returned when converting an enum into a payload type it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected variant `{expected}`, found `{found}`")]
pub struct VariantMismatch {
  pub expected: &'static str,
  pub found: &'static str,
}

/// Removes every element for which `pred` holds, keeping the remaining
/// elements in their original relative order. Returns how many were removed.
pub fn remove_where<T, P>(items: &mut Vec<T>, mut pred: P) -> usize
where
  P: FnMut(&T) -> bool,
{
  let before = items.len();
  items.retain(|item| !pred(item));
  let removed = before - items.len();
  tracing::debug!(removed, remaining = items.len(), "removed matching elements");
  removed
}
