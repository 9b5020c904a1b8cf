//! Traits over fixed-arity heterogeneous sequences, i.e. tuples.
//!
//! Every trait here is implemented for tuples of arity 0 through 12 (16 with
//! the `large-tuples` feature) by [`impl_tuples!`]. Whether an operation can
//! be applied to every element is a trait bound, so a tuple holding an
//! element the operation does not support is rejected by the compiler:
//!
//! ```compile_fail
//! use hetero::prelude::*;
//! use hetero::animals::{Age, Dog};
//!
//! // `u32` is not an `Animal`, so `Age` cannot be applied to it.
//! let zoo = (Dog::new("Rex", 2), 5u32);
//! let _ = zoo.as_refs().map_array(Age);
//! ```
//!
//! The same goes for removing a position the tuple does not have:
//!
//! ```compile_fail
//! use hetero::prelude::*;
//!
//! let _ = (1, 2).remove::<2>();
//! ```
//!
//! An empty tuple has nothing to fix the array's item type, so it cannot be
//! mapped into an array:
//!
//! ```compile_fail
//! use hetero::prelude::*;
//!
//! let _: [u32; 0] = ().map_array(Mono(|x: u32| x));
//! ```

use hetero_macro::impl_tuples;

pub trait Tuple {
  const LEN: usize;
}

/// Borrows every element, `&(A, B)` to `(&A, &B)`.
pub trait AsRefs {
  type Refs<'a>
  where
    Self: 'a;

  fn as_refs(&self) -> Self::Refs<'_>;
}

/// Mutably borrows every element, `&mut (A, B)` to `(&mut A, &mut B)`.
pub trait AsMuts {
  type Muts<'a>
  where
    Self: 'a;

  fn as_muts(&mut self) -> Self::Muts<'_>;
}

/// Applies `F` to each element in order, for its side effects only.
pub trait ForEach<F> {
  fn for_each(self, f: F);
}

/// Applies `F` to each element in order, collecting the outputs into a tuple
/// of the same arity. The outputs may differ in type.
pub trait Map<F> {
  type Output;

  fn map(self, f: F) -> Self::Output;
}

/// Applies `F` to each element in order, collecting the outputs into an
/// array of the same arity. Every element must produce the same `Item`.
pub trait MapArray<F> {
  type Item;
  type Output;

  fn map_array(self, f: F) -> Self::Output;
}

/// Splits out the element at position `K`, keeping the others in order.
pub trait RemoveAt<const K: usize> {
  type Removed;
  type Rest;

  fn remove_at(self) -> (Self::Removed, Self::Rest);
}

pub trait Append<T> {
  type Output;

  fn append(self, last: T) -> Self::Output;
}

pub trait Concat<Other> {
  type Output;

  fn concat(self, other: Other) -> Self::Output;
}

pub trait TupleExt: Tuple + Sized {
  /// Drops the element at position `K`.
  fn remove<const K: usize>(self) -> <Self as RemoveAt<K>>::Rest
  where
    Self: RemoveAt<K>,
  {
    self.remove_at().1
  }

  /// Keeps only the element at position `K`.
  fn take<const K: usize>(self) -> <Self as RemoveAt<K>>::Removed
  where
    Self: RemoveAt<K>,
  {
    self.remove_at().0
  }
}

impl<T: Tuple> TupleExt for T {}

#[cfg(not(feature = "large-tuples"))]
impl_tuples!(12);

#[cfg(feature = "large-tuples")]
impl_tuples!(16);

#[cfg(test)]
mod test {
  use super::*;
  use crate::func::{Func, Mono};
  use crate::test_utils::assert_type_eq;
  use std::fmt::Display;

  struct Show;

  impl<T: Display> Func<T> for Show {
    type Output = String;

    fn call(&mut self, arg: T) -> String {
      arg.to_string()
    }
  }

  struct Widen;

  impl Func<u8> for Widen {
    type Output = u64;

    fn call(&mut self, arg: u8) -> u64 {
      arg as u64
    }
  }

  impl<'a> Func<&'a str> for Widen {
    type Output = String;

    fn call(&mut self, arg: &'a str) -> String {
      arg.to_owned()
    }
  }

  struct Log(Vec<String>);

  impl<T: Display> Func<T> for Log {
    type Output = ();

    fn call(&mut self, arg: T) {
      self.0.push(arg.to_string());
    }
  }

  struct Bump;

  impl<'a> Func<&'a mut u32> for Bump {
    type Output = ();

    fn call(&mut self, arg: &'a mut u32) {
      *arg += 1;
    }
  }

  impl<'a> Func<&'a mut String> for Bump {
    type Output = ();

    fn call(&mut self, arg: &'a mut String) {
      arg.push('!');
    }
  }

  #[test]
  fn len_test() {
    assert_eq!(<() as Tuple>::LEN, 0);
    assert_eq!(<(u8,) as Tuple>::LEN, 1);
    assert_eq!(<(u8, char, &str) as Tuple>::LEN, 3);
  }

  #[test]
  fn for_each_test() {
    let mut log = Log(vec![]);
    (1u8, 'b', "c").for_each(&mut log);
    assert_eq!(log.0, ["1", "b", "c"]);

    let mut log = Log(vec![]);
    ().for_each(&mut log);
    assert!(log.0.is_empty());
  }

  #[test]
  fn map_array_test() {
    let seq = (7u8, 'x', "y", 2.5f64);
    let shown = seq.as_refs().map_array(Show);
    assert_eq!(shown, ["7", "x", "y", "2.5"]);

    let squares = (1, 2, 3).map_array(Mono(|x: i32| x * x));
    assert_eq!(squares, [1, 4, 9]);
  }

  #[test]
  fn map_test() {
    let widened = (3u8, "three").map(Widen);
    assert_type_eq::<(u64, String), <(u8, &str) as Map<Widen>>::Output>();
    assert_eq!(widened, (3u64, String::from("three")));
  }

  #[test]
  fn as_muts_test() {
    let mut seq = (1u32, String::from("hi"), 41u32);
    seq.as_muts().for_each(Bump);
    assert_eq!(seq, (2, String::from("hi!"), 42));
  }

  #[test]
  fn remove_test() {
    assert_type_eq::<(u8, f64), <(u8, &str, f64) as RemoveAt<1>>::Rest>();
    assert_type_eq::<&str, <(u8, &str, f64) as RemoveAt<1>>::Removed>();

    let seq = (1u8, "two", 3.0f64);
    assert_eq!(seq.remove::<0>(), ("two", 3.0));
    assert_eq!(seq.remove::<1>(), (1, 3.0));
    assert_eq!(seq.remove::<2>(), (1, "two"));
    assert_eq!(seq.take::<1>(), "two");
    assert_eq!(RemoveAt::<0>::remove_at(('a',)), ('a', ()));
  }

  #[cfg(feature = "large-tuples")]
  #[test]
  fn large_tuples_test() {
    let seq = (0u8, 1u16, 2u32, 3u64, 4u8, 5u16, 6u32, 7u64,
      8u8, 9u16, 10u32, 11u64, 12u8, 13u16, 14u32, 15u64);
    fn len_of<T: Tuple>(_: &T) -> usize {
      T::LEN
    }

    assert_eq!(len_of(&seq), 16);

    let shown = seq.map_array(Show);
    assert_eq!(shown.len(), 16);
    assert_eq!(shown[0], "0");
    assert_eq!(shown[15], "15");

    let rest = seq.remove::<15>();
    assert_eq!(len_of(&rest), 15);
    assert_eq!(rest.append('x').map_array(Show)[15], "x");
    assert_eq!(seq.take::<13>(), 13u16);
  }

  #[test]
  fn append_concat_test() {
    let seq = ().append(1u8).append("two").append('3');
    assert_eq!(seq, (1, "two", '3'));
    assert_eq!(seq.concat((4.0f32,)), (1, "two", '3', 4.0));
    assert_eq!(().concat(()), ());
  }
}
