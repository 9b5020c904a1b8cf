extern crate self as hetero;

mod func;
mod tuple;
mod variant;
mod test_utils;
pub mod animals;

pub use func::*;
pub use tuple::*;
pub use variant::*;
pub use test_utils::*;

pub mod prelude {
  pub use crate::func::{Func, Mono};
  pub use crate::tuple::{
    Append, AsMuts, AsRefs, Concat, ForEach, Map, MapArray, RemoveAt, Tuple, TupleExt,
  };
  pub use crate::variant::{remove_where, Variant, VariantMismatch, Visit, VisitMut};
}
