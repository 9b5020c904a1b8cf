pub trait TypeEquals<T> {}

impl<T> TypeEquals<T> for T {}

/// Only compiles when `T1` and `T2` are the same type.
pub fn assert_type_eq<T1, T2>()
where
  T1: TypeEquals<T2>,
{
}
