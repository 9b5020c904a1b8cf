/// An operation that can be applied to an argument of type `Arg`.
///
/// A single operation usually implements `Func` for many argument types at
/// once through one generic impl, with the bound on that impl stating which
/// capability every argument must have:
///
/// ```
/// use hetero::Func;
/// use std::fmt::Display;
///
/// struct Show;
///
/// impl<'a, T: Display> Func<&'a T> for Show {
///   type Output = String;
///
///   fn call(&mut self, arg: &'a T) -> String {
///     arg.to_string()
///   }
/// }
///
/// assert_eq!(Show.call(&3), "3");
/// assert_eq!(Show.call(&"three"), "three");
/// ```
pub trait Func<Arg> {
  type Output;

  fn call(&mut self, arg: Arg) -> Self::Output;
}

impl<Arg, F> Func<Arg> for &mut F
where
  F: Func<Arg> + ?Sized,
{
  type Output = F::Output;

  fn call(&mut self, arg: Arg) -> Self::Output {
    (**self).call(arg)
  }
}

/// Lifts an ordinary closure into a [`Func`] over its single argument type.
///
/// Closures cannot be generic, so this only covers sequences whose elements
/// all share one type.
#[derive(Debug, Clone, Copy)]
pub struct Mono<F>(pub F);

impl<Arg, R, F> Func<Arg> for Mono<F>
where
  F: FnMut(Arg) -> R,
{
  type Output = R;

  fn call(&mut self, arg: Arg) -> R {
    (self.0)(arg)
  }
}
