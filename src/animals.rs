//! Example payloads: a couple of animals, the tagged union holding either,
//! and the polymorphic operations the demos apply to them.

use crate::func::Func;
use crate::variant::Variant;

pub trait Animal {
  fn name(&self) -> &str;
  fn age(&self) -> u32;
  fn sound(&self) -> &'static str;
  /// Ages saturate at `u32::MAX`.
  fn grow_older(&mut self, years: u32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
  name: String,
  age: u32,
}

impl Dog {
  pub fn new(name: impl Into<String>, age: u32) -> Self {
    Dog { name: name.into(), age }
  }
}

impl Animal for Dog {
  fn name(&self) -> &str {
    &self.name
  }

  fn age(&self) -> u32 {
    self.age
  }

  fn sound(&self) -> &'static str {
    "Woof"
  }

  fn grow_older(&mut self, years: u32) {
    self.age = self.age.saturating_add(years);
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
  name: String,
  age: u32,
}

impl Cat {
  pub fn new(name: impl Into<String>, age: u32) -> Self {
    Cat { name: name.into(), age }
  }
}

impl Animal for Cat {
  fn name(&self) -> &str {
    &self.name
  }

  fn age(&self) -> u32 {
    self.age
  }

  fn sound(&self) -> &'static str {
    "Meow"
  }

  fn grow_older(&mut self, years: u32) {
    self.age = self.age.saturating_add(years);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Variant)]
pub enum Creature {
  Dog(Dog),
  Cat(Cat),
}

pub struct Speak;

impl<'a, A: Animal> Func<&'a A> for Speak {
  type Output = &'static str;

  fn call(&mut self, animal: &'a A) -> &'static str {
    animal.sound()
  }
}

pub struct Name;

impl<'a, A: Animal> Func<&'a A> for Name {
  type Output = String;

  fn call(&mut self, animal: &'a A) -> String {
    animal.name().to_owned()
  }
}

pub struct Age;

impl<'a, A: Animal> Func<&'a A> for Age {
  type Output = u32;

  fn call(&mut self, animal: &'a A) -> u32 {
    animal.age()
  }
}

/// Ages every animal it is applied to by the given number of years.
pub struct GrowOlder(pub u32);

impl<'a, A: Animal> Func<&'a mut A> for GrowOlder {
  type Output = ();

  fn call(&mut self, animal: &'a mut A) {
    animal.grow_older(self.0);
    tracing::trace!(name = animal.name(), age = animal.age(), "grew older");
  }
}
