use hetero::prelude::*;
use hetero::animals::*;

struct Bark;

impl<'a, A: Animal> Func<&'a A> for Bark {
  type Output = ();

  fn call(&mut self, animal: &'a A) {
    println!("{}", animal.sound());
  }
}

fn main() {
  let zoo = ().append(Dog::new("Rex", 2))
    .append(Cat::new("Tom", 3))
    .append(Dog::new("Fido", 5));

  zoo.as_refs().for_each(Bark);
}
