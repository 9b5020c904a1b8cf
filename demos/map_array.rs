use hetero::prelude::*;
use hetero::animals::*;

fn main() {
  let zoo = ().append(Dog::new("Rex", 2))
    .append(Cat::new("Tom", 3))
    .append(Dog::new("Fido", 5));

  println!("{}", zoo.as_refs().map_array(Speak).join(" "));

  print!("Ages: ");
  for age in zoo.as_refs().map_array(Age) {
    print!("{} ", age);
  }
  println!();

  println!("{}", zoo.as_refs().map_array(Name).join(" "));
}
