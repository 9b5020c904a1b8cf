use hetero::prelude::*;
use hetero::animals::*;

fn main() {
  let zoo = (Dog::new("Rex", 2), Cat::new("Tom", 3), Dog::new("Fido", 5));
  let (cat, dogs) = RemoveAt::<1>::remove_at(zoo);

  println!("removed {} the cat", cat.name());
  println!("{}", dogs.as_refs().map_array(Speak).join(" "));
  println!("{}", dogs.as_refs().map_array(Name).join(" "));
}
