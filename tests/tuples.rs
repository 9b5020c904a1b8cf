use hetero::*;
use hetero::animals::*;

fn zoo() -> (Dog, Cat, Dog) {
  ().append(Dog::new("Rex", 2))
    .append(Cat::new("Tom", 3))
    .append(Dog::new("Fido", 5))
}

struct Chorus(Vec<&'static str>);

impl<'a, A: Animal> Func<&'a A> for Chorus {
  type Output = ();

  fn call(&mut self, animal: &'a A) {
    self.0.push(animal.sound());
  }
}

#[test]
fn for_each_test() {
  let zoo = zoo();
  let mut chorus = Chorus(vec![]);
  zoo.as_refs().for_each(&mut chorus);
  assert_eq!(chorus.0, ["Woof", "Meow", "Woof"]);
}

#[test]
fn map_array_test() {
  let zoo = zoo();
  assert_eq!(zoo.as_refs().map_array(Age), [2, 3, 5]);
  assert_eq!(zoo.as_refs().map_array(Name), ["Rex", "Tom", "Fido"]);
  assert_type_eq::<[u32; 3], <(&Dog, &Cat, &Dog) as MapArray<Age>>::Output>();
}

#[test]
fn map_matches_elementwise_test() {
  let zoo = zoo();
  let sounds = zoo.as_refs().map_array(Speak);
  assert_eq!(sounds[0], Speak.call(&zoo.0));
  assert_eq!(sounds[1], Speak.call(&zoo.1));
  assert_eq!(sounds[2], Speak.call(&zoo.2));
}

#[test]
fn grow_older_test() {
  let mut zoo = zoo();
  zoo.as_muts().for_each(GrowOlder(5));
  assert_eq!(zoo.as_refs().map_array(Age), [7, 8, 10]);
}

#[test]
fn remove_test() {
  let zoo = zoo();
  let (cat, dogs) = RemoveAt::<1>::remove_at(zoo.clone());
  assert_eq!(cat, Cat::new("Tom", 3));
  assert_eq!(dogs, (Dog::new("Rex", 2), Dog::new("Fido", 5)));
  assert_type_eq::<(Dog, Dog), <(Dog, Cat, Dog) as RemoveAt<1>>::Rest>();

  let rest = zoo.remove::<0>();
  assert_eq!(<(Cat, Dog) as Tuple>::LEN, 2);
  assert_eq!(rest.as_refs().map_array(Name), ["Tom", "Fido"]);
}

#[test]
fn concat_test() {
  let (rex, tom, fido) = zoo();
  let joined = (rex, tom).concat((fido,));
  assert_eq!(joined, zoo());
}
