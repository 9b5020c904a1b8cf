use hetero::prelude::*;
use hetero::animals::*;

fn main() {
  let mut herd: Vec<Creature> = vec![
    Dog::new("Rex", 2).into(),
    Cat::new("Tom", 3).into(),
    Cat::new("Felix", 5).into(),
  ];

  let sounds = herd.iter().map(|c| c.visit(Speak)).collect::<Vec<_>>();
  println!("{}", sounds.join(" "));

  herd.iter_mut().for_each(|c| c.visit_mut(GrowOlder(5)));
  remove_where(&mut herd, |c| c.visit(Age) > 8);

  let names = herd.iter().map(|c| c.visit(Name)).collect::<Vec<_>>();
  println!("{}", names.join(" "));
}
