use std::fmt::Display;

use oneof::tlist::{tlist, TypeList};
use oneof::variant::{Variant, Visitor};

mod common;

type Alts = tlist![char, i16, i32, i64];

struct Printer;

impl<'a, X: Display> Visitor<&'a X> for Printer {
    type Output = ();

    fn visit(self, value: &'a X) {
        println!("value: {}", value);
    }
}

fn main() {
    common::init();

    let v = Variant::<Alts>::new(3i32);

    println!("alternatives: {:?}", Alts::type_names());
    println!("is char: {}", v.is::<char, _>());
    println!("is i16:  {}", v.is::<i16, _>());
    println!("is i32:  {}", v.is::<i32, _>());
    println!("is i64:  {}", v.is::<i64, _>());

    if let Err(reason) = v.get::<i64, _>() {
        log::warn!("{}", reason);
    }

    if let Err(reason) = v.visit(Printer) {
        log::error!("{}", reason);
    }
}
