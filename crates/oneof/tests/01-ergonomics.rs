use std::fmt::Display;

use oneof::tlist::{first_index_of, tlist, Here, There};
use oneof::variant::{Variant, VariantError, Visitor};

mod common;

struct Print<'a>(&'a mut Vec<String>);

impl<'a, 'x, X: Display> Visitor<&'x X> for Print<'a> {
    type Output = ();

    fn visit(self, input: &'x X) {
        self.0.push(input.to_string());
    }
}

#[test]
fn char_short_int_long_long_from_int() {
    common::init();

    let v = Variant::<tlist![char, i16, i32, i64]>::new(3i32);

    assert!(v.is::<i32, _>());
    assert!(!v.is::<char, _>());
    assert_eq!(v.get::<i32, _>(), Ok(&3));

    let mut output = vec![];
    v.visit(Print(&mut output)).unwrap();
    assert_eq!(output, ["3"]);

    log::info!("{:?}", v);
}

#[test]
fn char_int_double_from_double() {
    common::init();

    let v = Variant::<tlist![char, i32, f64]>::new(3.0f64);
    assert_eq!(v.get_at::<2>(), Ok(&3.0));
    assert_eq!(v.get_at::<2>(), v.get::<f64, _>());
}

#[test]
fn int_int_double_from_int_resolves_to_the_first_int() {
    common::init();

    type Alts = tlist![i32, i32, f64];

    assert_eq!(first_index_of::<Alts, i32>(), Some(0));

    let v = Variant::<Alts>::new_first(3i32).unwrap();
    assert!(v.holds::<i32>());
    assert!(v.is::<i32, Here>());
    assert!(!v.is::<i32, There<Here>>());
    assert_eq!(v.index(), Some(0));
    assert_eq!(v.get_first::<i32>(), Ok(&3));
    assert_eq!(v.get_at::<0>(), Ok(&3));
}

#[test]
fn default_variant_is_empty() {
    common::init();

    let v = Variant::<tlist![char, i32, f64]>::default();
    assert!(!v.is::<char, _>());
    assert!(!v.is::<i32, _>());
    assert!(!v.is::<f64, _>());

    let mut output = vec![];
    assert_eq!(v.visit(Print(&mut output)), Err(VariantError::Empty));
    assert!(output.is_empty());
    assert_eq!(v.get::<i32, _>(), Err(VariantError::Empty));
    assert_eq!(v.get_at::<1>(), Err(VariantError::Empty));
}

#[test]
fn reassigning_hides_the_old_value() {
    common::init();

    let mut v = Variant::<tlist![char, i32, f64]>::new('a');
    v.set(7i32);

    assert!(v.is::<i32, _>());
    assert!(!v.is::<char, _>());
    assert!(v.get::<char, _>().unwrap_err().is_mismatch());
    assert!(v.get_at::<0>().unwrap_err().is_mismatch());
    assert_eq!(v.get::<i32, _>(), Ok(&7));
}

#[test]
fn errors_are_reported_with_type_names() {
    common::init();

    let v = Variant::<tlist![char, i32, f64]>::new('a');
    let err = v.get::<f64, _>().unwrap_err();

    log::info!("error: {}", err);
    assert_eq!(err.to_string(), "Slot mismatch [requested: #2 (f64), active: #0 (char)]");
    assert_eq!(VariantError::Empty.to_string(), "Variant is empty");
}
