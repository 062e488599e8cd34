use std::cell::Cell;
use std::rc::Rc;

use oneof::tlist::tlist;
use oneof::variant::Variant;
use rand::{Rng, SeedableRng};

mod common;
use common::Tracked;

type Alts = tlist![u8, String, Tracked, Vec<u32>];

#[derive(Debug, Clone, PartialEq)]
enum Expected {
    Empty,
    Byte(u8),
    Text(String),
    Tracked(u32),
    Numbers(Vec<u32>),
}

fn check(v: &Variant<Alts>, expected: &Expected) {
    match expected {
        Expected::Empty => {
            assert!(v.is_empty());
            assert!(v.get::<u8, _>().unwrap_err().is_empty());
        },
        Expected::Byte(b) => {
            assert_eq!(v.index(), Some(0));
            assert_eq!(v.get::<u8, _>(), Ok(b));
        },
        Expected::Text(s) => {
            assert_eq!(v.index(), Some(1));
            assert_eq!(v.get::<String, _>(), Ok(s));
        },
        Expected::Tracked(tag) => {
            assert_eq!(v.index(), Some(2));
            assert_eq!(v.get::<Tracked, _>().map(|t| t.tag), Ok(*tag));
        },
        Expected::Numbers(n) => {
            assert_eq!(v.index(), Some(3));
            assert_eq!(v.get_at::<3>(), Ok(n));
        },
    }
}

#[test]
fn random_assignments_keep_discriminant_and_value_in_sync() {
    common::init();

    let drops = Rc::new(Cell::new(0));
    let mut created = 0;

    let mut rng = rand::rngs::StdRng::seed_from_u64(0x0e0f);
    let mut v = Variant::<Alts>::empty();
    let mut expected = Expected::Empty;

    for step in 0..common::RANDOM_OPS_COUNT {
        match rng.gen_range(0..7) {
            0 => {
                let b = rng.gen();
                v.set::<u8, _>(b);
                expected = Expected::Byte(b);
            },
            1 => {
                let s = format!("step-{}", step);
                v.set(s.to_owned());
                expected = Expected::Text(s);
            },
            2 => {
                let tag = rng.gen();
                v.set(Tracked::new(tag, &drops));
                created += 1;
                expected = Expected::Tracked(tag);
            },
            3 => {
                let n = (0..rng.gen_range(0..5)).collect::<Vec<u32>>();
                v.set(n.to_owned());
                expected = Expected::Numbers(n);
            },
            4 => {
                v.reset();
                expected = Expected::Empty;
            },
            5 => {
                let copy = v.clone();
                assert_eq!(copy, v);
                if matches!(expected, Expected::Tracked(_)) {
                    created += 1;
                }
            },
            _ => {
                if let Ok(tracked) = v.take::<Tracked, _>() {
                    assert_eq!(Expected::Tracked(tracked.tag), expected);
                    expected = Expected::Empty;
                }
            },
        }
        check(&v, &expected);

        let live = usize::from(matches!(expected, Expected::Tracked(_)));
        assert_eq!(drops.get() + live, created, "step: {}", step);
    }

    drop(v);
    assert_eq!(drops.get(), created);
}

#[test]
fn failed_construction_during_assignment_leaves_the_variant_empty() {
    common::init();

    let drops = Rc::new(Cell::new(0));
    let mut v = Variant::<Alts>::new(Tracked::new(1, &drops));

    let err = v
        .emplace_with(|| -> Result<Vec<u32>, std::num::ParseIntError> {
            "1,2,x".split(',').map(str::parse::<u32>).collect()
        })
        .unwrap_err();
    log::info!("construction failed: {}", err);

    assert_eq!(drops.get(), 1);
    assert!(v.is_empty());
    check(&v, &Expected::Empty);

    let numbers = v
        .emplace_with(|| -> Result<Vec<u32>, std::num::ParseIntError> {
            "1,2,3".split(',').map(str::parse::<u32>).collect()
        })
        .unwrap();
    numbers.push(4);
    check(&v, &Expected::Numbers(vec![1, 2, 3, 4]));
}

#[test]
fn variant_moves_with_its_value() {
    common::init();

    let drops = Rc::new(Cell::new(0));
    let v = Variant::<Alts>::new(Tracked::new(9, &drops));

    let boxed = Box::new(v);
    let moved = *boxed;
    assert_eq!(drops.get(), 0);
    check(&moved, &Expected::Tracked(9));

    drop(moved);
    assert_eq!(drops.get(), 1);
}
