use oneof::tlist::tlist;
use oneof::variant::{Variant, VariantError, Visitor};

mod common;

type Shape = Variant<tlist![Circle, Rect, Label]>;

#[derive(Debug, Clone, PartialEq)]
struct Circle {
    r: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Rect {
    w: f64,
    h: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Label(String);

struct Area;

impl Visitor<&Circle> for Area {
    type Output = f64;

    fn visit(self, c: &Circle) -> f64 {
        std::f64::consts::PI * c.r * c.r
    }
}
impl Visitor<&Rect> for Area {
    type Output = f64;

    fn visit(self, r: &Rect) -> f64 {
        r.w * r.h
    }
}
impl Visitor<&Label> for Area {
    type Output = f64;

    fn visit(self, _: &Label) -> f64 {
        0.0
    }
}

struct Scale(f64);

impl Visitor<&mut Circle> for Scale {
    type Output = ();

    fn visit(self, c: &mut Circle) {
        c.r *= self.0;
    }
}
impl Visitor<&mut Rect> for Scale {
    type Output = ();

    fn visit(self, r: &mut Rect) {
        r.w *= self.0;
        r.h *= self.0;
    }
}
impl Visitor<&mut Label> for Scale {
    type Output = ();

    fn visit(self, l: &mut Label) {
        l.0 = format!("{} (x{})", l.0, self.0);
    }
}

struct Describe<'a> {
    seen: &'a mut Vec<&'static str>,
}

impl<'a, 'x> Visitor<&'x Circle> for &mut Describe<'a> {
    type Output = ();

    fn visit(self, _: &'x Circle) {
        self.seen.push("circle");
    }
}
impl<'a, 'x> Visitor<&'x Rect> for &mut Describe<'a> {
    type Output = ();

    fn visit(self, _: &'x Rect) {
        self.seen.push("rect");
    }
}
impl<'a, 'x> Visitor<&'x Label> for &mut Describe<'a> {
    type Output = ();

    fn visit(self, _: &'x Label) {
        self.seen.push("label");
    }
}

struct IntoLabel;

impl Visitor<Circle> for IntoLabel {
    type Output = Label;

    fn visit(self, c: Circle) -> Label {
        Label(format!("circle r={}", c.r))
    }
}
impl Visitor<Rect> for IntoLabel {
    type Output = Label;

    fn visit(self, r: Rect) -> Label {
        Label(format!("rect {}x{}", r.w, r.h))
    }
}
impl Visitor<Label> for IntoLabel {
    type Output = Label;

    fn visit(self, l: Label) -> Label {
        l
    }
}

#[test]
fn overload_style_visitor_sees_the_active_type() {
    common::init();

    let shapes = [
        Shape::new(Rect { w: 2.0, h: 3.0 }),
        Shape::new(Label("none".into())),
        Shape::new(Circle { r: 1.0 }),
    ];
    let areas = shapes.iter().map(|s| s.visit(Area)).collect::<Result<Vec<_>, _>>().unwrap();

    assert_eq!(areas[0], 6.0);
    assert_eq!(areas[1], 0.0);
    assert!((areas[2] - std::f64::consts::PI).abs() < f64::EPSILON);
}

#[test]
fn stateful_visitor_by_reference() {
    common::init();

    let mut seen = vec![];
    let mut describe = Describe { seen: &mut seen };

    let shapes = [
        Shape::new(Circle { r: 1.0 }),
        Shape::empty(),
        Shape::new(Label("a".into())),
        Shape::new(Rect { w: 1.0, h: 1.0 }),
    ];
    let results = shapes.iter().map(|s| s.visit(&mut describe)).collect::<Vec<_>>();

    assert_eq!(results, [Ok(()), Err(VariantError::Empty), Ok(()), Ok(())]);
    assert_eq!(seen, ["circle", "label", "rect"]);
}

#[test]
fn mutating_visitor_updates_in_place() {
    common::init();

    let mut shape = Shape::new(Rect { w: 1.0, h: 2.0 });
    shape.visit_mut(Scale(2.0)).unwrap();
    assert_eq!(shape.get::<Rect, _>(), Ok(&Rect { w: 2.0, h: 4.0 }));
    assert_eq!(shape.visit(Area), Ok(8.0));

    shape.set(Label("tag".into()));
    shape.visit_mut(Scale(3.0)).unwrap();
    assert_eq!(shape.get_at::<2>().map(|l| l.0.as_str()), Ok("tag (x3)"));
}

#[test]
fn consuming_visitor_takes_the_value() {
    common::init();

    let label = Shape::new(Circle { r: 0.5 }).into_visit(IntoLabel).unwrap();
    assert_eq!(label, Label("circle r=0.5".into()));

    assert_eq!(Shape::empty().into_visit(IntoLabel), Err(VariantError::Empty));
}
