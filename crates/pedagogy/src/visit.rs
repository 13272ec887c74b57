//! Visiting every field of a tuple in declaration order.
//!
//! Tuples are heterogeneous, so a visitor is a trait with a generic method
//! rather than a closure: it is called once per field, each time with that
//! field's own type. Fields must implement [`Field`], which gives visitors
//! something to do with them.

use std::fmt::Display;

/// A value that can sit in a visited tuple.
pub trait Field: Display {
    /// Add one for arithmetic types; leave everything else alone.
    fn increment(&mut self) {}
}

macro_rules! arithmetic_field {
    ($($ty:ty => $one:expr),* $(,)?) => {
        $(
            impl Field for $ty {
                fn increment(&mut self) {
                    *self += $one;
                }
            }
        )*
    };
}

arithmetic_field! {
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
}

impl Field for bool {}
impl Field for char {}
impl Field for String {}
impl Field for &str {}

/// Called once per field with shared access.
pub trait Visitor {
    fn visit<F: Field>(&mut self, field: &F);
}

/// Called once per field with mutable access.
pub trait VisitorMut {
    fn visit_mut<F: Field>(&mut self, field: &mut F);
}

/// Records whose fields can be walked in declaration order.
pub trait ForEachField {
    fn for_each_field<V: Visitor>(&self, visitor: &mut V);
    fn for_each_field_mut<V: VisitorMut>(&mut self, visitor: &mut V);
}

macro_rules! tuple_fields {
    ($(($($name:ident : $idx:tt),*)),* $(,)?) => {
        $(
            impl<$($name: Field),*> ForEachField for ($($name,)*) {
                #[allow(unused_variables)]
                fn for_each_field<V: Visitor>(&self, visitor: &mut V) {
                    $(visitor.visit(&self.$idx);)*
                }

                #[allow(unused_variables)]
                fn for_each_field_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
                    $(visitor.visit_mut(&mut self.$idx);)*
                }
            }
        )*
    };
}

tuple_fields! {
    (),
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, G: 5),
    (A: 0, B: 1, C: 2, D: 3, E: 4, G: 5, H: 6),
    (A: 0, B: 1, C: 2, D: 3, E: 4, G: 5, H: 6, I: 7),
}

/// Collects every field's `Display` output.
#[derive(Clone, Debug, Default)]
pub struct Render {
    pub parts: Vec<String>,
}

impl Visitor for Render {
    fn visit<F: Field>(&mut self, field: &F) {
        self.parts.push(field.to_string());
    }
}

/// Increments every arithmetic field.
#[derive(Clone, Copy, Debug, Default)]
pub struct Increment;

impl VisitorMut for Increment {
    fn visit_mut<F: Field>(&mut self, field: &mut F) {
        field.increment();
    }
}

/// Space-separated rendering of every field, in order.
pub fn render<R: ForEachField>(record: &R) -> String {
    let mut r = Render::default();
    record.for_each_field(&mut r);
    return r.parts.join(" ");
}
