//! Input boundary: per-component text fields and their numeric values.
//!
//! The host feeds raw field text through [`VectorInput::set_component`]. Text
//! that is still being typed (`"-"`, `"."`, `"-."`, or empty) is kept as-is in
//! the field but counts as `0` for computation, so a keystroke is never
//! rejected just because the number is incomplete.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{VectorName, VectorSet};
use crate::vector::Vector2;

/// Which component of a vector a text field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Whether `text` is a number or a prefix of one: `^-?\d*\.?\d*$`.
#[must_use]
pub fn is_valid_typing(text: &str) -> bool {
    let rest = text.strip_prefix('-').unwrap_or(text);
    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (rest, ""),
    };
    int.chars().all(|c| c.is_ascii_digit()) && frac.chars().all(|c| c.is_ascii_digit())
}

/// Numeric value of a field. Incomplete or unparseable text counts as `0`.
#[must_use]
pub fn parse_component(text: &str) -> f64 {
    match text {
        "" | "-" | "." | "-." => 0.0,
        _ => text.parse::<f64>().map_or(0.0, |n| if n.is_finite() { n } else { 0.0 }),
    }
}

/// Apply the field's typing rules to a proposed edit.
///
/// Returns the text the field should show, or `None` when the keystroke is
/// ignored. A lone `"0"` behaves like a placeholder: typing a digit replaces
/// it, typing `-` turns it into `"-"`, and typing `.` gives `"0."`. Clearing a
/// field leaves `"0"`.
#[must_use]
pub fn edit_component(prev: &str, next: &str) -> Option<String> {
    if prev == "0" {
        if next == "0-" {
            return Some("-".to_owned());
        }
        if let Some(last) = next.chars().last().filter(char::is_ascii_digit) {
            return Some(last.to_string());
        }
        if next == "." {
            return Some("0.".to_owned());
        }
    }
    if !is_valid_typing(next) {
        return None;
    }
    if next.is_empty() {
        Some("0".to_owned())
    } else {
        Some(next.to_owned())
    }
}

/// Text shown in every component field, indexed `[vector][axis]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorInput {
    text: [[String; 2]; 2],
}

impl Default for VectorInput {
    fn default() -> Self {
        Self::from_set(&VectorSet::default())
    }
}

impl VectorInput {
    /// Fields pre-filled with the components of `set`.
    #[must_use]
    pub fn from_set(set: &VectorSet) -> Self {
        let row = |v: Vector2| [v.x.to_string(), v.y.to_string()];
        Self { text: [row(set.a), row(set.b)] }
    }

    #[must_use]
    pub fn text(&self, name: VectorName, axis: Axis) -> &str {
        &self.text[slot(name)][axis.index()]
    }

    /// Current numeric values of both vectors.
    #[must_use]
    pub fn vectors(&self) -> VectorSet {
        let value = |name: VectorName| {
            let row = &self.text[slot(name)];
            Vector2::new(parse_component(&row[0]), parse_component(&row[1]))
        };
        VectorSet::new(value(VectorName::A), value(VectorName::B))
    }

    /// Propose new text for one field.
    ///
    /// Returns the recomputed vector set when the edit is accepted, or `None`
    /// (leaving the fields unchanged) when it is ignored.
    pub fn set_component(&mut self, name: VectorName, axis: Axis, value: &str) -> Option<VectorSet> {
        let field = &mut self.text[slot(name)][axis.index()];
        let accepted = edit_component(field, value)?;
        *field = accepted;
        Some(self.vectors())
    }
}

fn slot(name: VectorName) -> usize {
    match name {
        VectorName::A => 0,
        VectorName::B => 1,
    }
}
