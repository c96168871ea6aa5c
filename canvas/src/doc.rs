//! Document model: the named input vectors, overlay toggles, and readouts.
//!
//! Everything here is a value snapshot. An edit never mutates a `VectorSet` or
//! `OverlaySpec` in place; it produces a new one that replaces the old
//! wholesale, so the numeric readouts and the drawn scene always derive from the
//! same state.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{COLOR_A, COLOR_B, COLOR_NORMAL_A, COLOR_NORMAL_B, COLOR_PROJ_A_ON_B, COLOR_PROJ_B_ON_A};
use crate::vector::{self, Vector2};

/// Name of one of the two editable vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VectorName {
    A,
    B,
}

impl VectorName {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Parse a single-letter name, ignoring case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for VectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two user-editable vectors, always both present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorSet {
    pub a: Vector2,
    pub b: Vector2,
}

impl Default for VectorSet {
    fn default() -> Self {
        Self { a: Vector2::new(1.0, 0.0), b: Vector2::new(0.0, 1.0) }
    }
}

impl VectorSet {
    #[must_use]
    pub fn new(a: Vector2, b: Vector2) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub fn get(&self, name: VectorName) -> Vector2 {
        match name {
            VectorName::A => self.a,
            VectorName::B => self.b,
        }
    }

    /// A new set with `name` replaced by `value`.
    #[must_use]
    pub fn with(self, name: VectorName, value: Vector2) -> Self {
        match name {
            VectorName::A => Self { a: value, ..self },
            VectorName::B => Self { b: value, ..self },
        }
    }

    /// Entries in insertion order (A, then B).
    pub fn iter(&self) -> impl Iterator<Item = (VectorName, Vector2)> + '_ {
        VectorName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}

/// A derived-vector overlay that can be toggled on the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overlay {
    NormalizeA,
    NormalizeB,
    ProjectAOntoB,
    ProjectBOntoA,
    DecomposeA,
    DecomposeB,
    LinearCombination,
}

impl Overlay {
    /// All overlays in draw order.
    pub const ALL: [Self; 7] = [
        Self::NormalizeA,
        Self::NormalizeB,
        Self::ProjectAOntoB,
        Self::ProjectBOntoA,
        Self::DecomposeA,
        Self::DecomposeB,
        Self::LinearCombination,
    ];

    /// Stable kebab-case identifier, matching the serialized form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NormalizeA => "normalize-a",
            Self::NormalizeB => "normalize-b",
            Self::ProjectAOntoB => "project-a-onto-b",
            Self::ProjectBOntoA => "project-b-onto-a",
            Self::DecomposeA => "decompose-a",
            Self::DecomposeB => "decompose-b",
            Self::LinearCombination => "linear-combination",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.name().eq_ignore_ascii_case(name))
    }

    /// Human-readable toggle label.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::NormalizeA => "Normalize A",
            Self::NormalizeB => "Normalize B",
            Self::ProjectAOntoB => "Project A → B",
            Self::ProjectBOntoA => "Project B → A",
            Self::DecomposeA => "Decompose A",
            Self::DecomposeB => "Decompose B",
            Self::LinearCombination => "Show Linear Combination (Result)",
        }
    }
}

/// Which overlays are active. Each flag is independent.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySpec {
    pub normalize_a: bool,
    pub normalize_b: bool,
    pub project_a_onto_b: bool,
    pub project_b_onto_a: bool,
    pub decompose_a: bool,
    pub decompose_b: bool,
    pub linear_combination: bool,
}

impl Default for OverlaySpec {
    /// Only the expression result is shown initially.
    fn default() -> Self {
        Self {
            normalize_a: false,
            normalize_b: false,
            project_a_onto_b: false,
            project_b_onto_a: false,
            decompose_a: false,
            decompose_b: false,
            linear_combination: true,
        }
    }
}

impl OverlaySpec {
    /// Every flag off.
    #[must_use]
    pub fn none() -> Self {
        Self { linear_combination: false, ..Self::default() }
    }

    #[must_use]
    pub fn is_enabled(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::NormalizeA => self.normalize_a,
            Overlay::NormalizeB => self.normalize_b,
            Overlay::ProjectAOntoB => self.project_a_onto_b,
            Overlay::ProjectBOntoA => self.project_b_onto_a,
            Overlay::DecomposeA => self.decompose_a,
            Overlay::DecomposeB => self.decompose_b,
            Overlay::LinearCombination => self.linear_combination,
        }
    }

    /// A new spec with `overlay` set to `enabled`.
    #[must_use]
    pub fn with(self, overlay: Overlay, enabled: bool) -> Self {
        let mut next = self;
        let flag = match overlay {
            Overlay::NormalizeA => &mut next.normalize_a,
            Overlay::NormalizeB => &mut next.normalize_b,
            Overlay::ProjectAOntoB => &mut next.project_a_onto_b,
            Overlay::ProjectBOntoA => &mut next.project_b_onto_a,
            Overlay::DecomposeA => &mut next.decompose_a,
            Overlay::DecomposeB => &mut next.decompose_b,
            Overlay::LinearCombination => &mut next.linear_combination,
        };
        *flag = enabled;
        next
    }

    #[must_use]
    pub fn toggled(self, overlay: Overlay) -> Self {
        self.with(overlay, !self.is_enabled(overlay))
    }

    /// Active overlays in draw order.
    pub fn enabled(&self) -> impl Iterator<Item = Overlay> + '_ {
        Overlay::ALL.into_iter().filter(|o| self.is_enabled(*o))
    }
}

impl FromIterator<Overlay> for OverlaySpec {
    fn from_iter<I: IntoIterator<Item = Overlay>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), |spec, o| spec.with(o, true))
    }
}

/// A vector to draw, with its color and label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Styled {
    pub vector: Vector2,
    pub color: &'static str,
    pub label: &'static str,
}

impl Styled {
    #[must_use]
    pub fn new(vector: Vector2, color: &'static str, label: &'static str) -> Self {
        Self { vector, color, label }
    }
}

/// Derived vectors drawn for one overlay. Decompositions yield two arrows.
///
/// `LinearCombination` yields nothing here; its vector comes from the
/// expression, not from the vector set.
#[must_use]
pub fn derived_vectors(overlay: Overlay, set: &VectorSet) -> Vec<Styled> {
    let VectorSet { a, b } = *set;
    match overlay {
        Overlay::NormalizeA => vec![Styled::new(vector::normalize(a), COLOR_NORMAL_A, "Â")],
        Overlay::NormalizeB => vec![Styled::new(vector::normalize(b), COLOR_NORMAL_B, "B̂")],
        Overlay::ProjectAOntoB => vec![Styled::new(vector::project(a, b), COLOR_PROJ_A_ON_B, "proj A→B")],
        Overlay::ProjectBOntoA => vec![Styled::new(vector::project(b, a), COLOR_PROJ_B_ON_A, "proj B→A")],
        Overlay::DecomposeA => {
            let d = vector::decompose(a, b);
            vec![
                Styled::new(d.parallel, COLOR_PROJ_A_ON_B, "proj A→B"),
                Styled::new(d.perpendicular, COLOR_A, "A⊥"),
            ]
        }
        Overlay::DecomposeB => {
            let d = vector::decompose(b, a);
            vec![
                Styled::new(d.parallel, COLOR_PROJ_B_ON_A, "proj B→A"),
                Styled::new(d.perpendicular, COLOR_B, "B⊥"),
            ]
        }
        Overlay::LinearCombination => Vec::new(),
    }
}

/// The vector previewed on an overlay's toggle, if it has one.
///
/// Decompositions preview their parallel part.
#[must_use]
pub fn overlay_preview(overlay: Overlay, set: &VectorSet) -> Option<Vector2> {
    derived_vectors(overlay, set).first().map(|s| s.vector)
}

/// Previews for every overlay that derives from the vector set.
#[must_use]
pub fn overlay_previews(set: &VectorSet) -> Vec<(Overlay, Vector2)> {
    Overlay::ALL
        .into_iter()
        .filter_map(|o| overlay_preview(o, set).map(|v| (o, v)))
        .collect()
}

/// Magnitude and direction of a vector for textual display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readout {
    pub vector: Vector2,
    pub magnitude: f64,
    pub direction_deg: f64,
}

impl Readout {
    #[must_use]
    pub fn of(vector: Vector2) -> Self {
        Self { vector, magnitude: vector::magnitude(vector), direction_deg: vector::direction_deg(vector) }
    }

    /// Short form shown under each input vector, e.g. `Magnitude: 1.414, Direction: 45.0°`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Magnitude: {:.3}, Direction: {:.1}°", self.magnitude, self.direction_deg)
    }

    /// Long form shown for the expression result.
    #[must_use]
    pub fn detail(&self) -> String {
        format!(
            "Result = {}\nMagnitude: {:.3}\nDirection: {:.2}°",
            format_components(self.vector),
            self.magnitude,
            self.direction_deg
        )
    }
}

/// `(x, y)` with two decimals.
#[must_use]
pub fn format_components(v: Vector2) -> String {
    format!("({:.2}, {:.2})", v.x, v.y)
}
