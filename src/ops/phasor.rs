use crate::error::{Result, ScopeError};
use crate::ops::generator::SequenceParams;
use crate::ops::utils::{PHASES, VISIBILITY_THRESHOLD};
use approx::{AbsDiffEq, RelativeEq};
use ndarray::{ArrayView1, ArrayView2};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Cartesian 2-D vector in the phasor plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `magnitude · (cos angle, sin angle)`; a negative magnitude points backwards.
    pub fn polar(magnitude: f64, angle: f64) -> Self {
        Self::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Vector2 {
        iter.fold(Vector2::ZERO, |acc, v| acc + v)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

/// Component-wise sum of a vector group.
pub fn resultant(vectors: &[Vector2]) -> Vector2 {
    vectors.iter().copied().sum()
}

/// Phase vectors of one sequence at a frame.
pub fn phase_vectors(
    signals: &ArrayView2<f64>,
    angles: &[f64; PHASES],
    frame: usize,
) -> Result<[Vector2; PHASES]> {
    ScopeError::check_frame(frame, signals.nrows())?;
    let row = signals.row(frame);
    let mut out = [Vector2::ZERO; PHASES];
    for (p, angle) in angles.iter().enumerate() {
        out[p] = Vector2::polar(row[p], *angle);
    }
    Ok(out)
}

/// Instantaneous phase vectors of both sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceVectors {
    pub positive: [Vector2; PHASES],
    pub negative: [Vector2; PHASES],
}

impl SequenceVectors {
    pub fn positive_resultant(&self) -> Vector2 {
        resultant(&self.positive)
    }

    pub fn negative_resultant(&self) -> Vector2 {
        resultant(&self.negative)
    }

    /// Resultant of all six vectors.
    pub fn combined_resultant(&self) -> Vector2 {
        self.positive_resultant() + self.negative_resultant()
    }

    /// Positive A, B, C followed by negative A, B, C.
    pub fn all(&self) -> [Vector2; 2 * PHASES] {
        let mut out = [Vector2::ZERO; 2 * PHASES];
        out[..PHASES].copy_from_slice(&self.positive);
        out[PHASES..].copy_from_slice(&self.negative);
        out
    }
}

pub fn instant_vectors(
    positive: &ArrayView2<f64>,
    negative: &ArrayView2<f64>,
    angles: &[f64; PHASES],
    frame: usize,
) -> Result<SequenceVectors> {
    Ok(SequenceVectors {
        positive: phase_vectors(positive, angles, frame)?,
        negative: phase_vectors(negative, angles, frame)?,
    })
}

/// α on the x axis, β on the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClarkeVectors {
    pub alpha: Vector2,
    pub beta: Vector2,
}

impl ClarkeVectors {
    pub fn resultant(&self) -> Vector2 {
        self.alpha + self.beta
    }

    pub fn all(&self) -> [Vector2; 2] {
        [self.alpha, self.beta]
    }
}

pub fn clarke_instant_vectors(
    alpha: &ArrayView1<f64>,
    beta: &ArrayView1<f64>,
    frame: usize,
) -> Result<ClarkeVectors> {
    ScopeError::check_frame(frame, alpha.len().min(beta.len()))?;
    Ok(ClarkeVectors {
        alpha: Vector2::new(alpha[frame], 0.0),
        beta: Vector2::new(0.0, beta[frame]),
    })
}

/// How a vector group is laid out for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VectorLayout {
    /// Every vector starts at the origin.
    #[default]
    Superposition,
    /// Vectors are chained tip-to-tail.
    Decomposition,
}

impl VectorLayout {
    pub fn from_decomposition(decomposition: bool) -> Self {
        if decomposition {
            VectorLayout::Decomposition
        } else {
            VectorLayout::Superposition
        }
    }
}

/// Line from `tail` to `tip`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub tail: Vector2,
    pub tip: Vector2,
}

impl Segment {
    pub fn new(tail: Vector2, tip: Vector2) -> Self {
        Self { tail, tip }
    }

    pub fn from_origin(tip: Vector2) -> Self {
        Self::new(Vector2::ZERO, tip)
    }

    pub fn displacement(&self) -> Vector2 {
        self.tip - self.tail
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrangedVectors {
    pub segments: Vec<Segment>,
    /// Always drawn from the origin.
    pub resultant: Segment,
}

pub fn arrange(vectors: &[Vector2], layout: VectorLayout) -> ArrangedVectors {
    match layout {
        VectorLayout::Decomposition => {
            let mut tail = Vector2::ZERO;
            let segments: Vec<Segment> = vectors
                .iter()
                .map(|v| {
                    let segment = Segment::new(tail, tail + *v);
                    tail = segment.tip;
                    segment
                })
                .collect();
            ArrangedVectors {
                segments,
                resultant: Segment::from_origin(tail),
            }
        }
        VectorLayout::Superposition => ArrangedVectors {
            segments: vectors.iter().map(|v| Segment::from_origin(*v)).collect(),
            resultant: Segment::from_origin(resultant(vectors)),
        },
    }
}

/// Which sequences have drawable phasors.
///
/// A sequence at (near) zero amplitude is hidden rather than drawn as a
/// zero-length arrow, whose direction would be undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub positive: bool,
    pub negative: bool,
}

impl Visibility {
    pub fn for_params(params: &SequenceParams, threshold: f64) -> Self {
        Self {
            positive: params.positive_total() >= threshold,
            negative: params.negative >= threshold,
        }
    }
}

impl From<&SequenceParams> for Visibility {
    fn from(params: &SequenceParams) -> Self {
        Visibility::for_params(params, VISIBILITY_THRESHOLD)
    }
}

/// Sequence resultants drawn as separate rotating fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingFields {
    pub positive: Option<Segment>,
    /// Stacked on the positive tip when that field is visible.
    pub negative: Option<Segment>,
}

pub fn rotating_fields(vectors: &SequenceVectors, visibility: Visibility) -> RotatingFields {
    let positive = visibility
        .positive
        .then(|| Segment::from_origin(vectors.positive_resultant()));
    let base = positive.map(|s| s.tip).unwrap_or(Vector2::ZERO);
    let negative = visibility
        .negative
        .then(|| Segment::new(base, base + vectors.negative_resultant()));
    RotatingFields { positive, negative }
}
