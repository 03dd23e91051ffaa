use crate::ops::Vector2;

/// Time-ordered resultant endpoints, one per rendered frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Vector2>,
}

impl Trajectory {
    pub fn push(&mut self, point: Vector2) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    pub fn last(&self) -> Option<Vector2> {
        self.points.last().copied()
    }

    /// Split into x and y series for line plotting.
    pub fn xy(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }
}

/// One endpoint for each trace, taken from a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Resultant of the six ABC phase vectors.
    pub combined: Vector2,
    /// `(α, β)`.
    pub clarke: Vector2,
    /// Positive-sequence rotating field.
    pub positive_field: Vector2,
    /// Positive field with the negative field stacked on top.
    pub stacked_field: Vector2,
}

impl TrajectoryPoint {
    /// Trace names paired with their endpoint, in recording order.
    pub fn named_points(&self) -> [(&'static str, Vector2); 4] {
        [
            ("combined", self.combined),
            ("clarke", self.clarke),
            ("positive_field", self.positive_field),
            ("stacked_field", self.stacked_field),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectories {
    pub combined: Trajectory,
    pub clarke: Trajectory,
    pub positive_field: Trajectory,
    pub stacked_field: Trajectory,
}

impl Trajectories {
    pub fn record(&mut self, point: &TrajectoryPoint, with_fields: bool) {
        self.combined.push(point.combined);
        self.clarke.push(point.clarke);
        if with_fields {
            self.positive_field.push(point.positive_field);
            self.stacked_field.push(point.stacked_field);
        }
    }

    pub fn clear_fields(&mut self) {
        self.positive_field.clear();
        self.stacked_field.clear();
    }

    pub fn clear(&mut self) {
        self.combined.clear();
        self.clarke.clear();
        self.clear_fields();
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
            && self.clarke.is_empty()
            && self.positive_field.is_empty()
            && self.stacked_field.is_empty()
    }
}
