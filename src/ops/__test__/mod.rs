pub mod clarke_test;
pub mod generation_test;

use crate::ops::utils::time_base;
use ndarray::Array1;

/// Default widget time base: 200 samples over [0, 2].
pub fn widget_time() -> Array1<f64> {
    time_base(200, 2.0)
}
