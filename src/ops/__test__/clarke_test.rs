//! Clarke 변환 테스트

use super::widget_time;
use crate::error::ScopeError;
use crate::ops::clarke::{clarke_sample, project, try_project, ScalingMode};
use crate::ops::generator::{generate, SequenceParams};
use crate::ops::utils::PHASE_ANGLES;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::{arr2, s, Array1};
use std::f64::consts::PI;

const EPSILON: f64 = 1e-12;

#[test]
fn test_scaling_gains() {
    assert_relative_eq!(ScalingMode::AmplitudeInvariant.gain(), 2.0 / 3.0);
    assert_relative_eq!(ScalingMode::PowerInvariant.gain(), (2.0f64 / 3.0).sqrt());
    assert_eq!(ScalingMode::default(), ScalingMode::PowerInvariant);
}

#[test]
fn test_scaling_mode_parsing() {
    assert_eq!("amp".parse::<ScalingMode>(), Ok(ScalingMode::AmplitudeInvariant));
    assert_eq!(" Power ".parse::<ScalingMode>(), Ok(ScalingMode::PowerInvariant));
    assert_eq!(
        "dq".parse::<ScalingMode>(),
        Err(ScopeError::UnknownScalingMode("dq".to_string()))
    );
    assert_eq!(ScalingMode::AmplitudeInvariant.to_string(), "amplitude");
}

#[test]
fn test_widget_default_first_sample() {
    let t = widget_time();
    let params = SequenceParams::fundamental(1.0, 0.1);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);
    let clarke = project(&signals.combined.view(), ScalingMode::PowerInvariant);

    let a = 1.1;
    let b = (-2.0 * PI / 3.0).cos() + 0.1 * (2.0 * PI / 3.0).cos();
    let c = (-4.0 * PI / 3.0).cos() + 0.1 * (4.0 * PI / 3.0).cos();
    assert_relative_eq!(signals.combined[[0, 0]], a, epsilon = EPSILON);
    assert_relative_eq!(signals.combined[[0, 1]], b, epsilon = EPSILON);
    assert_relative_eq!(signals.combined[[0, 2]], c, epsilon = EPSILON);

    let k = (2.0f64 / 3.0).sqrt();
    let expected_alpha = k * (a - 0.5 * b - 0.5 * c);
    let expected_beta = k * (3.0f64.sqrt() / 2.0 * b - 3.0f64.sqrt() / 2.0 * c);
    assert_relative_eq!(clarke.alpha[0], expected_alpha, epsilon = EPSILON);
    assert_abs_diff_eq!(clarke.beta[0], expected_beta, epsilon = EPSILON);

    // b == c at t=0, so β vanishes and α = k * 1.5 * 1.1
    assert_abs_diff_eq!(clarke.beta[0], 0.0, epsilon = EPSILON);
    assert_relative_eq!(clarke.alpha[0], k * 1.65, epsilon = EPSILON);
}

#[test]
fn test_zero_input_projects_to_zero() {
    let t = widget_time();
    let signals = generate(&t.view(), &PHASE_ANGLES, &SequenceParams::zero());
    let clarke = project(&signals.combined.view(), ScalingMode::AmplitudeInvariant);
    assert_abs_diff_eq!(clarke.alpha, Array1::<f64>::zeros(200), epsilon = 0.0);
    assert_abs_diff_eq!(clarke.beta, Array1::<f64>::zeros(200), epsilon = 0.0);
}

#[test]
fn test_mode_switch_rescales_pointwise() {
    let t = widget_time();
    let params = SequenceParams::new([1.0, 0.2, 0.5, 0.0, 0.1], 0.4);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);
    let power = project(&signals.combined.view(), ScalingMode::PowerInvariant);
    let amplitude = project(&signals.combined.view(), ScalingMode::AmplitudeInvariant);

    let ratio = (2.0 / 3.0) / (2.0f64 / 3.0).sqrt();
    assert_relative_eq!(ratio, (2.0f64 / 3.0).sqrt(), epsilon = EPSILON);
    assert_abs_diff_eq!(amplitude.alpha, &power.alpha * ratio, epsilon = 1e-12);
    assert_abs_diff_eq!(amplitude.beta, &power.beta * ratio, epsilon = 1e-12);
}

#[test]
fn test_projection_is_memoryless() {
    let t = widget_time();
    let params = SequenceParams::new([1.0, 0.0, 0.3, 0.0, 0.0], 0.2);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);
    let full = project(&signals.combined.view(), ScalingMode::PowerInvariant);

    // 일부 구간만 변환해도 같은 값이어야 함
    let window = signals.combined.slice(s![50..60, ..]);
    let partial = project(&window, ScalingMode::PowerInvariant);
    assert_eq!(partial.alpha, full.alpha.slice(s![50..60]).to_owned());
    assert_eq!(partial.beta, full.beta.slice(s![50..60]).to_owned());
}

#[test]
fn test_balanced_sequence_is_circle() {
    let t = widget_time();
    let params = SequenceParams::fundamental(1.0, 0.0);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);
    let clarke = project(&signals.combined.view(), ScalingMode::AmplitudeInvariant);

    // amplitude invariant: radius equals the phase amplitude
    for i in 0..clarke.len() {
        let r = clarke.alpha[i].hypot(clarke.beta[i]);
        assert_relative_eq!(r, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_equal_sequences_degenerate_to_line() {
    let t = widget_time();
    let params = SequenceParams::fundamental(1.0, 1.0);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);
    let mode = ScalingMode::PowerInvariant;
    let clarke = project(&signals.combined.view(), mode);
    let k = mode.gain();

    // 한 주기 (t in [0, 1]) 동안 β = 0, α = 3k cos(ωt)
    for (i, &ti) in t.iter().enumerate().filter(|(_, ti)| **ti <= 1.0) {
        assert_abs_diff_eq!(clarke.beta[i], 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            clarke.alpha[i],
            3.0 * k * (2.0 * PI * ti).cos(),
            epsilon = 1e-12
        );
    }
    let max_alpha = clarke.alpha.iter().cloned().fold(f64::MIN, f64::max);
    assert_relative_eq!(max_alpha, 3.0 * k, epsilon = 1e-12);
}

#[test]
fn test_unbalanced_sequences_trace_ellipse() {
    let t = widget_time();
    let (pos, neg) = (1.0, 0.4);
    let params = SequenceParams::fundamental(pos, neg);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);
    let mode = ScalingMode::AmplitudeInvariant;
    let clarke = project(&signals.combined.view(), mode);

    let k = mode.gain();
    let major = 1.5 * k * (pos + neg);
    let minor = 1.5 * k * (pos - neg);
    for i in 0..clarke.len() {
        let e = (clarke.alpha[i] / major).powi(2) + (clarke.beta[i] / minor).powi(2);
        assert_relative_eq!(e, 1.0, epsilon = 1e-10);
    }
}

#[test]
fn test_clarke_sample_matches_formula() {
    let (alpha, beta) = clarke_sample(1.0, -0.5, -0.5, ScalingMode::AmplitudeInvariant);
    assert_relative_eq!(alpha, 1.0, epsilon = EPSILON);
    assert_abs_diff_eq!(beta, 0.0, epsilon = EPSILON);

    let m = arr2(&[[0.2, 0.7, -1.3]]);
    let projected = project(&m.view(), ScalingMode::PowerInvariant);
    let (alpha, beta) = clarke_sample(0.2, 0.7, -1.3, ScalingMode::PowerInvariant);
    assert_eq!(projected.alpha[0], alpha);
    assert_eq!(projected.beta[0], beta);
}

#[test]
#[should_panic(expected = "phase matrix must have 3 columns")]
fn test_project_rejects_wrong_width() {
    let m = arr2(&[[1.0, 2.0]]);
    project(&m.view(), ScalingMode::PowerInvariant);
}

#[test]
fn test_try_project_reports_shape() {
    let m = arr2(&[[1.0, 2.0, 3.0, 4.0]]);
    assert_eq!(
        try_project(&m.view(), ScalingMode::AmplitudeInvariant),
        Err(ScopeError::ShapeMismatch {
            expected: 3,
            actual: 4
        })
    );

    // 3열이면 project와 같은 결과
    let abc = arr2(&[[1.0, -0.5, -0.5], [0.0, 0.8, -0.8]]);
    let checked = try_project(&abc.view(), ScalingMode::PowerInvariant).unwrap();
    assert_eq!(checked, project(&abc.view(), ScalingMode::PowerInvariant));
}
