//! 신호 생성기 테스트

use super::widget_time;
use crate::ops::generator::{generate, sample, SequenceParams};
use crate::ops::utils::{time_base, OMEGA, PHASE_ANGLES};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::Array2;

const EPSILON: f64 = 1e-12;

#[test]
fn test_time_base_includes_both_ends() {
    let t = time_base(200, 2.0);
    assert_eq!(t.len(), 200);
    assert_relative_eq!(t[0], 0.0);
    assert_relative_eq!(t[199], 2.0, epsilon = EPSILON);
    assert_relative_eq!(t[1] - t[0], 2.0 / 199.0, epsilon = EPSILON);
}

#[test]
fn test_combined_is_sum_of_sequences() {
    let t = widget_time();
    let params = SequenceParams::new([1.0, 0.3, 0.7, 0.0, 0.25], 0.6);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);

    assert_eq!(signals.combined.dim(), (200, 3));
    let sum = &signals.positive + &signals.negative;
    assert_abs_diff_eq!(signals.combined, sum, epsilon = EPSILON);
}

#[test]
fn test_zero_amplitudes_give_zero_signals() {
    let t = widget_time();
    let signals = generate(&t.view(), &PHASE_ANGLES, &SequenceParams::zero());
    let zeros = Array2::<f64>::zeros((200, 3));
    assert_abs_diff_eq!(signals.positive, zeros, epsilon = 0.0);
    assert_abs_diff_eq!(signals.negative, zeros, epsilon = 0.0);
    assert_abs_diff_eq!(signals.combined, zeros, epsilon = 0.0);
}

#[test]
fn test_pure_fundamental_matches_closed_form() {
    let t = widget_time();
    let params = SequenceParams::fundamental(1.0, 0.0);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);

    for (i, &ti) in t.iter().enumerate() {
        for (p, angle) in PHASE_ANGLES.iter().enumerate() {
            let expected = (OMEGA * ti - angle).cos();
            assert_relative_eq!(signals.combined[[i, p]], expected, epsilon = EPSILON);
        }
    }
}

#[test]
fn test_higher_harmonic_order_scales_angle() {
    let t = widget_time();
    let params = SequenceParams::new([0.0, 0.0, 2.0, 0.0, 0.0], 0.0);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);

    for (i, &ti) in t.iter().enumerate() {
        for (p, angle) in PHASE_ANGLES.iter().enumerate() {
            let expected = 2.0 * (3.0 * (OMEGA * ti - angle)).cos();
            assert_relative_eq!(signals.positive[[i, p]], expected, epsilon = 1e-11);
        }
    }
}

#[test]
fn test_negative_sequence_flips_angle_sign() {
    let params = SequenceParams::fundamental(0.0, 0.5);
    let ti = 0.37;
    let s = sample(ti, &PHASE_ANGLES, &params);
    for (p, angle) in PHASE_ANGLES.iter().enumerate() {
        assert_relative_eq!(s.negative[p], 0.5 * (OMEGA * ti + angle).cos(), epsilon = EPSILON);
        assert_relative_eq!(s.positive[p], 0.0);
    }
}

#[test]
fn test_tiny_harmonics_are_skipped() {
    let t = widget_time();
    let with_tiny = SequenceParams::new([1.0, 0.0, 0.0, 0.0, 1e-9], 0.0);
    let without = SequenceParams::fundamental(1.0, 0.0);
    let a = generate(&t.view(), &PHASE_ANGLES, &with_tiny);
    let b = generate(&t.view(), &PHASE_ANGLES, &without);
    assert_abs_diff_eq!(a.combined, b.combined, epsilon = 1e-8);
}

#[test]
fn test_out_of_range_amplitudes_are_not_rejected() {
    // 입력 범위 밖의 값도 공식대로 계산
    let params = SequenceParams::new([-2.0, 0.0, 0.0, 0.0, 0.0], 20.0);
    let s = sample(0.0, &PHASE_ANGLES, &params);
    assert_relative_eq!(s.positive[0], -2.0, epsilon = EPSILON);
    assert_relative_eq!(s.negative[0], 20.0, epsilon = EPSILON);
    assert_relative_eq!(s.combined()[0], 18.0, epsilon = EPSILON);
}

#[test]
fn test_generate_agrees_with_sample() {
    let t = widget_time();
    let params = SequenceParams::new([0.8, 0.0, 0.4, 0.2, 0.0], 0.3);
    let signals = generate(&t.view(), &PHASE_ANGLES, &params);
    for &i in &[0usize, 17, 99, 199] {
        let s = sample(t[i], &PHASE_ANGLES, &params);
        for p in 0..3 {
            assert_eq!(signals.positive[[i, p]], s.positive[p]);
            assert_eq!(signals.negative[[i, p]], s.negative[p]);
            assert_eq!(signals.combined[[i, p]], s.combined()[p]);
        }
    }
}
