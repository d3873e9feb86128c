use rigkit_slide_core::{
    ids::ObjectId,
    ripple::{apply, apply_into, ripple_time},
    snapshot::TimelineSnapshot,
    window::PivotWindow,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn snap(start: f32, end: f32, times: &[f32]) -> TimelineSnapshot {
    TimelineSnapshot::from_times(ObjectId(0), PivotWindow::new(start, end), times)
}

/// it should scale the window by (target_end - start) / (end - start) and shift later keys
#[test]
fn affine_scale_and_shift() {
    let s = snap(10.0, 20.0, &[5.0, 10.0, 15.0, 20.0, 25.0]);
    let out = apply(&s, 30.0);
    assert_eq!(out, vec![5.0, 10.0, 20.0, 30.0, 35.0]);
}

/// it should leave keys before the window untouched for any target
#[test]
fn keys_before_start_never_move() {
    let s = snap(10.0, 20.0, &[-3.0, 5.0, 9.999]);
    for target in [-100.0, 0.0, 10.0, 11.0, 20.0, 47.5, 1.0e4] {
        let out = apply(&s, target);
        assert_eq!(out, vec![-3.0, 5.0, 9.999], "target={target}");
    }
}

/// it should give the same output for the same target regardless of earlier targets
#[test]
fn idempotent_from_original_snapshot() {
    let s = snap(10.0, 20.0, &[0.0, 12.0, 17.5, 20.0, 26.0, 40.0]);
    let direct = apply(&s, 30.0);

    let mut scratch = Vec::new();
    for target in [30.0, 25.0, 11.0, 90.0, 30.0] {
        apply_into(&s, target, &mut scratch);
    }
    assert_eq!(scratch, direct);
    // The snapshot itself is never touched.
    assert_eq!(s.original_times(), &[0.0, 12.0, 17.5, 20.0, 26.0, 40.0]);
}

/// it should preserve the spacing between keys after the window
#[test]
fn downstream_spacing_preserved() {
    let s = snap(0.0, 8.0, &[0.0, 4.0, 8.0, 14.0, 21.0]);
    let out = apply(&s, 20.0);
    approx(out[4] - out[3], 7.0, 1e-5);
    approx(out[3] - out[2], 6.0, 1e-5);
    assert_eq!(out[2], 20.0);
}

/// it should compress the window when the target moves before the end
#[test]
fn shrinking_window() {
    let s = snap(0.0, 30.0, &[0.0, 10.0, 20.0, 30.0, 40.0]);
    let out = apply(&s, 15.0);
    assert_eq!(out, vec![0.0, 5.0, 10.0, 15.0, 25.0]);
}

/// it should not snap results to whole frames
#[test]
fn fractional_results_kept() {
    let w = PivotWindow::new(0.0, 3.0);
    approx(ripple_time(1.0, w, 4.0), 4.0 / 3.0, 1e-6);
}
