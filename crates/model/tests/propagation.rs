//! Integration tests for model propagation and observation.

use approx::assert_abs_diff_eq;
use estim_model::{InitialCondition, LinearSystemModel, ModelError, presets};
use ndarray::{Array1, Array2, arr1, arr2};

fn matvec(m: &Array2<f64>, v: &Array1<f64>) -> Vec<f64> {
    (0..m.nrows())
        .map(|i| (0..m.ncols()).map(|j| m[[i, j]] * v[j]).sum())
        .collect()
}

fn three_state_model() -> LinearSystemModel {
    LinearSystemModel::new(
        arr2(&[[0.9, 0.1, 0.0], [0.0, 0.8, 0.2], [0.1, 0.0, 0.7]]),
        Some(arr2(&[[1.0, 0.0], [0.0, 1.0], [0.5, 0.5]])),
        arr2(&[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
        Some(arr2(&[[0.2, 0.0], [0.0, -0.3]])),
    )
    .unwrap()
}

#[test]
fn propagate_matches_ax_for_many_states() {
    let model = three_state_model();
    let a = model.state_matrix();
    for k in 0..20 {
        let x = arr1(&[k as f64, -(k as f64) * 0.5, 1.0 + k as f64 * 0.25]);
        let next = model.propagate(&x, None, None).unwrap();
        assert_eq!(next.len(), model.dims().0);
        for (got, want) in next.iter().zip(matvec(&a, &x)) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }
}

#[test]
fn observe_matches_cx_plus_du() {
    let model = three_state_model();
    let c = model.output_matrix();
    let d = model.output_ctl_matrix();
    let x = arr1(&[1.0, 2.0, 3.0]);
    let u = arr1(&[-1.0, 4.0]);

    let y = model.observe(&x, Some(&u), None).unwrap();
    let cx = matvec(&c, &x);
    let du = matvec(&d, &u);
    assert_eq!(y.len(), 2);
    for i in 0..2 {
        assert_abs_diff_eq!(y[i], cx[i] + du[i], epsilon = 1e-12);
    }
}

#[test]
fn mismatched_control_never_panics() {
    let model = three_state_model();
    let x = arr1(&[1.0, 2.0, 3.0]);
    for len in [0, 1, 3, 5] {
        let u = Array1::<f64>::ones(len);
        assert!(matches!(
            model.propagate(&x, Some(&u), None),
            Err(ModelError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            model.observe(&x, Some(&u), None),
            Err(ModelError::DimensionMismatch { .. })
        ));
    }
}

#[test]
fn model_is_unaffected_by_mutated_copies() {
    let model = three_state_model();
    let mut b = model.state_ctl_matrix();
    b.fill(100.0);
    let mut d = model.output_ctl_matrix();
    d.fill(100.0);

    let x = arr1(&[0.0, 0.0, 0.0]);
    let u = arr1(&[1.0, 1.0]);
    let next = model.propagate(&x, Some(&u), None).unwrap();
    assert_abs_diff_eq!(next[2], 1.0, epsilon = 1e-12);
}

#[test]
fn model_is_shareable_across_threads() {
    let model = presets::falling_ball(0.1).unwrap();
    let u = arr1(&[presets::GRAVITY]);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let model = &model;
                let u = &u;
                s.spawn(move || {
                    let x = arr1(&[i as f64, 0.0]);
                    model.propagate(&x, Some(u), None).unwrap()
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            let x = h.join().unwrap();
            assert_abs_diff_eq!(x[0], i as f64 + 0.005 * presets::GRAVITY, epsilon = 1e-12);
        }
    });
}

#[test]
fn initial_condition_matches_model_dims() {
    let model = three_state_model();
    let ic = InitialCondition::new(&Array1::zeros(3), &Array2::eye(3)).unwrap();
    assert_eq!(ic.dim(), model.dims().0);
    let x = model.propagate(&ic.state(), None, None).unwrap();
    assert!(x.iter().all(|v| *v == 0.0));
}

#[test]
fn noise_of_wrong_length_is_ignored() {
    let model =
        LinearSystemModel::new(Array2::eye(2), None, arr2(&[[1.0, 0.0]]), None).unwrap();
    let x = arr1(&[1.0, 2.0]);

    let next = model.propagate(&x, None, Some(&arr1(&[5.0]))).unwrap();
    assert_eq!(next, arr1(&[1.0, 2.0]));

    let y = model.observe(&x, None, Some(&arr1(&[5.0, 5.0]))).unwrap();
    assert_eq!(y, arr1(&[1.0]));

    let noisy = model.propagate(&x, None, Some(&arr1(&[5.0, 5.0]))).unwrap();
    assert_eq!(noisy, arr1(&[6.0, 7.0]));
}
