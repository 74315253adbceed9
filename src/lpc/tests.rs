//! Tests for the LPC / PARCOR recursions.

#[cfg(test)]
mod tests {
    use crate::error::ShapeError;
    use crate::lpc::*;
    use burn::backend::{Autodiff, NdArray};
    use burn::tensor::{Tensor, TensorData};

    type TestBackend = NdArray;

    fn tensor<const D: usize>(data: Vec<f32>, shape: [usize; D]) -> Tensor<TestBackend, D> {
        Tensor::from_data(TensorData::new(data, shape), &Default::default())
    }

    fn values<const D: usize>(t: Tensor<TestBackend, D>) -> Vec<f32> {
        t.into_data().to_vec::<f32>().unwrap()
    }

    fn assert_close(actual: &[f32], expected: &[f32], tol: f32) {
        assert_eq!(actual.len(), expected.len(), "length mismatch");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() <= tol, "index {i}: got {a}, expected {e}");
        }
    }

    #[test]
    fn step_up_by_hand() {
        let par2lpc = ParcorToLpc::new(3);
        let a = values(par2lpc.forward(tensor(vec![1.0, 0.5, -0.3, 0.2], [4])));
        assert_close(&a, &[1.0, 0.29, -0.23, 0.2], 1e-6);
    }

    #[test]
    fn step_down_by_hand() {
        let lpc2par = LpcToParcor::new(3);
        let k = values(lpc2par.forward(tensor(vec![1.0, 0.29, -0.23, 0.2], [4])));
        assert_close(&k, &[1.0, 0.5, -0.3, 0.2], 1e-5);
    }

    #[test]
    fn gain_passes_through() {
        let lpc2par = LpcToParcor::new(2);
        let k = values(lpc2par.forward(tensor(vec![3.5, 0.4, 0.1], [3])));
        assert_eq!(k[0], 3.5);
        assert_close(&values(ParcorToLpc::new(0).forward(tensor(vec![2.0], [1]))), &[2.0], 0.0);
    }

    #[test]
    fn batch_round_trip() {
        let k = tensor(
            vec![
                1.0, 0.9, -0.5, 0.3, -0.1, //
                0.5, -0.2, 0.4, 0.6, 0.25, //
                2.0, 0.0, 0.0, 0.0, 0.0, //
                0.1, -0.7, -0.7, 0.1, 0.05,
            ],
            [2, 2, 5],
        );
        let expected = values(k.clone());
        let par2lpc = ParcorToLpc::new(4);
        let a = par2lpc.forward(k);
        assert_eq!(a.dims(), [2, 2, 5]);
        let k2 = par2lpc.inverse().forward(a);
        assert_close(&values(k2), &expected, 1e-5);
    }

    #[test]
    fn stability_check() {
        let lpc2par = LpcToParcor::new(2);
        // k = [0.5, 0.2] is stable; k = [1.5, 0.0] is not.
        let a = ParcorToLpc::new(2).forward(tensor(vec![1.0, 0.5, 0.2, 1.0, 1.5, 0.0], [2, 3]));
        let margin = values(lpc2par.stability_margin(a.clone()));
        assert_close(&margin, &[0.5, 1.5], 1e-5);

        let stable = lpc2par.is_stable(a).into_data().to_vec::<bool>().unwrap();
        assert_eq!(stable, vec![true, false]);
    }

    #[test]
    fn zero_order_is_always_stable() {
        let lpc2par = LpcToParcor::new(0);
        let margin = lpc2par.stability_margin(tensor(vec![4.0, 5.0], [2, 1]));
        assert_eq!(margin.dims(), [2, 1]);
        assert_eq!(values(margin), vec![0.0, 0.0]);
    }

    #[test]
    fn unit_reflection_propagates_non_finite() {
        // k(2) = 1 makes the step-down denominator zero.
        let k = values(LpcToParcor::new(2).forward(tensor(vec![1.0, 0.0, 1.0], [3])));
        assert_eq!(k[0], 1.0);
        assert!(!k[1].is_finite());
        assert_eq!(k[2], 1.0);
    }

    #[test]
    fn stability_margin_reports_order_mismatch() {
        let err = LpcToParcor::new(2)
            .try_stability_margin(tensor(vec![1.0, 0.5], [2]))
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::TrailingDimMismatch {
                module: "lpc2par",
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    #[should_panic(expected = "lpc2par: expected trailing dimension 3, got 2")]
    fn is_stable_panics_on_order_mismatch() {
        LpcToParcor::new(2).is_stable(tensor(vec![1.0, 0.5], [2]));
    }

    #[test]
    fn order_mismatch_is_reported() {
        let err = ParcorToLpc::new(3)
            .try_forward(tensor(vec![1.0, 0.5], [2]))
            .unwrap_err();
        assert_eq!(err.to_string(), "par2lpc: expected trailing dimension 4, got 2");
    }

    #[test]
    fn gradient_flows_through_step_up() {
        let device = Default::default();
        let k: Tensor<Autodiff<NdArray>, 1> =
            Tensor::from_data(TensorData::new(vec![1.0f32, 0.5, -0.3], [3]), &device)
                .require_grad();
        // a = [K, k1 + k2 k1, k2]; sum = K + k1 (1 + k2) + k2
        let grads = ParcorToLpc::new(2).forward(k.clone()).sum().backward();
        let grad = values(k.grad(&grads).unwrap());
        assert_close(&grad, &[1.0, 0.7, 1.5], 1e-6);
    }
}
