//! Tests for zero-crossing analysis.

#[cfg(test)]
mod tests {
    use crate::analysis::*;
    use crate::error::{ConfigError, ShapeError};
    use burn::backend::NdArray;
    use burn::tensor::{Tensor, TensorData};

    type TestBackend = NdArray;

    fn tensor<const D: usize>(data: Vec<f32>, shape: [usize; D]) -> Tensor<TestBackend, D> {
        Tensor::from_data(TensorData::new(data, shape), &Default::default())
    }

    fn values<const D: usize>(t: Tensor<TestBackend, D>) -> Vec<f32> {
        t.into_data().to_vec::<f32>().unwrap()
    }

    fn signal() -> Vec<f32> {
        vec![-0.2388, 0.3587, -0.6606, -0.6929, 0.5239, 0.4501]
    }

    #[test]
    fn counts_per_frame() {
        let zcross = ZeroCrossing::new(3, false).unwrap();
        let z = zcross.forward(tensor(signal(), [6]));
        assert_eq!(z.dims(), [2]);
        assert_eq!(values(z), vec![2.0, 1.0]);
    }

    #[test]
    fn normalized_counts() {
        let zcross = ZeroCrossing::new(3, true).unwrap();
        let z = values(zcross.forward(tensor(signal(), [6])));
        assert!((z[0] - 2.0 / 3.0).abs() < 1e-6);
        assert!((z[1] - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn trailing_partial_frame_is_dropped() {
        let zcross = ZeroCrossing::new(4, false).unwrap();
        let z = zcross.forward(tensor(signal(), [6]));
        assert_eq!(values(z), vec![2.0]);
        assert_eq!(zcross.num_frames(6), 1);
    }

    #[test]
    fn crossing_through_zero_counts_once() {
        let zcross = ZeroCrossing::new(3, false).unwrap();
        let z = zcross.forward(tensor(vec![1.0, 0.0, -1.0], [3]));
        assert_eq!(values(z), vec![1.0]);
    }

    #[test]
    fn batches_are_independent() {
        let mut data = signal();
        data.extend([1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let zcross = ZeroCrossing::new(2, false).unwrap();
        let z = zcross.forward(tensor(data, [2, 1, 6]));
        assert_eq!(z.dims(), [2, 1, 3]);
        assert_eq!(values(z), vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn single_sample_frames() {
        let zcross = ZeroCrossing::new(1, false).unwrap();
        assert_eq!(values(zcross.forward(tensor(vec![-3.0], [1]))), vec![0.0]);
    }

    #[test]
    fn frame_length_must_be_positive() {
        assert_eq!(
            ZeroCrossing::new(0, false).unwrap_err(),
            ConfigError::InvalidFrameLength(0)
        );
    }

    #[test]
    fn signal_shorter_than_frame() {
        let zcross = ZeroCrossing::new(8, false).unwrap();
        let err = zcross.try_forward(tensor(signal(), [6])).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TrailingDimTooShort {
                module: "zcross",
                required: 8,
                actual: 6
            }
        );
    }
}
