//! Zero-crossing analysis.
//!
//! Counts sign changes per non-overlapping frame. The signal is padded on the
//! left by repeating its first sample, so frame `i` covers the `L`
//! transitions ending at samples `iL .. iL + L - 1`. A sign change across
//! zero (`+ -> 0 -> -`) counts as one crossing in total.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use tracing::debug;

use crate::error::{ConfigError, ShapeError};
use crate::shape;

const NAME: &str = "zcross";

/// Zero-crossing rate per frame, `[..., T] -> [..., T / L]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroCrossing {
    frame_length: usize,
    norm: bool,
}

impl ZeroCrossing {
    /// `norm` divides each count by the frame length.
    pub fn new(frame_length: usize, norm: bool) -> Result<Self, ConfigError> {
        if frame_length == 0 {
            return Err(ConfigError::InvalidFrameLength(frame_length));
        }
        debug!(frame_length, norm, "zcross initialized");
        Ok(Self { frame_length, norm })
    }

    pub fn frame_length(&self) -> usize {
        self.frame_length
    }

    /// Number of output frames for a signal of `num_samples`.
    pub fn num_frames(&self, num_samples: usize) -> usize {
        num_samples / self.frame_length
    }

    /// # Panics
    ///
    /// If the signal is shorter than one frame.
    pub fn forward<B: Backend, const D: usize>(&self, x: Tensor<B, D>) -> Tensor<B, D> {
        self.try_forward(x).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_forward<B: Backend, const D: usize>(
        &self,
        x: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, ShapeError> {
        let dims = x.dims();
        let num_samples = shape::check_trailing_min(NAME, &dims, self.frame_length)?;
        let num_frames = self.num_frames(num_samples);
        let frame_length = self.frame_length;

        let signs = shape::flatten_batch(x).sign();
        let [batch, _] = signs.dims();
        let first = signs.clone().narrow(1, 0, 1);
        let prev = if num_samples > 1 {
            Tensor::cat(vec![first, signs.clone().narrow(1, 0, num_samples - 1)], 1)
        } else {
            first
        };
        let crossings = (signs - prev).abs().mul_scalar(0.5);

        let used = num_frames * frame_length;
        let framed: Tensor<B, 3> = crossings
            .narrow(1, 0, used)
            .reshape([batch, num_frames, frame_length]);
        let mut counts: Tensor<B, 2> = framed.sum_dim(2).reshape([batch, num_frames]);
        if self.norm {
            counts = counts.div_scalar(frame_length as f64);
        }

        Ok(shape::unflatten_batch(counts, dims, num_frames))
    }
}
