use smallvec::SmallVec;

use crate::animation::ease::Ease;
use crate::foundation::error::{PromoError, PromoResult};

/// Behavior of an [`Interpolation`] for inputs outside its breakpoint domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the edge segment's slope.
    #[default]
    Extend,
    /// Hold the edge output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
    /// Fold the input back into the edge segment's domain.
    Wrap,
}

/// Easing and per-edge extrapolation for an [`Interpolation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterpolateOpts {
    /// Easing applied inside each segment.
    pub easing: Ease,
    /// Policy below the first breakpoint.
    pub left: Extrapolate,
    /// Policy above the last breakpoint.
    pub right: Extrapolate,
}

impl InterpolateOpts {
    /// Extend on the left, clamp on the right. The usual "fade in then hold" curve.
    pub fn clamp_right() -> Self {
        Self {
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Clamp both edges.
    pub fn clamped() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }
}

/// Piecewise-linear mapping from an ascending input domain to an output sequence.
///
/// Breakpoints are validated once at construction; [`Interpolation::sample`] is total and never
/// returns NaN for a finite input.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Interpolation {
    input: SmallVec<[f64; 4]>,
    output: SmallVec<[f64; 4]>,
    opts: InterpolateOpts,
}

impl Interpolation {
    /// Build a curve through `(input[i], output[i])` with default options (linear, extend).
    pub fn new(input: &[f64], output: &[f64]) -> PromoResult<Self> {
        if input.len() < 2 {
            return Err(PromoError::animation(format!(
                "interpolation needs at least 2 breakpoints, got {}",
                input.len()
            )));
        }
        if input.len() != output.len() {
            return Err(PromoError::animation(format!(
                "input and output ranges must have equal length ({} != {})",
                input.len(),
                output.len()
            )));
        }
        if let Some(v) = input.iter().chain(output.iter()).find(|v| !v.is_finite()) {
            return Err(PromoError::animation(format!(
                "interpolation breakpoints must be finite, got {v}"
            )));
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return Err(PromoError::animation(format!(
                "input range must be strictly increasing, got {input:?}"
            )));
        }

        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
            opts: InterpolateOpts::default(),
        })
    }

    /// Replace all options at once.
    pub fn with_opts(mut self, opts: InterpolateOpts) -> Self {
        self.opts = opts;
        self
    }

    /// Set the in-segment easing.
    pub fn easing(mut self, easing: Ease) -> Self {
        self.opts.easing = easing;
        self
    }

    /// Set the policy below the first breakpoint.
    pub fn extrapolate_left(mut self, policy: Extrapolate) -> Self {
        self.opts.left = policy;
        self
    }

    /// Set the policy above the last breakpoint.
    pub fn extrapolate_right(mut self, policy: Extrapolate) -> Self {
        self.opts.right = policy;
        self
    }

    /// Clamp both edges.
    pub fn clamp(self) -> Self {
        self.extrapolate_left(Extrapolate::Clamp)
            .extrapolate_right(Extrapolate::Clamp)
    }

    /// First and last input breakpoints.
    pub fn domain(&self) -> (f64, f64) {
        (self.input[0], self.input[self.input.len() - 1])
    }

    /// Options currently in effect.
    pub fn opts(&self) -> InterpolateOpts {
        self.opts
    }

    /// Sample the curve at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.output[0];
        }
        let seg = self.segment_for(x);
        self.sample_segment(x, seg)
    }

    fn segment_for(&self, x: f64) -> usize {
        // Last segment whose end is not below `x`; inputs past the domain use the edge segments.
        let last = self.input.len() - 2;
        (1..=last)
            .find(|&i| self.input[i] >= x)
            .map_or(last, |i| i - 1)
    }

    fn sample_segment(&self, x: f64, seg: usize) -> f64 {
        let in_min = self.input[seg];
        let in_max = self.input[seg + 1];
        let out_min = self.output[seg];
        let out_max = self.output[seg + 1];

        let mut v = x;
        if v < in_min {
            match self.opts.left {
                Extrapolate::Identity => return x,
                Extrapolate::Clamp => v = in_min,
                Extrapolate::Wrap => v = wrap(v, in_min, in_max),
                Extrapolate::Extend => {}
            }
        }
        if v > in_max {
            match self.opts.right {
                Extrapolate::Identity => return x,
                Extrapolate::Clamp => v = in_max,
                Extrapolate::Wrap => v = wrap(v, in_min, in_max),
                Extrapolate::Extend => {}
            }
        }

        if out_min == out_max {
            return out_min;
        }

        let t = (v - in_min) / (in_max - in_min);
        // Easing shapes the in-segment portion only; extension past an edge stays linear.
        let te = if (0.0..=1.0).contains(&t) {
            self.opts.easing.apply(t)
        } else {
            t
        };
        out_min + te * (out_max - out_min)
    }
}

fn wrap(v: f64, min: f64, max: f64) -> f64 {
    if !v.is_finite() {
        return min;
    }
    let range = max - min;
    ((v - min) % range + range) % range + min
}

/// One-shot helper: validate the breakpoints and sample at `x`.
pub fn interpolate(
    x: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOpts,
) -> PromoResult<f64> {
    Ok(Interpolation::new(input, output)?.with_opts(opts).sample(x))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
