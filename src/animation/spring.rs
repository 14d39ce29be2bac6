use crate::foundation::core::Fps;
use crate::foundation::error::{PromoError, PromoResult};

/// Consecutive settled frames [`measure_spring`] requires before it reports a settle frame.
const SETTLE_WINDOW_FRAMES: u32 = 20;

/// Longest curve [`measure_spring`] will scan, in seconds of timeline.
const SETTLE_HORIZON_SECS: f64 = 600.0;

/// Hard cap on frames scanned by [`measure_spring`], whatever the frame rate.
const SETTLE_HORIZON_MAX_FRAMES: u64 = 1_000_000;

/// Default settle threshold used when stretching a spring to a fixed duration.
pub const DEFAULT_SETTLE_THRESHOLD: f64 = 0.005;

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Velocity-proportional friction.
    pub damping: f64,
    /// Mass of the moving body, must be `> 0`.
    pub mass: f64,
    /// Restoring force per unit of displacement, must be `> 0`.
    pub stiffness: f64,
    /// Stop at the target instead of bouncing past it.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            mass: 1.0,
            stiffness: 100.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Default spring with a custom damping coefficient.
    pub fn damped(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    /// Reject parameters that would not produce a settling curve.
    pub fn validate(&self) -> PromoResult<()> {
        if !(self.damping.is_finite() && self.mass.is_finite() && self.stiffness.is_finite()) {
            return Err(PromoError::animation("spring parameters must be finite"));
        }
        if self.mass <= 0.0 {
            return Err(PromoError::animation("spring mass must be > 0"));
        }
        if self.stiffness <= 0.0 {
            return Err(PromoError::animation("spring stiffness must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(PromoError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio `zeta`; `< 1` oscillates, `1` is critical, `> 1` creeps.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt()).max(1e-9)
    }

    /// Unit step response (0 toward 1) after `t` seconds, with zero initial velocity.
    fn unit_response(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);

        let w0 = (k / m).sqrt();
        if w0 == 0.0 {
            return 0.0;
        }
        let zeta = self.damping_ratio().max(0.0);

        let x = if (zeta - 1.0).abs() < 1e-6 {
            let e = (-w0 * t).exp();
            1.0 - e * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-zeta * w0 * t).exp();
            let k = zeta / (1.0 - zeta * zeta).sqrt();
            1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
        } else {
            let z2 = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - z2);
            let r2 = -w0 * (zeta + z2);
            let c2 = (zeta + z2) / (2.0 * z2);
            let c1 = (zeta - z2) / (2.0 * z2);
            1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
        };

        if self.overshoot_clamping {
            x.min(1.0)
        } else {
            x
        }
    }
}

/// A spring entrance curve from `from` to `to`, sampled by frame.
///
/// Sampling is closed-form: the value depends only on `(frame, fps, config)` and carries no
/// velocity or position between calls, so frames may be sampled in any order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Spring {
    config: SpringConfig,
    from: f64,
    to: f64,
    delay_frames: f64,
    time_scale: f64,
}

impl Spring {
    /// A `0 -> 1` spring with the given physics.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            from: 0.0,
            to: 1.0,
            delay_frames: 0.0,
            time_scale: 1.0,
        }
    }

    /// Start value (also returned before the spring starts).
    pub fn from(mut self, v: f64) -> Self {
        self.from = v;
        self
    }

    /// Rest value.
    pub fn to(mut self, v: f64) -> Self {
        self.to = v;
        self
    }

    /// Hold at `from` for `frames` before starting.
    pub fn delay(mut self, frames: f64) -> Self {
        self.delay_frames = frames;
        self
    }

    /// Time-stretch the curve so it settles after `frames` frames at `fps`.
    pub fn duration_in_frames(mut self, frames: f64, fps: Fps) -> PromoResult<Self> {
        if !(frames.is_finite() && frames > 0.0) {
            return Err(PromoError::animation("spring duration must be > 0 frames"));
        }
        let natural = measure_spring(fps, self.config, DEFAULT_SETTLE_THRESHOLD)?;
        self.time_scale = natural as f64 / frames;
        Ok(self)
    }

    /// Physics parameters in use.
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Sample at `frame` (may be negative or fractional).
    pub fn sample(&self, frame: f64, fps: Fps) -> f64 {
        let local = frame - self.delay_frames;
        if local.is_nan() || local <= 0.0 {
            return self.from;
        }
        let t = local * self.time_scale * fps.frame_duration_secs();
        let unit = self.config.unit_response(t);
        self.from + (self.to - self.from) * unit
    }
}

/// Sample a `0 -> 1` spring at `frame`. Negative frames yield `0`.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    Spring::new(config).sample(frame, fps)
}

/// First frame after which the spring stays within `threshold` of its target.
///
/// The curve must remain settled for a short run of frames so a momentary zero crossing of an
/// oscillating spring is not mistaken for rest.
pub fn measure_spring(fps: Fps, config: SpringConfig, threshold: f64) -> PromoResult<u64> {
    config.validate()?;
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(PromoError::animation("settle threshold must be > 0"));
    }

    let horizon = fps
        .secs_to_frames_floor(SETTLE_HORIZON_SECS)
        .clamp(1, SETTLE_HORIZON_MAX_FRAMES);
    let unit = Spring::new(config);
    let distance = |f: u64| (1.0 - unit.sample(f as f64, fps)).abs();
    let exceeded = |f: u64| {
        PromoError::animation(format!(
            "spring did not settle within {f} frames (damping {}, threshold {threshold})",
            config.damping
        ))
    };

    let mut frame = 0u64;
    while distance(frame) >= threshold {
        frame += 1;
        if frame > horizon {
            return Err(exceeded(frame));
        }
    }

    let mut settled_at = frame;
    let mut stable = 0u32;
    while stable < SETTLE_WINDOW_FRAMES {
        frame += 1;
        if frame > horizon {
            return Err(exceeded(frame));
        }
        if distance(frame) >= threshold {
            stable = 0;
            settled_at = frame + 1;
        } else {
            stable += 1;
        }
    }

    Ok(settled_at)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
