use std::f64::consts::PI;

/// Ease-in/ease-out kernels used to blend between two constant velocities.
///
/// Every kernel maps normalized window progress `t` in `[0, 1]` to a blend factor with
/// `value(0) = 0` and `value(1) = 1`, and exposes its exact derivative and antiderivative so
/// window contributions can be integrated in closed form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseInOut {
    /// Linear blend.
    #[default]
    Linear,
    /// Half-period sine blend.
    Sine,
    /// Quadratic ease-in/out.
    Quadratic,
    /// Cubic ease-in/out.
    Cubic,
}

impl EaseInOut {
    /// All built-in kernels, in declaration order.
    pub const ALL: [EaseInOut; 4] = [Self::Linear, Self::Sine, Self::Quadratic, Self::Cubic];

    /// Blend factor at normalized progress `t` (clamped to `[0, 1]`).
    pub fn value(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Sine => 0.5 * (1.0 + (PI * (t - 0.5)).sin()),
            Self::Quadratic => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t).powi(2)
                }
            }
            Self::Cubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - 4.0 * (1.0 - t).powi(3)
                }
            }
        }
    }

    /// Exact derivative of [`EaseInOut::value`] with respect to `t`.
    pub fn derivative(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => 1.0,
            Self::Sine => 0.5 * PI * (PI * t).sin(),
            Self::Quadratic => {
                if t < 0.5 {
                    4.0 * t
                } else {
                    4.0 * (1.0 - t)
                }
            }
            Self::Cubic => {
                if t < 0.5 {
                    12.0 * t * t
                } else {
                    12.0 * (1.0 - t).powi(2)
                }
            }
        }
    }

    /// `∫₀ᵗ value(s) ds`.
    pub fn antiderivative(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => 0.5 * t * t,
            Self::Sine => 0.5 * t - (PI * t).sin() / (2.0 * PI),
            Self::Quadratic => {
                if t < 0.5 {
                    2.0 * t * t * t / 3.0
                } else {
                    t + 2.0 * (1.0 - t).powi(3) / 3.0 - 0.5
                }
            }
            Self::Cubic => {
                if t < 0.5 {
                    t.powi(4)
                } else {
                    t + (1.0 - t).powi(4) - 0.5
                }
            }
        }
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Sine => "sine",
            Self::Quadratic => "quadratic",
            Self::Cubic => "cubic",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
