/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is strictly positive.
    Positive,
    /// Residual is strictly negative.
    Negative,
    /// Residual is exactly zero (either signed zero).
    Zero,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns true if the two signs are strictly opposite.
    ///
    /// Equivalent to `a * b < 0.0` for the residuals, without the underflow
    /// that product suffers for tiny magnitudes.
    #[must_use]
    pub fn is_opposite(self, other: Sign) -> bool {
        matches!(
            (self, other),
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive)
        )
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) left: f64,
    pub(super) right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// Returns the first non-finite endpoint as the error.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, f64> {
        let [left, right] = bracket;

        if !left.is_finite() {
            return Err(left);
        }
        if !right.is_finite() {
            return Err(right);
        }

        if left <= right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }
}

/// Current search interval and the residual sign at its left end.
///
/// While a solve is running the right end always has the opposite sign,
/// so only the left sign is tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    pub(super) fn new(bounds: Bounds, left_sign: Sign) -> Self {
        Self {
            left: bounds.left,
            right: bounds.right,
            left_sign,
        }
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Keeps the half whose endpoints still differ in sign.
    pub(super) fn shrink(&mut self, mid: f64, mid_sign: Sign) {
        if self.left_sign.is_opposite(mid_sign) {
            self.right = mid;
        } else {
            self.left = mid;
            self.left_sign = mid_sign;
        }
    }
}
