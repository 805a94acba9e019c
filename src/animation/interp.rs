/// Piecewise-linear map from `input_range` knots to `output_range` knots, holding the boundary
/// output outside the outermost knots.
///
/// Knots must be non-decreasing in `input_range`. Extra knots on the longer side are ignored;
/// fewer than two usable knots degrade to a constant (or to the input when there are none).
pub fn interpolate(input: f64, input_range: &[f64], output_range: &[f64]) -> f64 {
    let n = input_range.len().min(output_range.len());
    match n {
        0 => return input,
        1 => return output_range[0],
        _ => {}
    }

    // Segment whose right knot is the first one >= input; the last segment otherwise.
    let mut seg = 1;
    while seg < n - 1 && input_range[seg] < input {
        seg += 1;
    }
    let (x0, x1) = (input_range[seg - 1], input_range[seg]);
    let (y0, y1) = (output_range[seg - 1], output_range[seg]);

    if input < x0 {
        return y0;
    }
    if input > x1 {
        return y1;
    }

    let span = x1 - x0;
    if span == 0.0 {
        return y1;
    }
    y0 + (y1 - y0) * ((input - x0) / span)
}

/// Two-knot [`interpolate`].
pub fn remap_clamped(input: f64, from: [f64; 2], to: [f64; 2]) -> f64 {
    interpolate(input, &from, &to)
}

/// Serializable knot table.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Knots {
    /// Non-decreasing input knots.
    pub input: Vec<f64>,
    /// Output value at each input knot.
    pub output: Vec<f64>,
}

impl Knots {
    /// Sample the table at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        interpolate(x, &self.input, &self.output)
    }

    /// Whether every knot is finite and the inputs are non-decreasing.
    pub fn is_well_formed(&self) -> bool {
        self.input.len() >= 2
            && self.input.len() == self.output.len()
            && self.input.iter().chain(&self.output).all(|v| v.is_finite())
            && self.input.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
