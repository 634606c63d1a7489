//! `viewBox` attribute parsing.

/// The four numbers of an SVG `viewBox`: `min-x min-y width height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Parse whitespace-separated numbers. Tokens after the fourth are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let mut numbers = value.split_whitespace().map(|token| token.parse::<f64>().ok());
        let mut next = || numbers.next().flatten();

        Some(Self {
            min_x: next()?,
            min_y: next()?,
            width: next()?,
            height: next()?,
        })
    }

    /// Whether width and height can serve as an aspect-ratio reference:
    /// finite and strictly positive.
    ///
    /// Stricter than "present and non-zero": negative and infinite sizes are
    /// rejected too, since SVG treats a negative `viewBox` size as an error
    /// and an infinite one gives no usable ratio. Callers get the input back
    /// unchanged for all of these.
    pub fn has_usable_size(&self) -> bool {
        usable(self.width) && usable(self.height)
    }

    /// `width / height`.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

fn usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
