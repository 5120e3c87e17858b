use std::fmt;

/// An sRGB color as it appears in the rating gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Vertical two-stop gradient used to paint a rating bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl Gradient {
    const fn solid(color: Rgb) -> Self {
        Self {
            top: color,
            bottom: color,
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top == self.bottom {
            write!(f, "{}", self.top)
        } else {
            write!(f, "{}..{}", self.top, self.bottom)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    /// Below 60%.
    Low,
    /// 60% up to and including 80%.
    Good,
    /// Above 80% up to and including 90%.
    Great,
    /// Above 90%.
    Top,
    /// No percentage could be computed.
    Unstyled,
}

impl RatingBand {
    #[must_use]
    pub fn gradient(self) -> Option<Gradient> {
        match self {
            RatingBand::Low => Some(Gradient {
                top: Rgb(0xfe, 0xfc, 0xea),
                bottom: Rgb(0xf1, 0xda, 0x36),
            }),
            RatingBand::Good => Some(Gradient::solid(Rgb(0xb4, 0xdf, 0x5b))),
            RatingBand::Great => Some(Gradient::solid(Rgb(0x29, 0x9a, 0x0b))),
            RatingBand::Top => Some(Gradient::solid(Rgb(0xff, 0x00, 0x84))),
            RatingBand::Unstyled => None,
        }
    }
}

/// `rating * 10` rounded half away from zero; `None` for NaN or infinite ratings.
#[must_use]
pub fn rating_percentage(rating: f64) -> Option<i64> {
    let scaled = (rating * 10.0).round();
    if !scaled.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let percentage = scaled as i64;
    Some(percentage)
}

/// First matching branch wins, so exactly 80 lands in `Good`.
#[must_use]
pub fn band_for_percentage(percentage: i64) -> RatingBand {
    if percentage < 60 {
        RatingBand::Low
    } else if percentage <= 80 {
        RatingBand::Good
    } else if percentage <= 90 {
        RatingBand::Great
    } else {
        RatingBand::Top
    }
}

/// Width and color of a book's rating bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingStyle {
    pub percentage: i64,
    pub band: RatingBand,
}

impl RatingStyle {
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        match rating_percentage(rating) {
            Some(percentage) => Self {
                percentage,
                band: band_for_percentage(percentage),
            },
            None => Self {
                percentage: 0,
                band: RatingBand::Unstyled,
            },
        }
    }

    /// Percentage of the bar track to fill, clamped for drawing.
    #[must_use]
    pub fn fill_percent(&self) -> u16 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let clamped = self.percentage.clamp(0, 100) as u16;
        clamped
    }

    /// Number of cells to fill on a track `track_width` cells wide.
    #[must_use]
    pub fn filled_cells(&self, track_width: usize) -> usize {
        track_width * usize::from(self.fill_percent()) / 100
    }

    #[must_use]
    pub fn background(&self) -> Option<Gradient> {
        self.band.gradient()
    }
}
