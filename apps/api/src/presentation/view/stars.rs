/// Highest rating a comment can carry.
pub const MAX_RATING: f64 = 5.0;

/// Width of the filled part of a star bar, in percent, rounded to the
/// nearest ten.
pub fn star_percentage(rating: f64) -> u32 {
    let percent = rating / MAX_RATING * 100.0;
    ((percent / 10.0).round() * 10.0) as u32
}

/// CSS width for a star bar, e.g. `"60%"`.
pub fn star_width(rating: f64) -> String {
    format!("{}%", star_percentage(rating))
}
