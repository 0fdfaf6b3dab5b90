pub const STAR_COUNT: u8 = 5;

/// The value the stars should show: the hover preview while one is active,
/// otherwise the committed rating.
pub fn display_rating(committed: u8, hover: Option<u8>) -> u8 {
    hover.unwrap_or(committed)
}

/// Fill state for each star, first to fifth.
pub fn star_fill(committed: u8, hover: Option<u8>) -> [bool; STAR_COUNT as usize] {
    let shown = display_rating(committed, hover);
    let mut stars = [false; STAR_COUNT as usize];
    for (index, star) in stars.iter_mut().enumerate() {
        *star = (index as u8) < shown;
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_selected_means_nothing_filled() {
        assert_eq!(star_fill(0, None), [false; 5]);
    }

    #[test]
    fn committed_rating_fills_a_prefix() {
        assert_eq!(star_fill(3, None), [true, true, true, false, false]);
        assert_eq!(star_fill(5, None), [true; 5]);
    }

    #[test]
    fn hover_previews_without_touching_the_committed_value() {
        assert_eq!(star_fill(2, Some(5)), [true; 5]);
        assert_eq!(star_fill(4, Some(1)), [true, false, false, false, false]);
    }

    #[test]
    fn leaving_after_any_hover_restores_the_committed_fill() {
        let committed = 2;
        for hover in 1..=STAR_COUNT {
            let _ = star_fill(committed, Some(hover));
            assert_eq!(star_fill(committed, None), [true, true, false, false, false]);
        }
    }

    #[test]
    fn hover_previews_even_with_no_committed_rating() {
        assert_eq!(star_fill(0, Some(3)), [true, true, true, false, false]);
        assert_eq!(star_fill(0, None), [false; 5]);
    }
}
