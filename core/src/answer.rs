use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// "No" answers after which the button is gone.
pub const NO_CLICK_LIMIT: u32 = 5;

const BASE_PADDING_PX: f32 = 12.0;
const BASE_FONT_REM: f32 = 3.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyle {
    /// Vertical then horizontal padding.
    pub padding_px: (f32, f32),
    pub font_rem: f32,
    pub opacity: f32,
}

impl ButtonStyle {
    pub fn css(&self) -> String {
        let (vertical, horizontal) = self.padding_px;
        format!(
            "padding: {}px {}px; font-size: {}rem; opacity: {}",
            vertical, horizontal, self.font_rem, self.opacity
        )
    }
}

pub fn yes_style(no_clicks: u32) -> ButtonStyle {
    let n = no_clicks as f32;
    ButtonStyle {
        padding_px: (BASE_PADDING_PX + n * 4.0, BASE_PADDING_PX * 2.0 + n * 8.0),
        font_rem: BASE_FONT_REM + n * 0.5,
        opacity: 1.0,
    }
}

/// Style of the "No" button, or `None` once it ran away for good.
pub fn no_style(no_clicks: u32) -> Option<ButtonStyle> {
    if !no_available(no_clicks) {
        return None;
    }

    let n = no_clicks as f32;
    Some(ButtonStyle {
        padding_px: (
            (BASE_PADDING_PX - n * 4.0).max(4.0),
            (BASE_PADDING_PX * 2.0 - n * 8.0).max(8.0),
        ),
        font_rem: (BASE_FONT_REM - n * 0.5).max(0.5),
        opacity: (1.0 - n * 0.2).max(0.0),
    })
}

pub const fn no_available(no_clicks: u32) -> bool {
    no_clicks < NO_CLICK_LIMIT
}

pub const fn taunt(no_clicks: u32) -> &'static str {
    match no_clicks {
        0 => "you can't click no btw!!",
        1 => "why did you click no :(",
        _ => "wow ok",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_buttons_share_the_base_size() {
        let yes = yes_style(0);
        let no = no_style(0).unwrap();
        assert_eq!(yes.padding_px, (12.0, 24.0));
        assert_eq!(yes, ButtonStyle { opacity: 1.0, ..no });
    }

    #[test]
    fn yes_grows_and_no_shrinks_with_each_refusal() {
        for n in 1..NO_CLICK_LIMIT {
            let (before, after) = (no_style(n - 1).unwrap(), no_style(n).unwrap());
            assert!(after.opacity < before.opacity);
            assert!(after.font_rem < before.font_rem);
            assert!(yes_style(n).font_rem > yes_style(n - 1).font_rem);
        }
    }

    #[test]
    fn no_padding_bottoms_out() {
        let style = no_style(4).unwrap();
        assert_eq!(style.padding_px, (4.0, 8.0));
        assert_eq!(style.font_rem, 1.0);
    }

    #[test]
    fn no_disappears_at_the_limit() {
        assert!(no_style(NO_CLICK_LIMIT - 1).is_some());
        assert_eq!(no_style(NO_CLICK_LIMIT), None);
        assert_eq!(no_style(u32::MAX), None);
    }

    #[test]
    fn taunt_escalates() {
        assert_eq!(taunt(0), "you can't click no btw!!");
        assert_eq!(taunt(1), "why did you click no :(");
        assert_eq!(taunt(2), "wow ok");
        assert_eq!(taunt(40), "wow ok");
    }

    #[test]
    fn css_lists_every_property() {
        assert_eq!(
            yes_style(1).css(),
            "padding: 16px 32px; font-size: 3.5rem; opacity: 1"
        );
    }
}
