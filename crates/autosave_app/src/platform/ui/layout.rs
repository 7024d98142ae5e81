use super::constants::{
    ABOUT_PADDING, AUTHOR_BUTTON_WIDTH, BUTTON_GAP, BUTTON_HEIGHT, MIN_CONTROL_EXTENT,
    REPO_BUTTON_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Client area minus uniform padding, clamped so a shrunken window never
/// yields a degenerate control.
pub fn padded_fill(width: i32, height: i32, pad: i32) -> Rect {
    Rect {
        x: pad,
        y: pad,
        width: (width - pad * 2).max(MIN_CONTROL_EXTENT),
        height: (height - pad * 2).max(MIN_CONTROL_EXTENT),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutLayout {
    pub text: Rect,
    pub repo_button: Rect,
    pub author_button: Rect,
}

/// Text area on top, the two link buttons in a row along the bottom.
pub fn about_layout(width: i32, height: i32) -> AboutLayout {
    let pad = ABOUT_PADDING;
    let text_width = (width - pad * 2).max(MIN_CONTROL_EXTENT);
    let text_height = (height - pad * 3 - BUTTON_HEIGHT).max(MIN_CONTROL_EXTENT);
    let button_y = pad + text_height + pad;

    AboutLayout {
        text: Rect {
            x: pad,
            y: pad,
            width: text_width,
            height: text_height,
        },
        repo_button: Rect {
            x: pad,
            y: button_y,
            width: REPO_BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        },
        author_button: Rect {
            x: pad + REPO_BUTTON_WIDTH + BUTTON_GAP,
            y: button_y,
            width: AUTHOR_BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_fill_leaves_uniform_margins() {
        let rect = padded_fill(560, 320, 10);
        assert_eq!(
            rect,
            Rect {
                x: 10,
                y: 10,
                width: 540,
                height: 300,
            }
        );
    }

    #[test]
    fn padded_fill_clamps_tiny_windows() {
        let rect = padded_fill(8, 4, 10);
        assert_eq!(rect.width, MIN_CONTROL_EXTENT);
        assert_eq!(rect.height, MIN_CONTROL_EXTENT);
    }

    #[test]
    fn about_buttons_sit_below_the_text_area() {
        let layout = about_layout(640, 460);

        assert_eq!(layout.text.y + layout.text.height + ABOUT_PADDING, layout.repo_button.y);
        assert_eq!(layout.repo_button.y, layout.author_button.y);
        assert_eq!(
            layout.author_button.x,
            layout.repo_button.x + REPO_BUTTON_WIDTH + BUTTON_GAP
        );
        // Button row stays inside the window.
        assert!(layout.repo_button.y + BUTTON_HEIGHT <= 460);
    }

    #[test]
    fn about_layout_clamps_tiny_windows() {
        let layout = about_layout(10, 10);
        assert_eq!(layout.text.width, MIN_CONTROL_EXTENT);
        assert_eq!(layout.text.height, MIN_CONTROL_EXTENT);
    }
}
