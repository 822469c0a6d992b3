//! Caption box placement

/// Margin between the caption box and the image edges, in pixels.
pub const BOX_MARGIN: i32 = 20;

/// Derived geometry of the translucent caption box.
///
/// Recomputed for every request from the base image's dimensions; never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptionBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub corner_radius: i32,
}

impl CaptionBox {
    /// Anchor the box to the bottom quarter of the image, independent of
    /// resolution.
    pub fn for_image(width: u32, height: u32) -> Self {
        let width = width as i32;
        let height = height as i32;
        let box_height = (height as f64 * 0.25).floor() as i32;

        CaptionBox {
            left: BOX_MARGIN,
            top: height - box_height - BOX_MARGIN,
            width: width - BOX_MARGIN * 2,
            height: box_height,
            corner_radius: 15,
        }
    }

    /// Lowest y a text baseline may occupy (exclusive); lines at or past it
    /// are dropped.
    pub fn text_floor(&self) -> i32 {
        self.top + self.height - 15
    }
}
