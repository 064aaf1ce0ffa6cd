use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Optional regions and behaviors of a print pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PrintOptions: u32 {
        /// Honor the plot's configured outer margin in layout.
        const PRINT_MARGIN = 1;
        /// Reserve and draw the title region.
        const PRINT_TITLE = 1 << 1;
        /// Reserve and draw the legend region.
        const PRINT_LEGEND = 1 << 2;
        /// Passed through to the canvas content renderer.
        const PRINT_GRID = 1 << 3;
        /// Fill the canvas background before content.
        const PRINT_BACKGROUND = 1 << 4;
        /// Zero axis margins for layout and outline the canvas.
        const PRINT_FRAME_WITH_SCALES = 1 << 5;

        /// Everything except `PRINT_FRAME_WITH_SCALES`.
        const PRINT_ALL = Self::PRINT_MARGIN.bits()
            | Self::PRINT_TITLE.bits()
            | Self::PRINT_LEGEND.bits()
            | Self::PRINT_GRID.bits()
            | Self::PRINT_BACKGROUND.bits();
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::PRINT_ALL
    }
}

bitflags! {
    /// Flags understood by a [`LayoutEngine`](crate::api::LayoutEngine).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct LayoutOptions: u32 {
        const IGNORE_SCROLLBARS = 1;
        const IGNORE_FRAMES = 1 << 1;
        const IGNORE_MARGIN = 1 << 2;
        const IGNORE_LEGEND = 1 << 3;
        const IGNORE_TITLE = 1 << 4;
    }
}

impl LayoutOptions {
    /// Translates print options into layout options.
    ///
    /// Prints have no interactive chrome, so frames and scrollbars are always
    /// ignored; margin, legend and title are ignored when not printed.
    #[must_use]
    pub fn for_print(options: PrintOptions) -> Self {
        let mut layout = LayoutOptions::IGNORE_SCROLLBARS | LayoutOptions::IGNORE_FRAMES;
        if !options.contains(PrintOptions::PRINT_MARGIN) {
            layout |= LayoutOptions::IGNORE_MARGIN;
        }
        if !options.contains(PrintOptions::PRINT_LEGEND) {
            layout |= LayoutOptions::IGNORE_LEGEND;
        }
        if !options.contains(PrintOptions::PRINT_TITLE) {
            layout |= LayoutOptions::IGNORE_TITLE;
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutOptions, PrintOptions};

    #[test]
    fn print_all_excludes_frame_with_scales() {
        let all = PrintOptions::PRINT_ALL;
        assert!(all.contains(PrintOptions::PRINT_BACKGROUND | PrintOptions::PRINT_GRID));
        assert!(!all.contains(PrintOptions::PRINT_FRAME_WITH_SCALES));
        assert_eq!(PrintOptions::default(), all);
    }

    #[test]
    fn layout_always_ignores_interactive_chrome() {
        let layout = LayoutOptions::for_print(PrintOptions::all());
        assert_eq!(
            layout,
            LayoutOptions::IGNORE_SCROLLBARS | LayoutOptions::IGNORE_FRAMES
        );
    }

    #[test]
    fn missing_print_flags_become_ignore_flags() {
        let layout = LayoutOptions::for_print(PrintOptions::PRINT_TITLE);
        assert!(layout.contains(LayoutOptions::IGNORE_MARGIN));
        assert!(layout.contains(LayoutOptions::IGNORE_LEGEND));
        assert!(!layout.contains(LayoutOptions::IGNORE_TITLE));
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = PrintOptions::PRINT_TITLE | PrintOptions::PRINT_FRAME_WITH_SCALES;
        let json = serde_json::to_string(&options).expect("serialize");
        let parsed: PrintOptions = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, options);
    }
}
