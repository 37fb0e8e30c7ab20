//! Static documentation content rendered by the demo

pub struct Chapter {
    pub id: &'static str,
    pub title: &'static str,
    pub topics: &'static [&'static str],
}

pub const CHAPTERS: &[Chapter] = &[
    Chapter {
        id: "getting-started",
        title: "Getting Started",
        topics: &["Installation", "First Page", "Markup Contract"],
    },
    Chapter {
        id: "options",
        title: "Options",
        topics: &["Breakpoint", "Orientation", "Position", "Min Heights", "Tracking"],
    },
    Chapter {
        id: "scrolling",
        title: "Scrolling",
        topics: &["Ceiling", "Upper Bound", "Release Conditions", "Animation Frames"],
    },
    Chapter {
        id: "sections",
        title: "Sections",
        topics: &["Qualifying Clicks", "Open Class"],
    },
    Chapter {
        id: "lifecycle",
        title: "Lifecycle",
        topics: &["Activation", "Deactivation", "Re-activation", "Refresh"],
    },
];

pub const PARAGRAPH: &str = "The navigation column follows the page as it scrolls, \
    but never rises above its resting offset and never leaves empty space below \
    its last entry while the content column is still taller than it. Expanding a \
    section grows the column, which moves the point at which it stops.";
