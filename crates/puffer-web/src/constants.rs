// DOM contract: element ids, class names and assets consumed by the widget.
// The page defines these; the widget only looks them up.

pub const SPRITE_ID: &str = "puffer";
pub const STAGE_ID: &str = "stage";

// Optional controls; silently skipped when absent.
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const SOUND_TOGGLE_ID: &str = "sound-toggle";
pub const SHARE_BUTTON_ID: &str = "share-button";

pub const PUFFED_CLASS: &str = "puffed";
pub const BUBBLE_CLASS: &str = "bubble";
pub const PRESSED_CLASS: &str = "on";

// CSS custom property the bubble animation reads for its heart color.
pub const HEART_COLOR_PROP: &str = "--heart";

pub const MUSIC_SRC: &str = "lofi.mp3";
pub const COPIED_LABEL: &str = "Copied!";
