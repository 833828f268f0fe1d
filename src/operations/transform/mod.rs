mod normalize_display;

pub use normalize_display::NormalizeForDisplay;
