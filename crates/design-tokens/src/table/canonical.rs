//! The built-in token set shipped with the design system.

use once_cell::sync::Lazy;

use super::color::{ColorCategory, ColorModes};
use super::tables::TokenTables;

static CANONICAL: Lazy<TokenTables> = Lazy::new(build_canonical);

impl TokenTables {
    /// The canonical, internally consistent token set.
    ///
    /// Built on first access and shared read-only afterwards.
    pub fn canonical() -> &'static TokenTables {
        &CANONICAL
    }
}

fn build_canonical() -> TokenTables {
    TokenTables::new()
        .with_color(
            ColorCategory::Background,
            ColorModes::new()
                .add("primary", "#FFFFFF", "#212121")
                .add("secondary", "#F3F3F3", "#303030")
                .add("tertiary", "#E8E8E8", "#414141")
                .add("inverse", "#0D0D0D", "#FFFFFF")
                .add("overlay", "#0D0D0D80", "#0D0D0DB3"),
        )
        .with_color(
            ColorCategory::Text,
            ColorModes::new()
                .add("primary", "#0D0D0D", "#FFFFFF")
                .add("secondary", "#5D5D5D", "#CDCDCD")
                .add("tertiary", "#8F8F8F", "#AFAFAF")
                .add("inverse", "#FFFFFF", "#0D0D0D"),
        )
        .with_color(
            ColorCategory::Icon,
            ColorModes::new()
                .add("primary", "#0D0D0D", "#FFFFFF")
                .add("secondary", "#5D5D5D", "#CDCDCD")
                .add("inverse", "#FFFFFF", "#0D0D0D"),
        )
        .with_color(
            ColorCategory::Border,
            ColorModes::new()
                .add("default", "#0D0D0D1A", "#FFFFFF26")
                .add("heavy", "#0D0D0D26", "#FFFFFF33")
                .add("focus", "#0285FF", "#3E9BFF"),
        )
        .with_color(
            ColorCategory::Accent,
            ColorModes::new()
                .add("primary", "#0285FF", "#3E9BFF")
                .add("success", "#00A240", "#40C977")
                .add("warning", "#E25507", "#FF8549")
                .add("danger", "#E02E2A", "#FF6764"),
        )
        .with_color(
            ColorCategory::Interactive,
            ColorModes::new()
                .add("primary", "#0D0D0D", "#FFFFFF")
                .add("primaryHover", "#5D5D5D", "#E8E8E8")
                .add("secondary", "#F3F3F3", "#303030")
                .add("disabled", "#0D0D0D1A", "#FFFFFF1A"),
        )
        .with_space([0.0, 2.0, 4.0, 6.0, 8.0, 12.0, 16.0, 20.0, 24.0, 32.0, 40.0, 48.0, 64.0])
        .with_radius("none", 0u32)
        .with_radius("xs", 4u32)
        .with_radius("sm", 6u32)
        .with_radius("md", 8u32)
        .with_radius("lg", 12u32)
        .with_radius("xl", 16u32)
        .with_radius("full", 9999u32)
        .with_shadow("sm", "0 1px 2px rgba(0, 0, 0, 0.05)")
        .with_shadow("md", "0 4px 12px rgba(0, 0, 0, 0.08)")
        .with_shadow("lg", "0 12px 32px rgba(0, 0, 0, 0.12)")
        .with_size("controlSm", 28u32)
        .with_size("controlMd", 32u32)
        .with_size("controlLg", 40u32)
        .with_size("icon", 20u32)
        .with_font_family(
            "ui-sans-serif, -apple-system, system-ui, \"Segoe UI\", Helvetica, Arial, sans-serif",
        )
        .with_type("fontSizeCaption", 12u32)
        .with_type("fontSizeBody", 16u32)
        .with_type("fontSizeHeading", 24u32)
        .with_type("lineHeightBody", 24u32)
        .with_type("fontWeightRegular", 400u32)
        .with_type("fontWeightSemibold", 600u32)
        .with_motion("durationFast", 150u32)
        .with_motion("durationBase", 250u32)
        .with_motion("durationSlow", 400u32)
        .with_motion("easingStandard", "cubic-bezier(0.2, 0, 0, 1)")
}
