use eframe::egui::{Context, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Slate theme close to the hosted mockups
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.subsection_heading;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.hyperlink_color = UI_CONFIG.colors.accent;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent.linear_multiply(0.4);

    ctx.set_visuals(visuals);
}

/// Formats a token amount with thousands separators; drops the fraction for
/// whole numbers ("400,000" / "12,500.5").
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let abs = amount.abs();
    let whole = abs.trunc() as u128;
    let frac = abs.fract();

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac > 1e-9 {
        out.push_str(&format!("{:.1}", frac)[1..]);
    }
    out
}

/// Shortens a hex address/hash for display: "0x742d...f44e".
pub fn shorten_hex(value: &str) -> String {
    if value.len() <= 12 {
        return value.to_string();
    }
    format!("{}...{}", &value[..6], &value[value.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(400_000.0), "400,000");
        assert_eq!(format_amount(500_000_000.0), "500,000,000");
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(-12_500.0), "-12,500");
    }

    #[test]
    fn test_shorten_hex() {
        assert_eq!(
            shorten_hex("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"),
            "0x742d...f44e"
        );
        assert_eq!(shorten_hex("0xabc"), "0xabc");
    }
}
