/// CSS color grammar: candidate validation and RGB resolution.
use std::collections::HashMap;
use std::sync::LazyLock;

use rand::RngExt;

/// Validation capability over candidate strings. The preview only needs a
/// yes/no answer, so any grammar with this shape can be swapped in.
pub trait ColorGrammar {
    fn is_valid(&self, candidate: &str) -> bool;
}

/// Browser-style CSS grammar: named colors, hex and functional forms.
#[derive(Clone, Copy, Debug, Default)]
pub struct CssGrammar;

impl ColorGrammar for CssGrammar {
    fn is_valid(&self, candidate: &str) -> bool {
        is_valid_color(candidate)
    }
}

/// Validate if a string is an acceptable CSS color.
pub fn is_valid_color(candidate: &str) -> bool {
    parse_css_color(candidate).is_some()
}

/// Parse a CSS color into an opaque RGB triple.
///
/// Accepted forms:
/// * named colors (the full CSS keyword table) and `transparent`
/// * `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
/// * `rgb()` / `rgba()` with comma- or space-separated channels
/// * `hsl()` / `hsla()` with hue in degrees
///
/// Matching is case-insensitive and surrounding whitespace is ignored.
/// Alpha components are accepted and discarded; the terminal preview has no
/// compositing. Out-of-range channels are clamped, as browsers do.
pub fn parse_css_color(candidate: &str) -> Option<(u8, u8, u8)> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex);
    }
    if trimmed.contains('(') {
        return parse_function(trimmed);
    }
    let lowered = trimmed.to_ascii_lowercase();
    if lowered == "transparent" {
        return Some((0, 0, 0));
    }
    NAMED_COLORS.get(lowered.as_str()).copied()
}

/// Pick a suggestion from a fixed palette of named colors.
pub fn random_color() -> &'static str {
    const PALETTE: &[&str] = &[
        "tomato", "gold", "mediumseagreen", "cornflowerblue", "orchid",
        "turquoise", "salmon", "slateblue", "chartreuse", "hotpink",
        "peru", "teal", "crimson", "skyblue",
    ];
    let mut rng = rand::rng();
    PALETTE[rng.random_range(0..PALETTE.len())]
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };
    let bytes = hex.as_bytes();
    match bytes.len() {
        // #RGB and #RGBA expand each nibble, alpha dropped
        3 | 4 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            if bytes.len() == 4 {
                nibble(bytes[3])?;
            }
            Some((r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let mut values = [0u8; 4];
            for (i, value) in values.iter_mut().enumerate().take(bytes.len() / 2) {
                *value = nibble(bytes[i * 2])? * 16 + nibble(bytes[i * 2 + 1])?;
            }
            Some((values[0], values[1], values[2]))
        }
        _ => None,
    }
}

fn parse_function(s: &str) -> Option<(u8, u8, u8)> {
    let body = s.strip_suffix(')')?;
    let open = body.find('(')?;
    let name = body[..open].trim().to_ascii_lowercase();
    let args = &body[open + 1..];

    // Modern syntax carries alpha after a slash: rgb(0 0 0 / 50%).
    let (channels, slash_alpha) = match args.split_once('/') {
        Some((c, a)) => (c, Some(a)),
        None => (args, None),
    };
    let mut parts: Vec<&str> = if channels.contains(',') {
        channels.split(',').map(str::trim).collect()
    } else {
        channels.split_whitespace().collect()
    };
    let alpha = match slash_alpha {
        Some(a) => Some(a.trim()),
        None if parts.len() == 4 => parts.pop(),
        None => None,
    };
    if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
        return None;
    }
    if let Some(alpha) = alpha {
        parse_number(alpha.strip_suffix('%').unwrap_or(alpha))?;
    }

    match name.as_str() {
        "rgb" | "rgba" => {
            let r = parse_channel(parts[0])?;
            let g = parse_channel(parts[1])?;
            let b = parse_channel(parts[2])?;
            Some((r, g, b))
        }
        "hsl" | "hsla" => {
            let h = parse_hue(parts[0])?;
            let s = parse_fraction(parts[1])?;
            let l = parse_fraction(parts[2])?;
            Some(hsl_to_rgb(h, s, l))
        }
        _ => None,
    }
}

fn parse_number(value: &str) -> Option<f32> {
    let parsed: f32 = value.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// One rgb() channel: an integer, float or percentage, clamped to 0..=255.
fn parse_channel(value: &str) -> Option<u8> {
    let scaled = match value.strip_suffix('%') {
        Some(percent) => parse_number(percent)? * 255.0 / 100.0,
        None => parse_number(value)?,
    };
    Some(scaled.clamp(0.0, 255.0).round() as u8)
}

/// Hue in degrees, with or without the `deg` suffix, wrapped into 0..360.
fn parse_hue(value: &str) -> Option<f32> {
    let lowered = value.to_ascii_lowercase();
    let number = lowered.strip_suffix("deg").unwrap_or(&lowered).trim();
    Some(parse_number(number)?.rem_euclid(360.0))
}

/// Saturation or lightness as a percentage (or bare number), as 0.0..=1.0.
fn parse_fraction(value: &str) -> Option<f32> {
    let percent = value.strip_suffix('%').unwrap_or(value);
    Some(parse_number(percent)?.clamp(0.0, 100.0) / 100.0)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    if s == 0.0 {
        let gray = (l * 255.0).round() as u8;
        return (gray, gray, gray);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;
    let channel = |t: f32| -> u8 {
        let t = t.rem_euclid(1.0);
        let value = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (value * 255.0).round() as u8
    };
    (
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    )
}

static NAMED_COLORS: LazyLock<HashMap<&'static str, (u8, u8, u8)>> = LazyLock::new(|| {
    HashMap::from([
        ("aliceblue", (0xF0, 0xF8, 0xFF)),
        ("antiquewhite", (0xFA, 0xEB, 0xD7)),
        ("aqua", (0x00, 0xFF, 0xFF)),
        ("aquamarine", (0x7F, 0xFF, 0xD4)),
        ("azure", (0xF0, 0xFF, 0xFF)),
        ("beige", (0xF5, 0xF5, 0xDC)),
        ("bisque", (0xFF, 0xE4, 0xC4)),
        ("black", (0x00, 0x00, 0x00)),
        ("blanchedalmond", (0xFF, 0xEB, 0xCD)),
        ("blue", (0x00, 0x00, 0xFF)),
        ("blueviolet", (0x8A, 0x2B, 0xE2)),
        ("brown", (0xA5, 0x2A, 0x2A)),
        ("burlywood", (0xDE, 0xB8, 0x87)),
        ("cadetblue", (0x5F, 0x9E, 0xA0)),
        ("chartreuse", (0x7F, 0xFF, 0x00)),
        ("chocolate", (0xD2, 0x69, 0x1E)),
        ("coral", (0xFF, 0x7F, 0x50)),
        ("cornflowerblue", (0x64, 0x95, 0xED)),
        ("cornsilk", (0xFF, 0xF8, 0xDC)),
        ("crimson", (0xDC, 0x14, 0x3C)),
        ("cyan", (0x00, 0xFF, 0xFF)),
        ("darkblue", (0x00, 0x00, 0x8B)),
        ("darkcyan", (0x00, 0x8B, 0x8B)),
        ("darkgoldenrod", (0xB8, 0x86, 0x0B)),
        ("darkgray", (0xA9, 0xA9, 0xA9)),
        ("darkgreen", (0x00, 0x64, 0x00)),
        ("darkgrey", (0xA9, 0xA9, 0xA9)),
        ("darkkhaki", (0xBD, 0xB7, 0x6B)),
        ("darkmagenta", (0x8B, 0x00, 0x8B)),
        ("darkolivegreen", (0x55, 0x6B, 0x2F)),
        ("darkorange", (0xFF, 0x8C, 0x00)),
        ("darkorchid", (0x99, 0x32, 0xCC)),
        ("darkred", (0x8B, 0x00, 0x00)),
        ("darksalmon", (0xE9, 0x96, 0x7A)),
        ("darkseagreen", (0x8F, 0xBC, 0x8F)),
        ("darkslateblue", (0x48, 0x3D, 0x8B)),
        ("darkslategray", (0x2F, 0x4F, 0x4F)),
        ("darkslategrey", (0x2F, 0x4F, 0x4F)),
        ("darkturquoise", (0x00, 0xCE, 0xD1)),
        ("darkviolet", (0x94, 0x00, 0xD3)),
        ("deeppink", (0xFF, 0x14, 0x93)),
        ("deepskyblue", (0x00, 0xBF, 0xFF)),
        ("dimgray", (0x69, 0x69, 0x69)),
        ("dimgrey", (0x69, 0x69, 0x69)),
        ("dodgerblue", (0x1E, 0x90, 0xFF)),
        ("firebrick", (0xB2, 0x22, 0x22)),
        ("floralwhite", (0xFF, 0xFA, 0xF0)),
        ("forestgreen", (0x22, 0x8B, 0x22)),
        ("fuchsia", (0xFF, 0x00, 0xFF)),
        ("gainsboro", (0xDC, 0xDC, 0xDC)),
        ("ghostwhite", (0xF8, 0xF8, 0xFF)),
        ("gold", (0xFF, 0xD7, 0x00)),
        ("goldenrod", (0xDA, 0xA5, 0x20)),
        ("gray", (0x80, 0x80, 0x80)),
        ("green", (0x00, 0x80, 0x00)),
        ("greenyellow", (0xAD, 0xFF, 0x2F)),
        ("grey", (0x80, 0x80, 0x80)),
        ("honeydew", (0xF0, 0xFF, 0xF0)),
        ("hotpink", (0xFF, 0x69, 0xB4)),
        ("indianred", (0xCD, 0x5C, 0x5C)),
        ("indigo", (0x4B, 0x00, 0x82)),
        ("ivory", (0xFF, 0xFF, 0xF0)),
        ("khaki", (0xF0, 0xE6, 0x8C)),
        ("lavender", (0xE6, 0xE6, 0xFA)),
        ("lavenderblush", (0xFF, 0xF0, 0xF5)),
        ("lawngreen", (0x7C, 0xFC, 0x00)),
        ("lemonchiffon", (0xFF, 0xFA, 0xCD)),
        ("lightblue", (0xAD, 0xD8, 0xE6)),
        ("lightcoral", (0xF0, 0x80, 0x80)),
        ("lightcyan", (0xE0, 0xFF, 0xFF)),
        ("lightgoldenrodyellow", (0xFA, 0xFA, 0xD2)),
        ("lightgray", (0xD3, 0xD3, 0xD3)),
        ("lightgreen", (0x90, 0xEE, 0x90)),
        ("lightgrey", (0xD3, 0xD3, 0xD3)),
        ("lightpink", (0xFF, 0xB6, 0xC1)),
        ("lightsalmon", (0xFF, 0xA0, 0x7A)),
        ("lightseagreen", (0x20, 0xB2, 0xAA)),
        ("lightskyblue", (0x87, 0xCE, 0xFA)),
        ("lightslategray", (0x77, 0x88, 0x99)),
        ("lightslategrey", (0x77, 0x88, 0x99)),
        ("lightsteelblue", (0xB0, 0xC4, 0xDE)),
        ("lightyellow", (0xFF, 0xFF, 0xE0)),
        ("lime", (0x00, 0xFF, 0x00)),
        ("limegreen", (0x32, 0xCD, 0x32)),
        ("linen", (0xFA, 0xF0, 0xE6)),
        ("magenta", (0xFF, 0x00, 0xFF)),
        ("maroon", (0x80, 0x00, 0x00)),
        ("mediumaquamarine", (0x66, 0xCD, 0xAA)),
        ("mediumblue", (0x00, 0x00, 0xCD)),
        ("mediumorchid", (0xBA, 0x55, 0xD3)),
        ("mediumpurple", (0x93, 0x70, 0xDB)),
        ("mediumseagreen", (0x3C, 0xB3, 0x71)),
        ("mediumslateblue", (0x7B, 0x68, 0xEE)),
        ("mediumspringgreen", (0x00, 0xFA, 0x9A)),
        ("mediumturquoise", (0x48, 0xD1, 0xCC)),
        ("mediumvioletred", (0xC7, 0x15, 0x85)),
        ("midnightblue", (0x19, 0x19, 0x70)),
        ("mintcream", (0xF5, 0xFF, 0xFA)),
        ("mistyrose", (0xFF, 0xE4, 0xE1)),
        ("moccasin", (0xFF, 0xE4, 0xB5)),
        ("navajowhite", (0xFF, 0xDE, 0xAD)),
        ("navy", (0x00, 0x00, 0x80)),
        ("oldlace", (0xFD, 0xF5, 0xE6)),
        ("olive", (0x80, 0x80, 0x00)),
        ("olivedrab", (0x6B, 0x8E, 0x23)),
        ("orange", (0xFF, 0xA5, 0x00)),
        ("orangered", (0xFF, 0x45, 0x00)),
        ("orchid", (0xDA, 0x70, 0xD6)),
        ("palegoldenrod", (0xEE, 0xE8, 0xAA)),
        ("palegreen", (0x98, 0xFB, 0x98)),
        ("paleturquoise", (0xAF, 0xEE, 0xEE)),
        ("palevioletred", (0xDB, 0x70, 0x93)),
        ("papayawhip", (0xFF, 0xEF, 0xD5)),
        ("peachpuff", (0xFF, 0xDA, 0xB9)),
        ("peru", (0xCD, 0x85, 0x3F)),
        ("pink", (0xFF, 0xC0, 0xCB)),
        ("plum", (0xDD, 0xA0, 0xDD)),
        ("powderblue", (0xB0, 0xE0, 0xE6)),
        ("purple", (0x80, 0x00, 0x80)),
        ("rebeccapurple", (0x66, 0x33, 0x99)),
        ("red", (0xFF, 0x00, 0x00)),
        ("rosybrown", (0xBC, 0x8F, 0x8F)),
        ("royalblue", (0x41, 0x69, 0xE1)),
        ("saddlebrown", (0x8B, 0x45, 0x13)),
        ("salmon", (0xFA, 0x80, 0x72)),
        ("sandybrown", (0xF4, 0xA4, 0x60)),
        ("seagreen", (0x2E, 0x8B, 0x57)),
        ("seashell", (0xFF, 0xF5, 0xEE)),
        ("sienna", (0xA0, 0x52, 0x2D)),
        ("silver", (0xC0, 0xC0, 0xC0)),
        ("skyblue", (0x87, 0xCE, 0xEB)),
        ("slateblue", (0x6A, 0x5A, 0xCD)),
        ("slategray", (0x70, 0x80, 0x90)),
        ("slategrey", (0x70, 0x80, 0x90)),
        ("snow", (0xFF, 0xFA, 0xFA)),
        ("springgreen", (0x00, 0xFF, 0x7F)),
        ("steelblue", (0x46, 0x82, 0xB4)),
        ("tan", (0xD2, 0xB4, 0x8C)),
        ("teal", (0x00, 0x80, 0x80)),
        ("thistle", (0xD8, 0xBF, 0xD8)),
        ("tomato", (0xFF, 0x63, 0x47)),
        ("turquoise", (0x40, 0xE0, 0xD0)),
        ("violet", (0xEE, 0x82, 0xEE)),
        ("wheat", (0xF5, 0xDE, 0xB3)),
        ("white", (0xFF, 0xFF, 0xFF)),
        ("whitesmoke", (0xF5, 0xF5, 0xF5)),
        ("yellow", (0xFF, 0xFF, 0x00)),
        ("yellowgreen", (0x9A, 0xCD, 0x32)),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(parse_css_color("blue"), Some((0, 0, 255)));
        assert_eq!(parse_css_color("green"), Some((0, 128, 0)));
        assert_eq!(parse_css_color("rebeccapurple"), Some((102, 51, 153)));
        assert_eq!(parse_css_color("grey"), parse_css_color("gray"));
    }

    #[test]
    fn named_colors_case_and_whitespace() {
        assert_eq!(parse_css_color("Blue"), Some((0, 0, 255)));
        assert_eq!(parse_css_color("  HOTPINK \t"), Some((0xFF, 0x69, 0xB4)));
    }

    #[test]
    fn transparent_is_accepted() {
        assert!(is_valid_color("transparent"));
        assert!(is_valid_color("Transparent"));
    }

    #[test]
    fn hex_forms() {
        assert_eq!(parse_css_color("#ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_css_color("#F00"), Some((255, 0, 0)));
        assert_eq!(parse_css_color("#abc"), Some((170, 187, 204)));
        assert_eq!(parse_css_color("#ff000080"), Some((255, 0, 0)));
        assert_eq!(parse_css_color("#f00c"), Some((255, 0, 0)));
    }

    #[test]
    fn hex_rejects_bad_lengths_and_digits() {
        assert_eq!(parse_css_color("#"), None);
        assert_eq!(parse_css_color("#12345"), None);
        assert_eq!(parse_css_color("#gggggg"), None);
        assert_eq!(parse_css_color("#1234567"), None);
    }

    #[test]
    fn rgb_functions() {
        assert_eq!(parse_css_color("rgb(255, 0, 0)"), Some((255, 0, 0)));
        assert_eq!(parse_css_color("rgb(0 128 0)"), Some((0, 128, 0)));
        assert_eq!(parse_css_color("rgba(0, 0, 0, 0.5)"), Some((0, 0, 0)));
        assert_eq!(parse_css_color("rgb(0 0 255 / 50%)"), Some((0, 0, 255)));
        assert_eq!(parse_css_color("rgb(100%, 0%, 0%)"), Some((255, 0, 0)));
    }

    #[test]
    fn rgb_clamps_out_of_range() {
        assert_eq!(parse_css_color("rgb(300, -20, 0)"), Some((255, 0, 0)));
    }

    #[test]
    fn rgb_rejects_malformed() {
        assert_eq!(parse_css_color("rgb()"), None);
        assert_eq!(parse_css_color("rgb(1, 2)"), None);
        assert_eq!(parse_css_color("rgb(1, 2, 3, 4, 5)"), None);
        assert_eq!(parse_css_color("rgb(a, b, c)"), None);
    }

    #[test]
    fn hsl_functions() {
        assert_eq!(parse_css_color("hsl(0, 100%, 50%)"), Some((255, 0, 0)));
        assert_eq!(parse_css_color("hsl(120, 100%, 25%)"), Some((0, 128, 0)));
        assert_eq!(parse_css_color("hsl(240deg, 100%, 50%)"), Some((0, 0, 255)));
        assert_eq!(parse_css_color("hsla(0, 0%, 50%, 0.3)"), Some((128, 128, 128)));
        assert_eq!(parse_css_color("hsl(480, 100%, 50%)"), Some((0, 255, 0)));
    }

    #[test]
    fn rejects_non_colors() {
        assert!(!is_valid_color(""));
        assert!(!is_valid_color("   "));
        assert!(!is_valid_color("notacolor123"));
        assert!(!is_valid_color("zzzqqq"));
        assert!(!is_valid_color("blue red"));
        assert!(!is_valid_color("cmyk(0, 0, 0, 1)"));
    }

    #[test]
    fn grammar_trait_delegates() {
        let grammar = CssGrammar;
        assert!(grammar.is_valid("blue"));
        assert!(!grammar.is_valid("zzzqqq"));
    }

    #[test]
    fn random_color_is_always_valid() {
        for _ in 0..32 {
            assert!(is_valid_color(random_color()));
        }
    }
}
