use super::*;

#[test]
fn glyph_offers_the_sun_while_dark() {
    assert_eq!(glyph(Mode::Dark), "☀");
}

#[test]
fn glyph_offers_the_moon_while_light() {
    assert_eq!(glyph(Mode::Light), "☾");
}
