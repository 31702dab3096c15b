use super::*;

#[test]
fn level_badge_text_is_the_wire_token_verbatim() {
    for level in [LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
        let (text, _) = level_label(level);
        assert_eq!(text, level.as_str());
    }
}

#[test]
fn level_css_modifiers_are_distinct() {
    let mods = [
        level_label(LogLevel::Info).1,
        level_label(LogLevel::Warn).1,
        level_label(LogLevel::Error).1,
    ];
    assert_eq!(mods.len(), {
        let mut unique = mods.to_vec();
        unique.sort_unstable();
        unique.dedup();
        unique.len()
    });
}
