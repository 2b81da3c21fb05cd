use super::*;

#[test]
fn mod_bit_ops_and_contains() {
    let m = Mod::BOLD | Mod::UNDERLINE;
    assert!(m.contains(Mod::BOLD));
    assert!(m.contains(Mod::UNDERLINE));
    assert!(!m.contains(Mod::REVERSE));
}

#[test]
fn builder_sets_colors_and_accumulates_mods() {
    let s = Style::default()
        .fg(Color::Rgb(0, 0, 0))
        .bg(Color::Rgb(170, 170, 170))
        .add_mod(Mod::BOLD)
        .add_mod(Mod::REVERSE);
    assert_eq!(s.fg, Some(Color::Rgb(0, 0, 0)));
    assert_eq!(s.bg, Some(Color::Rgb(170, 170, 170)));
    assert!(s.mods.contains(Mod::BOLD | Mod::REVERSE));
    assert!(!s.mods.contains(Mod::UNDERLINE));
}
