//! Terminal display module
//!
//! Renders help content and the accumulated log as Markdown, with a
//! plain fallback when colors are unwanted or stdout is not a TTY.

use std::io::IsTerminal;

use termimad::MadSkin;

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        skin.print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Colors are used only for interactive terminals; NO_COLOR wins
/// (https://no-color.org/)
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Blue);

    skin.inline_code.set_fg(Yellow);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);
    skin.bullet.set_fg(Cyan);
}
