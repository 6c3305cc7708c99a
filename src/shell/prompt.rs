use inksac::prelude::*;

use crate::core::env;

/// Renders `user:cwd > `, coloured when the terminal supports it.
#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    color_support: ColorSupport,
}

impl Prompt {
    pub fn new(use_color: bool) -> Self {
        let color_support = if use_color {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self { color_support }
    }

    pub fn render(&self) -> String {
        let cwd = std::env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| "?".to_string());
        self.format(&env::user(), &cwd)
    }

    fn format(&self, user: &str, cwd: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return format!("{}:{} > ", user, cwd);
        }

        let user_style = Style::builder().foreground(Color::Green).bold().build();
        let dir_style = Style::builder().foreground(Color::Cyan).build();

        format!("{}:{} > ", user.style(user_style), cwd.style(dir_style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt() {
        let prompt = Prompt::new(false);
        assert_eq!(prompt.format("ferris", "/tmp"), "ferris:/tmp > ");
    }

    #[test]
    fn test_colored_prompt_keeps_text() {
        let prompt = Prompt::new(true);
        let rendered = prompt.format("ferris", "/tmp");
        assert!(rendered.contains("ferris"));
        assert!(rendered.contains("/tmp"));
        assert!(rendered.ends_with(" > "));
    }
}
