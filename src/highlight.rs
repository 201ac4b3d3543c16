use inksac::prelude::*;
use std::io::{self, IsTerminal};

pub const PROMPT: &str = "wish> ";

/// Colors the interactive prompt when stdout is a color terminal.
#[derive(Debug, Clone, Copy)]
pub struct PromptStyle {
    color_support: ColorSupport,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptStyle {
    pub fn new() -> Self {
        if !io::stdout().is_terminal() {
            return Self::plain();
        }
        Self {
            color_support: check_color_support().unwrap_or(ColorSupport::NoColor),
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn render(&self, prompt: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return prompt.to_string();
        }

        let (name, rest) = prompt.split_at(prompt.find('>').unwrap_or(prompt.len()));
        let name_style = Style::builder().foreground(Color::Cyan).bold().build();
        let marker_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        format!("{}{}", name.style(name_style), rest.style(marker_style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt_is_untouched() {
        assert_eq!(PromptStyle::plain().render(PROMPT), "wish> ");
    }
}
