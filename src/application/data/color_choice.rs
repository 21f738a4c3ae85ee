use clap::ValueEnum;
use supports_color::Stream;

/// Whether command output is colorized.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enables_color(&self) -> bool {
        match self {
            ColorChoice::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// Applies the choice to everything printed through `colored`.
    pub fn apply(&self) {
        colored::control::set_override(self.enables_color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_choices_ignore_the_terminal() {
        assert!(ColorChoice::Always.enables_color());
        assert!(!ColorChoice::Never.enables_color());
    }
}
