//! Type definitions for menu answers.

/// Represents the user's answer at the menu prompt.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MenuChoice {
    /// 0-based position of the chosen candidate
    Index(usize),
    Quit,
    /// Not a number, or a number outside `1..=count`
    Invalid,
}

/// Represents the user's answer when confirming a rename.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RunChoice {
    Yes,
    No,
}

impl MenuChoice {
    /// Interprets one menu answer against `candidate_count` listed entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xmv_cli::selection::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::parse("2", 3), MenuChoice::Index(1));
    /// assert_eq!(MenuChoice::parse("Q", 3), MenuChoice::Quit);
    /// assert_eq!(MenuChoice::parse("0", 3), MenuChoice::Invalid);
    /// ```
    #[must_use]
    pub fn parse(answer: &str, candidate_count: usize) -> Self {
        if answer.is_empty() || answer.eq_ignore_ascii_case(super::QUIT_OPTION) {
            return Self::Quit;
        }

        if !answer.chars().all(|c| c.is_ascii_digit()) {
            return Self::Invalid;
        }

        match answer.parse::<usize>() {
            Ok(number) if (1..=candidate_count).contains(&number) => Self::Index(number - 1),
            _ => Self::Invalid,
        }
    }
}

impl RunChoice {
    #[must_use]
    pub fn parse(answer: &str) -> Self {
        if answer.eq_ignore_ascii_case(super::CONFIRM_OPTION) {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_quit() {
        assert_eq!(MenuChoice::parse("", 2), MenuChoice::Quit);
        assert_eq!(MenuChoice::parse("q", 2), MenuChoice::Quit);
        assert_eq!(MenuChoice::parse("Q", 0), MenuChoice::Quit);
    }

    #[test]
    fn test_menu_choice_in_range() {
        assert_eq!(MenuChoice::parse("1", 2), MenuChoice::Index(0));
        assert_eq!(MenuChoice::parse("2", 2), MenuChoice::Index(1));
        assert_eq!(MenuChoice::parse("02", 2), MenuChoice::Index(1));
    }

    #[test]
    fn test_menu_choice_out_of_range() {
        assert_eq!(MenuChoice::parse("5", 2), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("0", 2), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("1", 0), MenuChoice::Invalid);
        assert_eq!(
            MenuChoice::parse("99999999999999999999999999", 2),
            MenuChoice::Invalid
        );
    }

    #[test]
    fn test_menu_choice_not_numeric() {
        assert_eq!(MenuChoice::parse("-1", 2), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("+1", 2), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(" 1", 2), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("one", 2), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("quit", 2), MenuChoice::Invalid);
    }

    #[test]
    fn test_run_choice() {
        assert_eq!(RunChoice::parse("y"), RunChoice::Yes);
        assert_eq!(RunChoice::parse("Y"), RunChoice::Yes);
        assert_eq!(RunChoice::parse("yes"), RunChoice::No);
        assert_eq!(RunChoice::parse("n"), RunChoice::No);
        assert_eq!(RunChoice::parse(""), RunChoice::No);
    }
}
