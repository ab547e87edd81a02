use std::str::FromStr;

use interning_core::{ApplicationStatus, Msg};

pub const HELP: &str = "\
Commands:
  refresh | r                      fetch the posting list again
  find <text>                      filter by company, description or location (empty clears)
  closed all|yes|no                show all, only closed, or only open postings
  applied all|yes|no               show all, applied or not-applied companies
  sponsorship all|citizenship|sponsorship
  apply <company>                  mark a company as applied (name in any case)
  unapply <company>                clear the applied mark
  status none|waiting|oa|rejected|offer <company>
  flip                             reverse the list order
  dark                             toggle dark mode
  show                             redraw the dashboard
  help | ?                         this text
  quit | q                         exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" | "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "refresh" | "r" => Command::Dispatch(Msg::RefreshRequested),
        "flip" => Command::Dispatch(Msg::OrderToggled),
        "dark" => Command::Dispatch(Msg::DarkModeToggled),
        "find" => Command::Dispatch(Msg::QueryChanged(rest.to_string())),
        "closed" => option(rest, Msg::ClosedFilterChanged),
        "applied" => option(rest, Msg::AppliedFilterChanged),
        "sponsorship" => option(rest, Msg::SponsorshipFilterChanged),
        "apply" | "unapply" => {
            if rest.is_empty() {
                return Command::Invalid(format!("usage: {word} <company>"));
            }
            Command::Dispatch(Msg::AppliedChanged {
                company: rest.to_string(),
                applied: word.eq_ignore_ascii_case("apply"),
            })
        }
        "status" => {
            let Some((status, company)) = rest.split_once(char::is_whitespace) else {
                return Command::Invalid("usage: status <status> <company>".to_string());
            };
            match ApplicationStatus::from_str(&status.to_ascii_lowercase()) {
                Ok(status) => Command::Dispatch(Msg::StatusChanged {
                    company: company.trim().to_string(),
                    status,
                }),
                Err(err) => Command::Invalid(err.to_string()),
            }
        }
        other => Command::Invalid(format!("unknown command {other:?}, try `help`")),
    }
}

fn option<T: FromStr>(raw: &str, to_msg: impl FnOnce(T) -> Msg) -> Command
where
    T::Err: std::fmt::Display,
{
    match raw.to_ascii_lowercase().parse::<T>() {
        Ok(value) => Command::Dispatch(to_msg(value)),
        Err(err) => Command::Invalid(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interning_core::{AppliedType, ClosedType, SponsorshipType};

    #[test]
    fn parses_filters() {
        assert_eq!(
            parse_command("closed no"),
            Command::Dispatch(Msg::ClosedFilterChanged(ClosedType::No))
        );
        assert_eq!(
            parse_command("APPLIED Yes"),
            Command::Dispatch(Msg::AppliedFilterChanged(AppliedType::Yes))
        );
        assert_eq!(
            parse_command("sponsorship citizenship"),
            Command::Dispatch(Msg::SponsorshipFilterChanged(SponsorshipType::Citizenship))
        );
        assert!(matches!(parse_command("closed maybe"), Command::Invalid(_)));
    }

    #[test]
    fn find_keeps_inner_spaces_and_empty_clears() {
        assert_eq!(
            parse_command("find  new york "),
            Command::Dispatch(Msg::QueryChanged("new york".to_string()))
        );
        assert_eq!(
            parse_command("find"),
            Command::Dispatch(Msg::QueryChanged(String::new()))
        );
    }

    #[test]
    fn company_names_may_contain_spaces() {
        assert_eq!(
            parse_command("apply Jane Street"),
            Command::Dispatch(Msg::AppliedChanged {
                company: "Jane Street".to_string(),
                applied: true,
            })
        );
        assert_eq!(
            parse_command("unapply Jane Street"),
            Command::Dispatch(Msg::AppliedChanged {
                company: "Jane Street".to_string(),
                applied: false,
            })
        );
        assert_eq!(
            parse_command("status oa Two Sigma"),
            Command::Dispatch(Msg::StatusChanged {
                company: "Two Sigma".to_string(),
                status: ApplicationStatus::Oa,
            })
        );
    }

    #[test]
    fn rejects_incomplete_edits() {
        assert!(matches!(parse_command("apply"), Command::Invalid(_)));
        assert!(matches!(parse_command("status offer"), Command::Invalid(_)));
        assert!(matches!(parse_command("status hired Acme"), Command::Invalid(_)));
        assert!(matches!(parse_command("launch"), Command::Invalid(_)));
    }

    #[test]
    fn control_words() {
        assert_eq!(parse_command(""), Command::Show);
        assert_eq!(parse_command("  q "), Command::Quit);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("r"), Command::Dispatch(Msg::RefreshRequested));
        assert_eq!(parse_command("flip"), Command::Dispatch(Msg::OrderToggled));
        assert_eq!(parse_command("dark"), Command::Dispatch(Msg::DarkModeToggled));
    }
}
