//! Maps terminal input lines onto core messages. Slash commands stand
//! in for the form controls; any other non-empty line is a chat query.

use sitechat_core::Msg;

pub const USAGE: &str = "\
Commands:
  /key <api key>     set the API key
  /url <address>     set the website URL
  /pages <count>     set the max pages to scrape
  /scrape            start scraping the configured website
  /help              show this message
  /quit              exit
Anything else is sent as a chat question once a site is scraped.";

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Dispatch(Msg),
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Option<InputEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if !line.starts_with('/') {
        return Some(InputEvent::Dispatch(Msg::QuerySubmitted(line.to_string())));
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    match command {
        "/key" => Some(InputEvent::Dispatch(Msg::ApiKeyInput(rest.to_string()))),
        "/url" => Some(InputEvent::Dispatch(Msg::SiteUrlInput(rest.to_string()))),
        "/pages" => Some(InputEvent::Dispatch(Msg::MaxPagesInput(rest.to_string()))),
        "/scrape" => Some(InputEvent::Dispatch(Msg::ScrapeClicked)),
        "/quit" | "/exit" => Some(InputEvent::Quit),
        _ => Some(InputEvent::Help),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_produce_nothing() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
    }

    #[test]
    fn plain_text_becomes_a_query() {
        assert_eq!(
            parse_line("  What is X?  "),
            Some(InputEvent::Dispatch(Msg::QuerySubmitted(
                "What is X?".to_string()
            )))
        );
    }

    #[test]
    fn form_commands_update_fields() {
        assert_eq!(
            parse_line("/key abc123"),
            Some(InputEvent::Dispatch(Msg::ApiKeyInput("abc123".to_string())))
        );
        assert_eq!(
            parse_line("/url https://example.com"),
            Some(InputEvent::Dispatch(Msg::SiteUrlInput(
                "https://example.com".to_string()
            )))
        );
        assert_eq!(
            parse_line("/pages 10"),
            Some(InputEvent::Dispatch(Msg::MaxPagesInput("10".to_string())))
        );
    }

    #[test]
    fn bare_command_clears_the_field() {
        assert_eq!(
            parse_line("/key"),
            Some(InputEvent::Dispatch(Msg::ApiKeyInput(String::new())))
        );
    }

    #[test]
    fn scrape_and_quit() {
        assert_eq!(
            parse_line("/scrape"),
            Some(InputEvent::Dispatch(Msg::ScrapeClicked))
        );
        assert_eq!(parse_line("/quit"), Some(InputEvent::Quit));
        assert_eq!(parse_line("/exit"), Some(InputEvent::Quit));
    }

    #[test]
    fn unknown_command_shows_help() {
        assert_eq!(parse_line("/frobnicate"), Some(InputEvent::Help));
    }
}
