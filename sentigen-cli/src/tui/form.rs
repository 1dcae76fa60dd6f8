use crossterm::event::{Event, KeyCode, KeyEvent};
use sentigen_core::config::{OutputLength, SentimentChoice};
use tui_textarea::TextArea;

/// Which form widget currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Sentiment,
    ApiKey,
    Prompt,
}

impl Field {
    const ORDER: [Field; 4] = [Field::Length, Field::Sentiment, Field::ApiKey, Field::Prompt];

    pub fn next(self) -> Field {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Field {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub enum FormAction {
    None,
    Submit,
}

/// Form state: two selectors, the optional masked credential field and the
/// multi-line prompt area.
pub struct Form<'a> {
    pub length_index: usize,
    pub sentiment_index: usize,
    pub api_key: TextArea<'a>,
    pub prompt: TextArea<'a>,
    pub focus: Field,
}

impl Form<'_> {
    pub fn new(length: OutputLength, sentiment: SentimentChoice, api_key: Option<String>) -> Self {
        let mut api_key_area = TextArea::new(api_key.map(|key| vec![key]).unwrap_or_default());
        api_key_area.set_mask_char('•');
        api_key_area.set_placeholder_text("Leave empty to use GOOGLE_API_KEY");

        let mut prompt = TextArea::default();
        prompt
            .set_placeholder_text("Enter the text you want to analyze and generate content for...");

        Self {
            length_index: OutputLength::ALL
                .iter()
                .position(|l| *l == length)
                .unwrap_or(1),
            sentiment_index: SentimentChoice::ALL
                .iter()
                .position(|s| *s == sentiment)
                .unwrap_or(0),
            api_key: api_key_area,
            prompt,
            focus: Field::Prompt,
        }
    }

    pub fn length(&self) -> OutputLength {
        OutputLength::ALL[self.length_index]
    }

    pub fn sentiment_choice(&self) -> SentimentChoice {
        SentimentChoice::ALL[self.sentiment_index]
    }

    pub fn api_key_value(&self) -> Option<String> {
        let value = self.api_key.lines().join("");
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn prompt_text(&self) -> String {
        self.prompt.lines().join("\n")
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                FormAction::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                FormAction::None
            }
            // Enter inserts a newline only inside the prompt area
            KeyCode::Enter if self.focus != Field::Prompt => FormAction::Submit,
            KeyCode::Left if self.focus == Field::Length => {
                cycle(&mut self.length_index, OutputLength::ALL.len(), false);
                FormAction::None
            }
            KeyCode::Right | KeyCode::Char(' ') if self.focus == Field::Length => {
                cycle(&mut self.length_index, OutputLength::ALL.len(), true);
                FormAction::None
            }
            KeyCode::Left if self.focus == Field::Sentiment => {
                cycle(&mut self.sentiment_index, SentimentChoice::ALL.len(), false);
                FormAction::None
            }
            KeyCode::Right | KeyCode::Char(' ') if self.focus == Field::Sentiment => {
                cycle(&mut self.sentiment_index, SentimentChoice::ALL.len(), true);
                FormAction::None
            }
            _ => {
                match self.focus {
                    Field::ApiKey => {
                        self.api_key.input(tui_textarea::Input::from(Event::Key(key)));
                    }
                    Field::Prompt => {
                        self.prompt.input(tui_textarea::Input::from(Event::Key(key)));
                    }
                    _ => {}
                }
                FormAction::None
            }
        }
    }
}

fn cycle(index: &mut usize, len: usize, forward: bool) {
    *index = if forward {
        (*index + 1) % len
    } else {
        (*index + len - 1) % len
    };
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_cycles_through_all_fields() {
        let mut form = Form::new(OutputLength::Medium, SentimentChoice::AutoDetect, None);
        assert_eq!(form.focus, Field::Prompt);

        for expected in [Field::Length, Field::Sentiment, Field::ApiKey, Field::Prompt] {
            form.handle_key(key(KeyCode::Tab));
            assert_eq!(form.focus, expected);
        }

        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, Field::ApiKey);
    }

    #[test]
    fn selectors_cycle_and_wrap() {
        let mut form = Form::new(OutputLength::Short, SentimentChoice::AutoDetect, None);
        form.focus = Field::Length;

        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.length(), OutputLength::Medium);
        form.handle_key(key(KeyCode::Left));
        form.handle_key(key(KeyCode::Left));
        assert_eq!(form.length(), OutputLength::Long);

        form.focus = Field::Sentiment;
        form.handle_key(key(KeyCode::Left));
        assert_eq!(form.sentiment_choice(), SentimentChoice::Neutral);
    }

    #[test]
    fn enter_submits_except_in_prompt_area() {
        let mut form = Form::new(OutputLength::Medium, SentimentChoice::AutoDetect, None);

        form.focus = Field::Length;
        assert!(matches!(form.handle_key(key(KeyCode::Enter)), FormAction::Submit));

        form.focus = Field::Prompt;
        assert!(matches!(form.handle_key(key(KeyCode::Enter)), FormAction::None));
        form.handle_key(key(KeyCode::Char('x')));
        assert_eq!(form.prompt_text(), "\nx");
    }

    #[test]
    fn blank_api_key_resolves_to_none() {
        let form = Form::new(OutputLength::Medium, SentimentChoice::AutoDetect, None);
        assert_eq!(form.api_key_value(), None);

        let form = Form::new(
            OutputLength::Medium,
            SentimentChoice::AutoDetect,
            Some("  secret  ".to_string()),
        );
        assert_eq!(form.api_key_value(), Some("secret".to_string()));
    }
}
