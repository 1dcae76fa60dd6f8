use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use sentigen_core::config::{OutputLength, SentimentChoice};
use sentigen_core::error::PipelineError;
use sentigen_core::generator::TextOrigin;
use sentigen_core::pipeline::{run_pipeline, PipelineOutput, PipelineRequest};
use sentigen_core::sentiment::SentimentAnalyzer;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

use super::form::{Field, Form, FormAction};
use super::theme;

enum RunState {
    Idle,
    Running {
        task: JoinHandle<Result<PipelineOutput, PipelineError>>,
    },
    Done(PipelineOutput),
    Failed(String),
}

/// Interactive form: settings and prompt on the left, results on the right.
/// A submission spawns the pipeline on a background task so the interface
/// keeps repainting while the single bounded network call is in flight.
pub struct App<'a> {
    form: Form<'a>,
    analyzer: Arc<SentimentAnalyzer>,
    state: RunState,
    spinner: usize,
    exit: bool,
}

impl App<'_> {
    pub fn new(length: OutputLength, sentiment: SentimentChoice, api_key: Option<String>) -> Self {
        Self {
            form: Form::new(length, sentiment, api_key),
            analyzer: Arc::new(SentimentAnalyzer::new()),
            state: RunState::Idle,
            spinner: 0,
            exit: false,
        }
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal).await;
        ratatui::restore();
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut animation_timer = interval(Duration::from_millis(100));
        let mut events = EventStream::new();

        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }
                _ = animation_timer.tick() => {
                    self.spinner = self.spinner.wrapping_add(1);
                    self.poll_pipeline();
                }
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.exit = true;
                return;
            }
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
                return;
            }
            (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.submit();
                return;
            }
            _ => {}
        }

        if let FormAction::Submit = self.form.handle_key(key) {
            self.submit();
        }
    }

    fn submit(&mut self) {
        // One request at a time; submissions while running are ignored
        if matches!(self.state, RunState::Running { .. }) {
            return;
        }

        let prompt = self.form.prompt_text();
        if prompt.trim().is_empty() {
            self.state = RunState::Failed("Enter a prompt first.".to_string());
            return;
        }

        let request = PipelineRequest {
            prompt,
            length: self.form.length(),
            sentiment: self.form.sentiment_choice(),
            api_key: self.form.api_key_value(),
        };
        let analyzer = self.analyzer.clone();

        let task = tokio::spawn(async move { run_pipeline(&analyzer, &request).await });
        self.state = RunState::Running { task };
    }

    fn poll_pipeline(&mut self) {
        let RunState::Running { task } = &self.state else {
            return;
        };
        if !task.is_finished() {
            return;
        }

        let RunState::Running { task } = std::mem::replace(&mut self.state, RunState::Idle) else {
            return;
        };

        self.state = match futures::executor::block_on(task) {
            Ok(Ok(output)) => RunState::Done(output),
            Ok(Err(e)) => RunState::Failed(e.to_string()),
            Err(_) => RunState::Failed("Generation task was cancelled.".to_string()),
        };
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new("Sentigen: sentiment-aligned text generation (Gemini Flash)")
                .style(Style::default().add_modifier(Modifier::BOLD)),
            header,
        );

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body);

        let [length_area, sentiment_area, key_area, prompt_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .areas(left);

        self.draw_selector(
            frame,
            length_area,
            "Output Length",
            self.form.length().label(),
            self.form.focus == Field::Length,
        );
        self.draw_selector(
            frame,
            sentiment_area,
            "Override Sentiment",
            self.form.sentiment_choice().label(),
            self.form.focus == Field::Sentiment,
        );

        self.form.api_key.set_block(
            Block::bordered()
                .title("Gemini API Key (Optional)")
                .border_style(theme::border_style(self.form.focus == Field::ApiKey)),
        );
        frame.render_widget(&self.form.api_key, key_area);

        self.form.prompt.set_block(
            Block::bordered()
                .title("Prompt")
                .border_style(theme::border_style(self.form.focus == Field::Prompt)),
        );
        frame.render_widget(&self.form.prompt, prompt_area);

        self.draw_results(frame, right);

        frame.render_widget(
            Paragraph::new(
                "Tab: next field   ←/→: change selection   Enter/Ctrl+S: generate   Esc: quit",
            )
            .style(Style::default().fg(theme::DIM)),
            footer,
        );
    }

    fn draw_selector(&self, frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
        let marker = if focused { "◀ " } else { "  " };
        let closer = if focused { " ▶" } else { "  " };

        frame.render_widget(
            Paragraph::new(format!("{}{}{}", marker, value, closer)).block(
                Block::bordered()
                    .title(title.to_string())
                    .border_style(theme::border_style(focused)),
            ),
            area,
        );
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title("Results")
            .border_style(Style::default().fg(theme::DIM));

        let lines: Vec<Line> = match &self.state {
            RunState::Idle => vec![Line::from(Span::styled(
                "Fill the form and press Ctrl+S to generate.",
                Style::default().fg(theme::DIM),
            ))],
            RunState::Running { .. } => {
                let dots = ".".repeat(self.spinner % 4);
                vec![Line::from(format!("Generating content{}", dots))]
            }
            RunState::Done(output) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", output.sentiment.emoji())),
                        Span::styled(
                            output.sentiment.display_name(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!("  {:.0}% confidence", output.confidence * 100.0)),
                    ]),
                    Line::default(),
                ];
                for text_line in output.text.lines() {
                    lines.push(Line::from(text_line.to_string()));
                }
                lines.push(Line::default());
                if output.origin == TextOrigin::Fallback {
                    lines.push(Line::from(Span::styled(
                        "offline fallback: remote generation failed",
                        Style::default().fg(theme::ERROR),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("Word count: {}", output.word_count),
                    Style::default().fg(theme::DIM),
                )));
                lines
            }
            RunState::Failed(message) => {
                let mut lines: Vec<Line> = message
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(theme::ERROR))))
                    .collect();
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Make sure you have set your Google Gemini API key.",
                    Style::default().fg(theme::DIM),
                )));
                lines
            }
        };

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
    }
}
