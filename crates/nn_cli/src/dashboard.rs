//! Terminal view of a crawled article table with a content length chart.

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nn_core::Table;
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{BarChart, Block, Borders, Paragraph, Row, Table as TableWidget, TableState},
    Frame, Terminal,
};

pub const CONTENT_COLUMN: &str = "content";
pub const TITLE: &str = "Naver News Articles";

/// Longest cell text handed to the table widget.
const MAX_CELL_CHARS: usize = 200;

pub struct Dashboard {
    table: Table,
    /// Character count of every row's content, when the table has that column
    content_lengths: Option<Vec<u64>>,
    state: TableState,
    should_quit: bool,
}

impl Dashboard {
    pub fn from_table(table: Table) -> Self {
        let content_lengths = table.column(CONTENT_COLUMN).map(|cells| {
            cells
                .iter()
                .map(|cell| cell.chars().count() as u64)
                .collect()
        });
        let mut state = TableState::default();
        if !table.rows.is_empty() {
            state.select(Some(0));
        }
        Self {
            table,
            content_lengths,
            state,
            should_quit: false,
        }
    }

    pub fn content_lengths(&self) -> Option<&[u64]> {
        self.content_lengths.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }
        let last = self.table.rows.len().saturating_sub(1);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(i) = self.state.selected() {
                    self.state.select(Some((i + 1).min(last)));
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(i) = self.state.selected() {
                    self.state.select(Some(i.saturating_sub(1)));
                }
            }
            _ => {}
        }
    }
}

fn preview(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_CHARS {
        cell.to_string()
    } else {
        let mut cut: String = cell.chars().take(MAX_CELL_CHARS).collect();
        cut.push('…');
        cut
    }
}

/// Draw the dashboard UI
pub fn draw<B: Backend>(f: &mut Frame<B>, dashboard: &mut Dashboard) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(5)];
    if dashboard.content_lengths().is_some() {
        constraints.push(Constraint::Percentage(40));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.size());

    draw_header(f, chunks[0], dashboard);
    draw_table(f, chunks[1], dashboard);
    if let Some(lengths) = dashboard.content_lengths() {
        draw_length_chart(f, chunks[2], lengths);
    }
    draw_footer(f, chunks[chunks.len() - 1]);
}

fn draw_header<B: Backend>(f: &mut Frame<B>, area: Rect, dashboard: &Dashboard) {
    let position = dashboard
        .selected()
        .map(|i| format!("row {} · ", i))
        .unwrap_or_default();
    let header = Paragraph::new(format!(
        "{}{} rows · {} columns",
        position,
        dashboard.table.rows.len(),
        dashboard.table.headers.len()
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", TITLE)),
    );
    f.render_widget(header, area);
}

fn draw_table<B: Backend>(f: &mut Frame<B>, area: Rect, dashboard: &mut Dashboard) {
    let columns = dashboard.table.headers.len().max(1) as u32;

    let header = Row::new(
        std::iter::once("#".to_string()).chain(dashboard.table.headers.iter().cloned()),
    )
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows = dashboard.table.rows.iter().enumerate().map(|(i, row)| {
        let cells = dashboard.table.headers.iter().enumerate().map(|(c, _)| {
            preview(row.get(c).map(String::as_str).unwrap_or(""))
        });
        Row::new(std::iter::once(i.to_string()).chain(cells))
    });

    let mut widths = vec![Constraint::Length(4)];
    widths.extend((0..columns).map(|_| Constraint::Ratio(1, columns)));

    let table = TableWidget::new(rows)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Articles "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .widths(&widths);

    f.render_stateful_widget(table, area, &mut dashboard.state);
}

fn draw_length_chart<B: Backend>(f: &mut Frame<B>, area: Rect, lengths: &[u64]) {
    let labels: Vec<String> = (0..lengths.len()).map(|i| i.to_string()).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(lengths)
        .map(|(label, length)| (label.as_str(), *length))
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" Content length "))
        .data(&data)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));

    f.render_widget(chart, area);
}

fn draw_footer<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let footer = Paragraph::new("q: quit  ↑/↓: scroll").style(Style::default().fg(Color::Gray));
    f.render_widget(footer, area);
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, dashboard: &mut Dashboard) -> io::Result<()> {
    while !dashboard.should_quit() {
        terminal.draw(|f| draw(f, dashboard))?;
        if event::poll(Duration::from_millis(250))? {
            dashboard.handle_event(event::read()?);
        }
    }
    Ok(())
}

/// Take over the terminal until the user quits.
pub fn run(dashboard: &mut Dashboard) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, dashboard);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui::backend::TestBackend;

    fn article_table() -> Table {
        Table {
            headers: vec!["title".into(), "date".into(), "content".into()],
            rows: vec![
                vec!["Hello".into(), "2024.01.01. 09:00".into(), "Line one Line two".into()],
                vec!["".into(), "".into(), "한국어 본문".into()],
                vec!["Short".into(), "".into()],
            ],
        }
    }

    fn render(dashboard: &mut Dashboard) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, dashboard)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_content_lengths_count_chars() {
        let dashboard = Dashboard::from_table(article_table());
        assert_eq!(dashboard.content_lengths(), Some(&[17, 6, 0][..]));
    }

    #[test]
    fn test_no_content_column() {
        let table = Table {
            headers: vec!["title".into(), "date".into()],
            rows: vec![vec!["Hello".into(), "2024.01.01. 09:00".into()]],
        };
        let mut dashboard = Dashboard::from_table(table);
        assert!(dashboard.content_lengths().is_none());

        let screen = render(&mut dashboard);
        assert!(screen.contains("Hello"));
        assert!(!screen.contains("Content length"));
    }

    #[test]
    fn test_renders_table_and_chart() {
        let mut dashboard = Dashboard::from_table(article_table());
        let screen = render(&mut dashboard);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Hello"));
        assert!(screen.contains("Content length"));
    }

    #[test]
    fn test_renders_empty_table() {
        let mut dashboard = Dashboard::from_table(Table::default());
        assert_eq!(dashboard.selected(), None);
        let screen = render(&mut dashboard);
        assert!(screen.contains(TITLE));
    }

    #[test]
    fn test_handle_event() {
        let mut dashboard = Dashboard::from_table(article_table());
        assert_eq!(dashboard.selected(), Some(0));

        dashboard.handle_event(key(KeyCode::Up));
        assert_eq!(dashboard.selected(), Some(0));
        for _ in 0..5 {
            dashboard.handle_event(key(KeyCode::Down));
        }
        assert_eq!(dashboard.selected(), Some(2));

        assert!(!dashboard.should_quit());
        dashboard.handle_event(key(KeyCode::Char('q')));
        assert!(dashboard.should_quit());
    }

    #[test]
    fn test_preview_truncates() {
        let long = "가".repeat(MAX_CELL_CHARS + 10);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), MAX_CELL_CHARS + 1);
        assert_eq!(preview("short"), "short");
    }
}
