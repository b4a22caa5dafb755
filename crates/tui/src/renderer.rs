use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use scrollspy_core::ActiveSectionResolver;
use scrollspy_protocol::{ActiveIndex, SectionHighlight, ThemeToken};

const LINE_STEP: f64 = 0.01;
const PAGE_STEP: f64 = 0.1;

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::DotActive => Color::LightGreen,
        ThemeToken::DotCompleted => Color::Green,
        ThemeToken::DotUpcoming => Color::DarkGray,
        ThemeToken::TrackLine => Color::DarkGray,
        ThemeToken::TrackFill => Color::Cyan,
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::Background => Color::Black,
        ThemeToken::HeaderBackground => Color::DarkGray,
    }
}

fn dot(highlight: SectionHighlight) -> &'static str {
    match highlight {
        SectionHighlight::Active => "◉",
        SectionHighlight::Completed => "●",
        SectionHighlight::Upcoming => "○",
    }
}

fn reveal_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width.saturating_sub(filled)))
}

fn header_text(sections: usize, active: ActiveIndex) -> String {
    format!(
        " scrollspy | {sections} sections | active {active} | up/down scroll | PgUp/PgDn page | q quit "
    )
}

/// Interactive timeline: keys and the mouse wheel move the scroll progress,
/// the resolver decides which entry glows.
pub fn render_tui(resolver: &mut ActiveSectionResolver) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut progress: f64 = 0.0;

    loop {
        resolver.resolve(progress);
        let highlights = resolver.highlights();
        let layout = *resolver.layout();

        terminal.draw(|frame| {
            let [header_area, gauge_area, body_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .areas(frame.area());

            let header = Paragraph::new(header_text(layout.section_count(), resolver.active()))
            .style(
                Style::default()
                    .fg(theme_to_color(ThemeToken::TextPrimary))
                    .bg(theme_to_color(ThemeToken::HeaderBackground)),
            );
            frame.render_widget(header, header_area);

            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL).title(" progress "))
                .gauge_style(Style::default().fg(theme_to_color(ThemeToken::TrackFill)))
                .ratio(progress)
                .label(format!("{progress:.3}"));
            frame.render_widget(gauge, gauge_area);

            let bar_width = usize::from(body_area.width.saturating_sub(24)).min(40);
            let lines: Vec<Line> = highlights
                .iter()
                .enumerate()
                .map(|(i, highlight)| {
                    let color = theme_to_color(highlight.token());
                    let mut label_style =
                        Style::default().fg(theme_to_color(highlight.label_token()));
                    if *highlight == SectionHighlight::Active {
                        label_style = label_style.add_modifier(Modifier::BOLD);
                    }
                    Line::from(vec![
                        Span::styled(format!(" {} ", dot(*highlight)), Style::default().fg(color)),
                        Span::styled(format!("Section {:<3}", i + 1), label_style),
                        Span::styled(
                            format!(" {}", reveal_bar(layout.reveal_progress(progress, i), bar_width)),
                            Style::default().fg(theme_to_color(ThemeToken::TrackLine)),
                        ),
                    ])
                })
                .collect();
            let body = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" timeline "))
                .style(Style::default().bg(theme_to_color(ThemeToken::Background)));
            frame.render_widget(body, body_area);
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Down | KeyCode::Char('j') => progress += LINE_STEP,
                    KeyCode::Up | KeyCode::Char('k') => progress -= LINE_STEP,
                    KeyCode::PageDown => progress += PAGE_STEP,
                    KeyCode::PageUp => progress -= PAGE_STEP,
                    KeyCode::Home => progress = 0.0,
                    KeyCode::End => progress = 1.0,
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => progress += LINE_STEP,
                    MouseEventKind::ScrollUp => progress -= LINE_STEP,
                    _ => {}
                },
                _ => {}
            }
            progress = progress.clamp(0.0, 1.0);
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
