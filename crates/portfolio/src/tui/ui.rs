//! TUI rendering using ratatui.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use portfolio_core::contact::{FormField, NotificationKind};
use portfolio_core::{ExpandableList, VisibilityProbe};
use portfolio_models::{Icon, SectionId, Tone};

use super::app::{App, Focus};
use super::layout::{ItemKey, Placed};
use super::scene;

/// Columns a block slides in from while revealing.
const SLIDE_COLUMNS: f32 = 6.0;

/// Draw the TUI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    draw_at(frame, app, Instant::now());
}

/// Draw the TUI as of `now`.
pub fn draw_at(frame: &mut Frame, app: &mut App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation
            Constraint::Min(5),    // Page
            Constraint::Length(1), // Status
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    app.viewport_height = u32::from(chunks[1].height);

    draw_nav(frame, app, chunks[0]);
    draw_page(frame, app, chunks[1], now);
    draw_status(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);
}

pub(super) fn tone_color(tone: Tone) -> Color {
    let (r, g, b) = tone.rgb();
    Color::Rgb(r, g, b)
}

/// Draw the navigation bar with the current section highlighted.
fn draw_nav(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.current_section();
    let mut spans = vec![Span::styled(
        format!(" {} ", app.catalogue.profile.name),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (i, section) in SectionId::ALL.iter().enumerate() {
        let style = if *section == current {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("{} {}", i + 1, section.label()), style));
    }

    let nav = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(nav, area);
}

/// Draw every block that overlaps the view.
fn draw_page(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let viewport = app.viewport();

    for item in app.layout.items() {
        if !viewport.is_visible(item.span) {
            continue;
        }
        let progress = app.reveal_progress(item.key, now);
        if progress <= 0.0 {
            continue;
        }
        let Some((rect, clip)) = place(item, app.scroll_offset, area, progress) else {
            continue;
        };
        let settled = progress >= 1.0;

        match item.key {
            ItemKey::Hero => scene::draw_hero(frame, app, rect),
            ItemKey::Analytics => scene::draw_analytics(frame, app, rect),
            ItemKey::Form => {
                frame.render_widget(form_block(app, settled).scroll((clip, 0)), rect);
                place_cursor(frame, app, rect, clip);
            }
            key => {
                if let Some(widget) = text_block(app, key, settled) {
                    frame.render_widget(widget.scroll((clip, 0)), rect);
                }
            }
        }
    }
}

/// Screen rect of a block and the rows cut off above the view.
fn place(item: &Placed, scroll: u32, area: Rect, progress: f32) -> Option<(Rect, u16)> {
    let clip = scroll.saturating_sub(item.span.top);
    let top = item.span.top.saturating_sub(scroll);
    let height = item
        .span
        .height
        .saturating_sub(clip)
        .min(u32::from(area.height).saturating_sub(top));
    if height == 0 {
        return None;
    }

    let shift = ((1.0 - progress) * SLIDE_COLUMNS).round() as u16;
    let rect = Rect {
        x: area.x + shift.min(area.width),
        y: area.y + top as u16,
        width: area.width.saturating_sub(shift),
        height: height as u16,
    };
    Some((rect, clip as u16))
}

/// Eyebrow, title and subtitle of a section header.
pub(super) fn heading(section: SectionId) -> (&'static str, &'static str, &'static str) {
    match section {
        SectionId::Home => ("", "", ""),
        SectionId::About => (
            "About Me",
            "Passion for Data Analytics & Insight Generation",
            "",
        ),
        SectionId::Skills => (
            "Skills & Tools",
            "My Technical Arsenal",
            "A comprehensive set of skills and tools to tackle any data challenge",
        ),
        SectionId::Certifications => (
            "Certifications",
            "Professional Credentials",
            "Industry-recognized certifications from leading tech companies",
        ),
        SectionId::Projects => (
            "My Work",
            "Featured Projects",
            "Here are some of the data analysis projects I've worked on.",
        ),
        SectionId::Contact => (
            "Get In Touch",
            "Let's Work Together",
            "Have a data challenge? I'd love to hear about it.",
        ),
    }
}

fn card<'a>(title: String, color: Color, settled: bool) -> Block<'a> {
    let color = if settled { color } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
}

fn icon_title(icon: Icon, title: &str) -> String {
    format!(" {} {} ", icon.glyph(), title)
}

/// Text style for block bodies; grey while revealing.
fn body(settled: bool) -> Style {
    if settled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// A ten-cell proficiency bar.
pub(super) fn level_bar(level: u8) -> String {
    let filled = usize::from(level) / 10;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

fn text_block(app: &App, key: ItemKey, settled: bool) -> Option<Paragraph<'static>> {
    let catalogue = app.catalogue;
    let style = body(settled);

    let widget = match key {
        ItemKey::Header(section) => {
            let (eyebrow, title, subtitle) = heading(section);
            let accent = if settled {
                tone_color(Tone::Primary)
            } else {
                Color::DarkGray
            };
            Paragraph::new(vec![
                Line::styled(eyebrow.to_uppercase(), Style::default().fg(accent)),
                Line::styled(title, style.add_modifier(Modifier::BOLD)),
                Line::styled(subtitle, Style::default().fg(Color::Gray)),
            ])
            .alignment(Alignment::Center)
        }
        ItemKey::Journey => {
            let profile = &catalogue.profile;
            let mut lines: Vec<Line> = profile
                .journey
                .iter()
                .map(|p| Line::styled(p.as_str(), style))
                .collect();
            lines.push(Line::raw(""));
            let resumes: Vec<String> = profile
                .resumes
                .iter()
                .map(|r| format!("{} ({})", r.label, r.href))
                .collect();
            lines.push(Line::styled(
                format!("Resumes: {}", resumes.join(", ")),
                style.fg(Color::Gray),
            ));
            Paragraph::new(lines)
                .block(card(" My Journey ".to_string(), Color::White, settled))
                .wrap(Wrap { trim: true })
        }
        ItemKey::Feature(i) => {
            let feature = catalogue.features.get(i)?;
            Paragraph::new(Line::styled(feature.description.as_str(), style))
                .block(card(
                    icon_title(feature.icon, &feature.title),
                    tone_color(feature.tone),
                    settled,
                ))
                .wrap(Wrap { trim: true })
        }
        ItemKey::SkillGroup(i) => {
            let group = catalogue.skill_groups.get(i)?;
            let lines: Vec<Line> = group
                .items
                .iter()
                .map(|skill| {
                    Line::from(vec![
                        Span::styled(format!("{:<22}", skill.name), style),
                        Span::styled(
                            level_bar(skill.level),
                            style.fg(if settled {
                                tone_color(group.tone)
                            } else {
                                Color::DarkGray
                            }),
                        ),
                        Span::styled(format!(" {:>3}%", skill.level), style),
                    ])
                })
                .collect();
            Paragraph::new(lines).block(card(
                icon_title(group.icon, &group.title),
                tone_color(group.tone),
                settled,
            ))
        }
        ItemKey::Highlight(i) => {
            let highlight = catalogue.skill_highlights.get(i)?;
            Paragraph::new(Line::styled(highlight.description.as_str(), style))
                .block(card(
                    icon_title(highlight.icon, &highlight.title),
                    tone_color(highlight.tone),
                    settled,
                ))
                .wrap(Wrap { trim: true })
        }
        ItemKey::Certification(i) => {
            let cert = catalogue.certifications.get(i)?;
            let color = cert.gradient.0.parse().unwrap_or(Color::Cyan);
            let badges: Vec<String> = cert.skills.iter().map(|s| format!("[{}]", s)).collect();
            Paragraph::new(vec![
                Line::styled(cert.issuer.as_str(), style.fg(color)),
                Line::styled(cert.description.as_str(), style),
                Line::styled(badges.join(" "), style.fg(Color::Gray)),
            ])
            .block(card(format!(" {} {} ", cert.logo, cert.title), color, settled))
            .wrap(Wrap { trim: true })
        }
        ItemKey::Stat(i) => {
            let stat = catalogue.stats.get(i)?;
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("{} {}  ", stat.icon.glyph(), stat.value),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(stat.label.as_str(), style),
            ]))
            .block(card(String::new(), tone_color(Tone::Primary), settled))
            .alignment(Alignment::Center)
        }
        ItemKey::Project(i) => {
            let project = app.projects.visible().get(i).copied()?;
            let tags: Vec<String> = project.tags.iter().map(|t| format!("#{}", t)).collect();
            let mut links = format!("repo: {}", project.links.repo);
            if let Some(demo) = &project.links.demo {
                links.push_str(&format!("   demo: {}", demo));
            }
            Paragraph::new(vec![
                Line::styled(
                    format!("[{}]", project.category),
                    style.add_modifier(Modifier::ITALIC),
                ),
                Line::styled(project.description.as_str(), style),
                Line::styled(tags.join(" "), style.fg(Color::Gray)),
                Line::styled(links, style.fg(Color::Blue)),
            ])
            .block(card(
                format!(" {} ", project.title),
                tone_color(project.tone),
                settled,
            ))
            .wrap(Wrap { trim: true })
        }
        ItemKey::ProjectToggle => Paragraph::new(Line::styled(
            toggle_text(&app.projects),
            style.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        ItemKey::Channel(i) => {
            let channel = catalogue.contact_channels.get(i)?;
            Paragraph::new(vec![
                Line::styled(channel.display_text.as_str(), style),
                Line::styled(
                    format!("{} -> {}", channel.link_text, channel.destination),
                    style.fg(Color::Blue),
                ),
            ])
            .block(card(
                icon_title(channel.icon, &channel.label),
                tone_color(channel.tone),
                settled,
            ))
        }
        ItemKey::Footer => {
            let socials: Vec<String> = catalogue
                .profile
                .socials
                .iter()
                .map(|s| format!("{} {}", s.icon.glyph(), s.href))
                .collect();
            let links: Vec<&str> = catalogue.quick_links.iter().map(|s| s.label()).collect();
            Paragraph::new(vec![
                Line::styled(catalogue.profile.tagline.as_str(), style),
                Line::styled(socials.join("   "), style.fg(Color::Blue)),
                Line::styled(format!("Quick Links: {}", links.join(" · ")), style),
                Line::styled(catalogue.copyright.as_str(), style.fg(Color::Gray)),
            ])
            .block(card(" About ".to_string(), Color::White, settled))
        }
        ItemKey::Hero | ItemKey::Analytics | ItemKey::Form => return None,
    };
    Some(widget)
}

/// Label of the projects toggle, with the hidden count while there is one.
fn toggle_text<T>(projects: &ExpandableList<T>) -> String {
    let label = projects.toggle_label();
    if projects.is_expanded() || !projects.can_expand() {
        format!("[p] {}", label)
    } else {
        format!("[p] {} ({} more)", label, projects.hidden_count())
    }
}

/// The contact form, two rows per input and a button row.
fn form_block(app: &App, settled: bool) -> Paragraph<'static> {
    let style = body(settled);
    let mut lines = Vec::with_capacity(FormField::ALL.len() * 2 + 1);

    for field in FormField::ALL {
        let focused = app.focus == Focus::Form(field);
        let marker = if focused { ">" } else { " " };
        lines.push(Line::styled(
            format!("{} {}", marker, field.label()),
            style.add_modifier(Modifier::BOLD),
        ));
        let value_style = if focused {
            style.bg(Color::Rgb(40, 40, 55))
        } else {
            style
        };
        lines.push(Line::styled(
            format!("  {}", app.form.field(field)),
            value_style,
        ));
    }

    let button = if app.form.is_submitting() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(tone_color(Tone::Primary))
    };
    lines.push(Line::styled(
        format!(" [Enter] {} ", app.form.submit_label()),
        button,
    ));

    Paragraph::new(lines).block(card(
        " Send Me a Message ".to_string(),
        tone_color(Tone::Accent),
        settled,
    ))
}

/// Puts the terminal cursor in the focused input.
fn place_cursor(frame: &mut Frame, app: &App, rect: Rect, clip: u16) {
    let Focus::Form(field) = app.focus else {
        return;
    };
    let Some(index) = FormField::ALL.iter().position(|f| *f == field) else {
        return;
    };
    // border + label row
    let row = 1 + index as u16 * 2 + 1;
    if row < clip {
        return;
    }
    let y = rect.y + row - clip;
    let x = cursor_column(rect.x, app.cursor_pos);
    if y < rect.bottom().saturating_sub(1) && x < rect.right().saturating_sub(1) {
        frame.set_cursor_position(Position::new(x, y));
    }
}

/// Screen column of the cursor in an input starting at `left`.
fn cursor_column(left: u16, cursor_pos: usize) -> u16 {
    // border + two-space indent
    left.saturating_add(3)
        .saturating_add(u16::try_from(cursor_pos).unwrap_or(u16::MAX))
}

/// Draw the status line.
fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.form.is_submitting() {
        Line::styled(" Sending your message...", Style::default().fg(Color::Yellow))
    } else if let Some(notification) = app.latest_notification() {
        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        Line::from(vec![
            Span::styled(
                format!(" {} {} ", notification.created_at.format("%H:%M:%S"), notification.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(notification.description.clone()),
        ])
    } else if let Some(status) = &app.status {
        Line::styled(format!(" {}", status), Style::default().fg(Color::Yellow))
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the key bindings for the current focus.
fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.focus {
        Focus::Page => {
            " Up/Down scroll | PgUp/PgDn page | 1-6 sections | p projects | c contact | q quit "
        }
        Focus::Form(_) => " Tab/Shift-Tab field | Enter send | Esc back to page | Ctrl-C quit ",
    };
    let footer =
        Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(footer, area);
}
