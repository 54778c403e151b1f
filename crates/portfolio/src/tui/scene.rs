//! Hero and analytics scenes on a ratatui canvas.

use std::f64::consts::TAU;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use portfolio_core::scene::{HeroScene, Ring, BOUNDARY};
use portfolio_models::Tone;

use super::app::App;
use super::ui::tone_color;

/// Half-width of the canvas in scene units.
const EXTENT: f64 = BOUNDARY + 10.0;

/// Scene units per ring radius unit.
const RING_SCALE: f64 = 6.0;

/// Points sampled per ring.
const RING_POINTS: usize = 72;

/// Particles projected onto the XY plane after the field's Y rotation.
pub(super) fn project_particles(hero: &HeroScene) -> Vec<(f64, f64)> {
    let (sin, cos) = hero.field.rotation_y().sin_cos();
    hero.field
        .particles()
        .iter()
        .map(|p| {
            let [x, y, z] = p.position;
            (x * cos + z * sin, y)
        })
        .collect()
}

/// Outline of a ring tilted by its rotations.
pub(super) fn ring_outline(ring: &Ring) -> Vec<(f64, f64)> {
    let radius = ring.radius * RING_SCALE;
    let tilt = ring.rotation_x.cos();
    let (sin_y, cos_y) = ring.rotation_y.sin_cos();
    (0..RING_POINTS)
        .map(|k| {
            let angle = TAU * k as f64 / RING_POINTS as f64;
            let (x, y) = (radius * angle.cos(), radius * angle.sin() * tilt);
            (x * cos_y - y * sin_y * 0.2, y)
        })
        .collect()
}

/// Hero block: greeting on the left, particle field on the right.
pub fn draw_hero(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let profile = &app.catalogue.profile;
    let primary = tone_color(Tone::Primary);
    let text = vec![
        Line::raw(""),
        Line::styled(
            format!("Hi, I'm {}", profile.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            profile.headline.as_str(),
            Style::default().fg(primary).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(profile.summary.as_str()),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" [c] Get in touch ", Style::default().fg(Color::Black).bg(primary)),
            Span::raw("  "),
            Span::styled(" [5] View my work ", Style::default().fg(primary)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let hero = &app.showcase.hero;
    let particles = project_particles(hero);
    let rings: Vec<Vec<(f64, f64)>> = hero.rings.iter().map(ring_outline).collect();
    let sphere = hero.sphere;
    let accent = tone_color(Tone::Accent);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-EXTENT, EXTENT])
        .y_bounds([-EXTENT, EXTENT])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &particles,
                color: Color::Rgb(99, 102, 241),
            });
            ctx.layer();
            for ring in &rings {
                ctx.draw(&Points {
                    coords: ring,
                    color: accent,
                });
            }
            ctx.draw(&Circle {
                x: 0.0,
                y: sphere.bob * RING_SCALE,
                radius: 12.0 + 2.0 * sphere.rotation_y.sin().abs(),
                color: primary,
            });
        });
    frame.render_widget(canvas, chunks[1]);
}

/// Analytics block: skill bars easing toward their targets.
pub fn draw_analytics(frame: &mut Frame, app: &App, area: Rect) {
    let analytics = &app.showcase.analytics;
    let bars: Vec<Bar> = analytics
        .bars
        .iter()
        .map(|bar| {
            let shown = if bar.target > 0.0 {
                (f64::from(bar.value) * (bar.height / bar.target)).round() as u64
            } else {
                0
            };
            let color: Color = bar.color.parse().unwrap_or(Color::Cyan);
            Bar::default()
                .label(Line::from(bar.label.clone()))
                .value(shown)
                .text_value(format!("{}%", shown))
                .style(Style::default().fg(color))
        })
        .collect();

    let title = format!(
        " Data Analytics Skills | avg {:.1}% | sway {:+.2} ",
        analytics.average_value(),
        analytics.sway
    );
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2)
        .max(100);
    frame.render_widget(chart, area);
}
