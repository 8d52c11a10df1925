use chrono::{Datelike, NaiveDate};
use kerbside_core::model::{CollectionKind, UpcomingGroup};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs, Wrap},
};

use crate::app::{App, View};
use crate::calendar::MonthGrid;
use crate::catalog::{DayMarker, kind_style};

const HOLIDAY_NOTE: &str = "Holiday schedule: In Christmas week, collections from Dec 25 onwards \
                            are delayed by 2 days. In New Year's week, collections from Jan 1 \
                            onwards are delayed by 1 day. Normal service resumes the following Monday.";

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, footer
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, footer_area] = chunks else {
        return;
    };

    let header = Paragraph::new(vec![
        Line::from(app.location.as_str()).style(Style::default().fg(Color::Green)),
        Line::from(app.today.format("%A, %-d %B %Y").to_string()),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recycling Collection"),
    );
    frame.render_widget(header, *header_area);

    match app.view {
        View::Upcoming => draw_upcoming(frame, app, *content_area),
        View::Calendar => draw_calendar(frame, app, *content_area),
    }

    draw_footer(frame, app, *footer_area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [tabs_area, status_area] = chunks else {
        return;
    };

    let selected: usize = match app.view {
        View::Upcoming => 0,
        View::Calendar => 1,
    };
    let tabs = Tabs::new(vec!["Upcoming", "Calendar"])
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    frame.render_widget(tabs, *tabs_area);

    let nav_hint = "Tab/←/→ switch view · u upcoming · c calendar · q/Esc/Ctrl-C quit";
    let status_text = if app.show_holiday_note() {
        format!("{HOLIDAY_NOTE}\n{nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, *status_area);
}

fn draw_upcoming(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Min(0)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [soon_area, later_area] = chunks else {
        return;
    };

    let day_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(*soon_area);

    let day_areas = day_chunks.as_ref();
    let [today_area, tomorrow_area] = day_areas else {
        return;
    };

    let overview = &app.overview;
    draw_day_panel(
        frame,
        *today_area,
        "Today",
        &overview.today_collections,
        "No collections today.",
    );
    draw_day_panel(
        frame,
        *tomorrow_area,
        "Tomorrow",
        &overview.tomorrow_collections,
        "No collections tomorrow.",
    );

    draw_later(frame, app, &overview.later, *later_area);
}

fn draw_day_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    kinds: &[CollectionKind],
    empty_text: &str,
) {
    let block = Block::default().borders(Borders::ALL).title(title.to_owned());

    if kinds.is_empty() {
        let paragraph = Paragraph::new(empty_text.to_owned())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items = kinds
        .iter()
        .map(|kind| ListItem::new(kind_line(*kind)))
        .collect::<Vec<ListItem<'_>>>();
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_later(frame: &mut Frame<'_>, app: &App, groups: &[UpcomingGroup], area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Other items");

    if groups.is_empty() {
        let paragraph = Paragraph::new("All items are scheduled for collection soon.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let mut items = Vec::new();
    for group in groups {
        let mut heading = vec![Span::styled(
            group.date.format("%A, %-d %B").to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )];
        if app.lookup.is_holiday_shifted(group.date) {
            heading.push(Span::raw(" (holiday)"));
        }
        items.push(ListItem::new(Line::from(heading)));
        items.extend(
            group
                .kinds
                .iter()
                .map(|kind| ListItem::new(kind_line(*kind))),
        );
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn kind_line(kind: CollectionKind) -> Line<'static> {
    let style = kind_style(kind);
    Line::from(vec![
        Span::styled("▌ ", Style::default().fg(style.color)),
        Span::styled(style.name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" · "),
        Span::styled(style.description, Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" [{}]", style.container),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn draw_calendar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [legend_area, months_area] = chunks else {
        return;
    };

    let mut legend = Vec::new();
    for marker in DayMarker::LEGEND {
        legend.push(Span::styled("  ", marker.style()));
        legend.push(Span::raw(format!(" {}   ", marker.label())));
    }
    frame.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        *legend_area,
    );

    let months = app.months();
    let column_count = u32::try_from(months.len()).unwrap_or(1).max(1);
    let month_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(months.iter().map(|_| Constraint::Ratio(1, column_count)))
        .split(*months_area);

    for (grid, month_area) in months.iter().zip(month_areas.iter()) {
        draw_month(frame, app, grid, *month_area);
    }
}

fn draw_month(frame: &mut Frame<'_>, app: &App, grid: &MonthGrid, area: Rect) {
    let rows = grid.weeks.iter().map(|week| {
        Row::new(
            week.iter()
                .map(|cell| day_cell(app, *cell))
                .collect::<Vec<Cell<'_>>>(),
        )
    });

    let table = Table::new(rows, [Constraint::Length(3); 7])
        .header(
            Row::new(WEEKDAYS.to_vec()).style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(grid.title(app.today.year())),
        )
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn day_cell(app: &App, cell: Option<NaiveDate>) -> Cell<'static> {
    let Some(date) = cell else {
        return Cell::from("");
    };

    let collections = app.lookup.collections_on(date);
    let mut style =
        DayMarker::for_collections(&collections).map_or_else(Style::default, DayMarker::style);
    if date == app.today {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }

    Cell::from(format!("{:>2}", date.day())).style(style)
}
