use super::*;

use crate::dashboard::{AlarmState, ConnState, GenPulse, GenState};

pub(super) fn render_ui(
    area: Rect,
    frame: &mut ratatui::Frame<'_>,
    state: &UiState,
    no_input: bool,
) {
    if !state.dashboard.authenticated {
        render_login(area, frame, state);
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .split(area);
    render_header(rows[0], frame, state);
    render_cards(rows[1], frame, state);
    render_generator_panel(rows[2], frame, state, no_input);
    render_footer(rows[3], frame, state, no_input);
}

fn render_header(area: Rect, frame: &mut ratatui::Frame<'_>, state: &UiState) {
    let dashboard = &state.dashboard;
    let (chip_text, chip_style) = connection_chip(dashboard.connection, &dashboard.connection_label);
    let line = Line::from(vec![
        Span::styled("ATS Remote Monitor", header_style()),
        Span::raw("  "),
        Span::styled(chip_text, chip_style),
        Span::raw("  "),
        Span::styled(dashboard.user_line.clone(), value_style()),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", dashboard.language.code().to_ascii_uppercase()),
            label_style(),
        ),
    ]);
    let block = panel_block("", Style::default().fg(COLOR_INFO));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn connection_chip(conn: ConnState, label: &str) -> (String, Style) {
    let color = match conn {
        ConnState::Connecting => COLOR_AMBER,
        ConnState::Connected | ConnState::Online => COLOR_GREEN,
        ConnState::Lost => COLOR_AMBER,
        ConnState::Error => COLOR_RED,
    };
    (
        format!("[{label}]"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_cards(area: Rect, frame: &mut ratatui::Frame<'_>, state: &UiState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);
    render_voltage_card(cols[0], frame, state);
    render_text_card(
        cols[1],
        frame,
        state,
        LabelKey::CardSource,
        &state.dashboard.source_text,
        value_style(),
    );
    render_text_card(
        cols[2],
        frame,
        state,
        LabelKey::CardBackup,
        &state.dashboard.backup_text,
        value_style(),
    );
    render_alarm_card(cols[3], frame, state);
}

fn render_voltage_card(area: Rect, frame: &mut ratatui::Frame<'_>, state: &UiState) {
    let dashboard = &state.dashboard;
    let severity = dashboard.voltage_severity;
    let mut border = severity.map_or_else(|| Style::default().fg(COLOR_INFO), severity_style);
    if dashboard.voltage_pulse_until.is_some() {
        border = border.add_modifier(Modifier::BOLD);
    }
    let text = if dashboard.voltage_text.is_empty() {
        Span::styled("--", Style::default().fg(COLOR_INFO))
    } else {
        Span::styled(
            dashboard.voltage_text.clone(),
            severity.map_or_else(value_style, severity_style),
        )
    };
    let block = panel_block(label_or(LabelKey::CardPower, dashboard.language), border);
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}

fn render_text_card(
    area: Rect,
    frame: &mut ratatui::Frame<'_>,
    state: &UiState,
    title: LabelKey,
    text: &str,
    style: Style,
) {
    let text = if text.is_empty() {
        Span::styled("--", Style::default().fg(COLOR_INFO))
    } else {
        Span::styled(text.to_string(), style)
    };
    let block = panel_block(
        label_or(title, state.dashboard.language),
        Style::default().fg(COLOR_INFO),
    );
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}

fn render_alarm_card(area: Rect, frame: &mut ratatui::Frame<'_>, state: &UiState) {
    let dashboard = &state.dashboard;
    let style = match dashboard.alarm {
        AlarmState::Ok => Style::default().fg(COLOR_GREEN),
        AlarmState::Fault => Style::default().fg(COLOR_RED).add_modifier(Modifier::BOLD),
    };
    let block = panel_block(label_or(LabelKey::CardAlarm, dashboard.language), style);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            dashboard.alarm_label.clone(),
            style,
        )))
        .block(block),
        area,
    );
}

fn render_generator_panel(
    area: Rect,
    frame: &mut ratatui::Frame<'_>,
    state: &UiState,
    no_input: bool,
) {
    let dashboard = &state.dashboard;
    let status_style = match dashboard.generator {
        GenState::Running => Style::default().fg(COLOR_GREEN),
        GenState::Stopped => Style::default().fg(COLOR_INFO),
    };
    let mut button_style = match dashboard.generator {
        // Button offers the opposite of the believed state.
        GenState::Stopped => Style::default().fg(COLOR_GREEN).add_modifier(Modifier::BOLD),
        GenState::Running => Style::default().fg(COLOR_RED).add_modifier(Modifier::BOLD),
    };
    if let Some((pulse, _)) = dashboard.button_pulse {
        let bg = match pulse {
            GenPulse::Start => COLOR_GREEN,
            GenPulse::Stop => COLOR_RED,
        };
        button_style = Style::default().bg(bg).fg(Color::Black).add_modifier(Modifier::BOLD);
    }
    let mut lines = vec![Line::from(Span::styled(
        dashboard.generator_status_label.clone(),
        status_style,
    ))];
    if no_input {
        lines.push(Line::from(Span::styled(
            "Read-only mode",
            Style::default().fg(COLOR_INFO),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", dashboard.generator_button_label),
                button_style,
            ),
            Span::styled("  (g)", Style::default().fg(COLOR_INFO)),
        ]));
    }
    let block = panel_block(
        label_or(LabelKey::CardGenerator, dashboard.language),
        Style::default().fg(COLOR_TEAL),
    );
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(area: Rect, frame: &mut ratatui::Frame<'_>, state: &UiState, no_input: bool) {
    let dashboard = &state.dashboard;
    let mut lines = Vec::new();
    if let Some(note) = dashboard.notification.as_ref() {
        lines.push(Line::from(Span::styled(
            note.text.clone(),
            notify_style(note.kind),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            dashboard.last_update_label.clone(),
            Style::default().fg(COLOR_INFO),
        )));
    }
    let hint = if no_input {
        "l language  q quit"
    } else {
        "g generator  l language  q quit"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(COLOR_INFO).add_modifier(Modifier::DIM),
    )));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_login(area: Rect, frame: &mut ratatui::Frame<'_>, state: &UiState) {
    let dashboard = &state.dashboard;
    let form = &state.login;
    let box_width = area.width.min(44);
    let box_height = 9;
    let boxed = Rect {
        x: area.x + area.width.saturating_sub(box_width) / 2,
        y: area.y + area.height.saturating_sub(box_height) / 2,
        width: box_width,
        height: box_height.min(area.height),
    };
    let block = panel_block("ATS Remote Monitor", Style::default().fg(COLOR_TEAL));
    let inner = block.inner(boxed);
    frame.render_widget(block, boxed);

    let mut lines = Vec::new();
    lines.push(login_field_line(
        &form.username,
        label_or(LabelKey::UsernamePlaceholder, dashboard.language),
        form.focus == Some(LoginField::Username),
        false,
    ));
    lines.push(Line::default());
    lines.push(login_field_line(
        &form.password,
        label_or(LabelKey::PasswordPlaceholder, dashboard.language),
        form.focus == Some(LoginField::Password),
        true,
    ));
    lines.push(Line::default());
    if let Some((message, kind)) = dashboard.login_message.as_ref() {
        lines.push(Line::from(Span::styled(message.clone(), notify_style(*kind))));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab next field  Enter sign in  Esc quit",
            Style::default().fg(COLOR_INFO).add_modifier(Modifier::DIM),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn login_field_line(value: &str, placeholder: &str, focused: bool, mask: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let text = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(COLOR_INFO))
    } else if mask {
        Span::styled("*".repeat(value.chars().count()), value_style())
    } else {
        Span::styled(value.to_string(), value_style())
    };
    Line::from(vec![
        Span::styled(
            marker,
            Style::default().fg(COLOR_TEAL).add_modifier(Modifier::BOLD),
        ),
        text,
    ])
    .style(if focused {
        Style::default().bg(COLOR_FIELD_BG)
    } else {
        Style::default()
    })
}
