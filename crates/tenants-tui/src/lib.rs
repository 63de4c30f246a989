// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tenants_app::{
    AppCommand, AppEvent, AppMode, AppState, FilterMode, FormField, MAX_NAME_CHARS, NewTenant,
    PaymentStatus, SortMode, Tenant, TenantId, format_display_date,
};
use time::OffsetDateTime;

const POLL_INTERVAL: Duration = Duration::from_millis(120);
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);
const SORT_ASCENDING: &str = "↑";
const SORT_DESCENDING: &str = "↓";
const ACTIONS_HEADER: &str = "Actions";
const ACTIONS_HINT: &str = "d delete";

/// Everything the UI needs from the outside world.
///
/// The CLI implements this over the HTTP client; tests and demo mode use
/// in-memory lists.
pub trait AppRuntime {
    fn load_tenants(&mut self) -> Result<Vec<Tenant>>;
    fn add_tenant(&mut self, tenant: &NewTenant) -> Result<()>;
    fn delete_tenant(&mut self, id: TenantId) -> Result<()>;

    /// Clock for the lease window and the form's "today".
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    /// Starts a list load whose outcome arrives on `tx`.
    ///
    /// The `spawn_*` defaults run inline. Runtimes backed by the network
    /// override them with worker threads so the UI keeps drawing.
    fn spawn_load(&mut self, request_id: u64, tx: Sender<InternalEvent>) -> Result<()> {
        let event = TenantEvent::loaded(request_id, self.load_tenants());
        send_tenant_event(&tx, event)
    }

    fn spawn_add(&mut self, tenant: NewTenant, tx: Sender<InternalEvent>) -> Result<()> {
        let result = self.add_tenant(&tenant);
        send_tenant_event(&tx, TenantEvent::created(tenant.name, result))
    }

    fn spawn_delete(&mut self, id: TenantId, tx: Sender<InternalEvent>) -> Result<()> {
        let result = self.delete_tenant(id);
        send_tenant_event(&tx, TenantEvent::deleted(id, result))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    Tenants(TenantEvent),
}

/// Outcome of a remote call started through [`AppRuntime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantEvent {
    Loaded { request_id: u64, tenants: Vec<Tenant> },
    LoadFailed { request_id: u64, error: String },
    Created { name: String },
    CreateFailed { name: String, error: String },
    Deleted { id: TenantId },
    DeleteFailed { id: TenantId, error: String },
}

impl TenantEvent {
    pub fn loaded(request_id: u64, result: Result<Vec<Tenant>>) -> Self {
        match result {
            Ok(tenants) => Self::Loaded {
                request_id,
                tenants,
            },
            Err(error) => Self::LoadFailed {
                request_id,
                error: error.to_string(),
            },
        }
    }

    pub fn created(name: String, result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::Created { name },
            Err(error) => Self::CreateFailed {
                name,
                error: error.to_string(),
            },
        }
    }

    pub fn deleted(id: TenantId, result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::Deleted { id },
            Err(error) => Self::DeleteFailed {
                id,
                error: error.to_string(),
            },
        }
    }
}

pub fn send_tenant_event(tx: &Sender<InternalEvent>, event: TenantEvent) -> Result<()> {
    tx.send(InternalEvent::Tenants(event))
        .map_err(|_| anyhow!("tenant event channel closed"))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    rows: Vec<Tenant>,
    selected_row: usize,
    help_visible: bool,
    status_token: u64,
    /// Id of the newest load; older results are dropped.
    load_request: u64,
    loading: bool,
    saving: bool,
    deleting: Option<TenantId>,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    request_load(state, runtime, &mut view_data, &internal_tx);

    let result = event_loop(
        &mut terminal,
        state,
        runtime,
        &mut view_data,
        &internal_tx,
        &internal_rx,
    );

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn event_loop<R: AppRuntime>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    internal_rx: &Receiver<InternalEvent>,
) -> Result<()> {
    loop {
        process_internal_events(state, runtime, view_data, internal_tx, internal_rx);

        terminal
            .draw(|frame| render(frame, state, view_data))
            .context("draw frame")?;

        if !event::poll(POLL_INTERVAL).context("poll event")? {
            continue;
        }
        if let Event::Key(key) = event::read().context("read event")?
            && handle_key_event(state, runtime, view_data, internal_tx, key)
        {
            return Ok(());
        }
    }
}

fn process_internal_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Tenants(event) => {
                handle_tenant_event(state, runtime, view_data, tx, event);
            }
        }
    }
}

fn handle_tenant_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    event: TenantEvent,
) {
    match event {
        TenantEvent::Loaded { request_id, .. } | TenantEvent::LoadFailed { request_id, .. }
            if request_id != view_data.load_request =>
        {
            tracing::debug!(request_id, "stale tenant load dropped");
        }
        TenantEvent::Loaded { tenants, .. } => {
            view_data.loading = false;
            tracing::debug!(count = tenants.len(), "tenant list loaded");
            state.dispatch(AppCommand::ReplaceTenants(tenants));
            refresh_view_data(state, runtime, view_data);
        }
        TenantEvent::LoadFailed { error, .. } => {
            view_data.loading = false;
            tracing::warn!("tenant list load failed: {error}");
            emit_status(state, view_data, tx, format!("load failed: {error}"));
        }
        TenantEvent::Created { name } => {
            view_data.saving = false;
            tracing::info!(%name, "tenant created");
            dispatch_and_refresh(state, runtime, view_data, AppCommand::FormSaved, tx);
        }
        TenantEvent::CreateFailed { name, error } => {
            view_data.saving = false;
            tracing::warn!(%name, "tenant create failed: {error}");
            emit_status(state, view_data, tx, format!("save failed: {error}"));
        }
        TenantEvent::Deleted { id } => {
            view_data.deleting = None;
            tracing::info!(%id, "tenant deleted");
            dispatch_and_refresh(state, runtime, view_data, AppCommand::TenantDeleted(id), tx);
        }
        TenantEvent::DeleteFailed { id, error } => {
            view_data.deleting = None;
            tracing::warn!(%id, "tenant delete failed: {error}");
            emit_status(state, view_data, tx, format!("delete failed: {error}"));
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    match state.mode {
        AppMode::Nav => handle_nav_key(state, runtime, view_data, internal_tx, key),
        AppMode::Form => handle_form_key(state, runtime, view_data, internal_tx, key),
    }
    false
}

fn handle_nav_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let command = match (key.code, key.modifiers) {
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
            return;
        }
        (KeyCode::Char(digit @ '1'..='3'), KeyModifiers::NONE) => {
            let index = usize::from(digit as u8 - b'1');
            AppCommand::SetFilter(FilterMode::ALL[index])
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) | (KeyCode::Tab, _) => AppCommand::NextFilter,
        (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::BackTab, _) => {
            AppCommand::PrevFilter
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => AppCommand::SetSort(rotate_sort(state.sort, 1)),
        (KeyCode::Char('S'), _) => AppCommand::SetSort(rotate_sort(state.sort, -1)),
        (KeyCode::Char('j') | KeyCode::Down, _) => {
            move_selection(view_data, 1);
            return;
        }
        (KeyCode::Char('k') | KeyCode::Up, _) => {
            move_selection(view_data, -1);
            return;
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            view_data.selected_row = 0;
            return;
        }
        (KeyCode::Char('G'), _) => {
            view_data.selected_row = view_data.rows.len().saturating_sub(1);
            return;
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => AppCommand::ToggleForm,
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            delete_selected(state, runtime, view_data, internal_tx);
            return;
        }
        _ => return,
    };
    dispatch_and_refresh(state, runtime, view_data, command, internal_tx);
}

fn handle_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let command = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => AppCommand::CancelForm,
        (KeyCode::Tab | KeyCode::Down, _) => AppCommand::NextFormField,
        (KeyCode::BackTab | KeyCode::Up, _) => AppCommand::PrevFormField,
        (KeyCode::Enter, _) => {
            submit_form(state, runtime, view_data, internal_tx);
            return;
        }
        (KeyCode::Char('s'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            submit_form(state, runtime, view_data, internal_tx);
            return;
        }
        (KeyCode::Backspace, _) => AppCommand::DeleteChar,
        (KeyCode::Char(ch), _) if state.form_field == FormField::PaymentStatus => {
            match payment_status_for_key(ch) {
                Some(status) => AppCommand::ChoosePaymentStatus(status),
                None => {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        "press 1 for CURRENT or 2 for LATE",
                    );
                    return;
                }
            }
        }
        (KeyCode::Char(ch), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            AppCommand::InsertChar(ch)
        }
        _ => return,
    };
    dispatch_and_refresh(state, runtime, view_data, command, internal_tx);
}

fn payment_status_for_key(ch: char) -> Option<PaymentStatus> {
    match ch {
        'c' | 'C' => Some(PaymentStatus::Current),
        'l' | 'L' => Some(PaymentStatus::Late),
        digit => digit
            .to_digit(10)
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| PaymentStatus::ALL.get(index as usize).copied()),
    }
}

/// "1 CURRENT | 2 LATE", numbered the way the choice keys are.
fn payment_status_choices() -> String {
    PaymentStatus::ALL
        .iter()
        .enumerate()
        .map(|(index, status)| format!("{} {}", index + 1, status.as_str()))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn rotate_sort(current: SortMode, delta: isize) -> SortMode {
    let modes = SortMode::ALL;
    let index = modes.iter().position(|mode| *mode == current).unwrap_or(0) as isize;
    let next = (index + delta).rem_euclid(modes.len() as isize) as usize;
    modes[next]
}

fn move_selection(view_data: &mut ViewData, delta: isize) {
    let Some(last) = view_data.rows.len().checked_sub(1) else {
        view_data.selected_row = 0;
        return;
    };
    let next = (view_data.selected_row as isize + delta).clamp(0, last as isize);
    view_data.selected_row = next as usize;
}

fn submit_form<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if view_data.saving {
        emit_status(state, view_data, internal_tx, "save already in progress");
        return;
    }

    let today = runtime.now().date();
    let payload = match state.validated_form_payload(today) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::debug!("form rejected: {error}");
            dispatch_and_refresh(
                state,
                runtime,
                view_data,
                AppCommand::RejectForm(error.to_string()),
                internal_tx,
            );
            return;
        }
    };

    view_data.saving = true;
    if let Err(error) = runtime.spawn_add(payload, internal_tx.clone()) {
        view_data.saving = false;
        tracing::warn!("tenant create failed: {error:#}");
        emit_status(state, view_data, internal_tx, format!("save failed: {error}"));
    }
}

fn delete_selected<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if let Some(pending) = view_data.deleting {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("tenant {pending} delete in progress"),
        );
        return;
    }

    let Some(id) = view_data
        .rows
        .get(view_data.selected_row)
        .map(|tenant| tenant.id)
    else {
        emit_status(state, view_data, internal_tx, "nothing to delete");
        return;
    };

    view_data.deleting = Some(id);
    if let Err(error) = runtime.spawn_delete(id, internal_tx.clone()) {
        view_data.deleting = None;
        tracing::warn!("tenant {id} delete failed: {error:#}");
        emit_status(state, view_data, internal_tx, format!("delete failed: {error}"));
    }
}

fn request_load<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    view_data.load_request = view_data.load_request.wrapping_add(1);
    view_data.loading = true;
    if let Err(error) = runtime.spawn_load(view_data.load_request, internal_tx.clone()) {
        view_data.loading = false;
        tracing::warn!("tenant list load failed: {error:#}");
        emit_status(state, view_data, internal_tx, format!("load failed: {error}"));
    }
}

fn dispatch_and_refresh<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    command: AppCommand,
    internal_tx: &Sender<InternalEvent>,
) {
    let events = state.dispatch(command);
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(internal_tx, view_data.status_token);
    }

    refresh_view_data(state, runtime, view_data);
    if events.contains(&AppEvent::TenantsStale) {
        request_load(state, runtime, view_data, internal_tx);
    }
}

fn refresh_view_data<R: AppRuntime>(state: &AppState, runtime: &R, view_data: &mut ViewData) {
    view_data.rows = state.visible_tenants(runtime.now());
    view_data.selected_row = view_data
        .selected_row
        .min(view_data.rows.len().saturating_sub(1));
}

fn sort_marker(sort: SortMode) -> &'static str {
    match sort {
        SortMode::Date => SORT_DESCENDING,
        SortMode::Id | SortMode::Name | SortMode::PaymentStatus => SORT_ASCENDING,
    }
}

fn table_headers(sort: SortMode) -> Vec<String> {
    let mut headers = SortMode::ALL
        .iter()
        .map(|mode| {
            if *mode == sort {
                format!("{} {}", mode.header(), sort_marker(sort))
            } else {
                mode.header().to_owned()
            }
        })
        .collect::<Vec<_>>();
    headers.push(ACTIONS_HEADER.to_owned());
    headers
}

fn table_title(state: &AppState, view_data: &ViewData) -> String {
    let title = format!(
        "{} ({}/{})",
        state.filter.label(),
        view_data.rows.len(),
        state.tenants.len()
    );
    if view_data.loading {
        format!("{title} loading...")
    } else {
        title
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let selected = FilterMode::ALL
        .iter()
        .position(|filter| *filter == state.filter)
        .unwrap_or(0);
    let tab_titles = FilterMode::ALL
        .iter()
        .enumerate()
        .map(|(index, filter)| format!("{} {}", index + 1, filter.label()))
        .collect::<Vec<String>>();
    let tabs = Tabs::new(tab_titles)
        .block(Block::default().title("tenants").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    render_table(frame, layout[1], state, view_data);

    let status_widget = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if state.mode == AppMode::Form {
        let area = centered_rect(60, 45, frame.area());
        frame.render_widget(Clear, area);
        let form = Paragraph::new(render_form_overlay_text(state)).block(
            Block::default()
                .title("add tenant")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(form, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let header_cells = table_headers(state.sort).into_iter().map(|label| {
        Cell::from(label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells);

    let rows = view_data.rows.iter().enumerate().map(|(row_index, tenant)| {
        let status_style = match tenant.payment_status {
            PaymentStatus::Late => Style::default().fg(Color::Red),
            PaymentStatus::Current => Style::default().fg(Color::Green),
        };
        let mut row_style = Style::default();
        if row_index == view_data.selected_row {
            row_style = row_style.bg(Color::DarkGray);
        }

        Row::new(vec![
            Cell::from(tenant.id.to_string()),
            Cell::from(tenant.name.clone()),
            Cell::from(tenant.payment_status.as_str()).style(status_style),
            Cell::from(format_display_date(tenant.lease_end_date)),
            Cell::from(ACTIONS_HINT).style(Style::default().fg(Color::DarkGray)),
        ])
        .style(row_style)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Min(MAX_NAME_CHARS as u16),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(table_title(state, view_data))
                .borders(Borders::ALL),
        );
    frame.render_widget(table, area);
}

fn status_text(state: &AppState) -> String {
    let (mode, hints) = match state.mode {
        AppMode::Nav => (
            "NAV",
            "1/2/3 b/f filter | s/S sort | j/k g/G | a add | d delete | ? help | ctrl+q",
        ),
        AppMode::Form => (
            "FORM",
            "tab/shift+tab field | 1/2 status | enter or ctrl+s save | esc cancel",
        ),
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn render_form_overlay_text(state: &AppState) -> String {
    let mut lines = FormField::ALL
        .iter()
        .map(|field| {
            let cursor = if *field == state.form_field { ">" } else { " " };
            let mut value = state.form.display(*field);
            if *field == FormField::PaymentStatus && value.is_empty() {
                value = format!("({} if unset)", PaymentStatus::Current.as_str());
            }
            format!("{cursor} {}: {value}", field.label())
        })
        .collect::<Vec<_>>();

    lines.push(String::new());
    lines.push(match state.form_field {
        FormField::Name => format!("fewer than {MAX_NAME_CHARS} characters"),
        FormField::PaymentStatus => payment_status_choices(),
        FormField::LeaseEndDate => "YYYY-MM-DD, not after today".to_owned(),
    });

    if let Some(error) = &state.form_error {
        lines.push(String::new());
        lines.push(format!("error: {error}"));
    }
    lines.join("\n")
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help\n\
filter: 1 all | 2 payment is late | 3 lease ends in less than a month | b/f cycle\n\
sort: s/S cycle #, name, payment status, lease end date\n\
rows: j/k move | g/G first/last | d delete selected\n\
form: a open | tab/shift+tab field | 1/2 choose status | enter or ctrl+s save | esc cancel"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
