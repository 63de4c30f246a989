// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use time::{Date, OffsetDateTime};

use crate::{
    AppMode, FilterMode, FormField, NewTenant, PaymentStatus, SortMode, Tenant, TenantFormInput,
    TenantId, visible_tenants,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub tenants: Vec<Tenant>,
    pub filter: FilterMode,
    pub sort: SortMode,
    pub form: TenantFormInput,
    pub form_field: FormField,
    pub form_error: Option<String>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Nav,
            tenants: Vec::new(),
            filter: FilterMode::All,
            sort: SortMode::Id,
            form: TenantFormInput::default(),
            form_field: FormField::Name,
            form_error: None,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    SetFilter(FilterMode),
    NextFilter,
    PrevFilter,
    SetSort(SortMode),
    ToggleForm,
    CancelForm,
    NextFormField,
    PrevFormField,
    InsertChar(char),
    DeleteChar,
    ChoosePaymentStatus(PaymentStatus),
    RejectForm(String),
    FormSaved,
    TenantDeleted(TenantId),
    ReplaceTenants(Vec<Tenant>),
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    FilterChanged(FilterMode),
    SortChanged(SortMode),
    FormFieldChanged(FormField),
    FormEdited,
    FormRejected(String),
    /// The service copy changed; the local list must be reloaded.
    TenantsStale,
    TenantsLoaded(usize),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::SetFilter(filter) => {
                self.filter = filter;
                vec![AppEvent::FilterChanged(filter)]
            }
            AppCommand::NextFilter => self.rotate_filter(1),
            AppCommand::PrevFilter => self.rotate_filter(-1),
            AppCommand::SetSort(sort) => {
                self.sort = sort;
                vec![
                    AppEvent::SortChanged(sort),
                    self.set_status(&format!("sort {}", sort.header())),
                ]
            }
            AppCommand::ToggleForm => {
                self.mode = match self.mode {
                    AppMode::Nav => AppMode::Form,
                    AppMode::Form => AppMode::Nav,
                };
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::CancelForm => {
                self.mode = AppMode::Nav;
                vec![AppEvent::ModeChanged(self.mode), self.set_status("form closed")]
            }
            AppCommand::NextFormField => self.rotate_form_field(1),
            AppCommand::PrevFormField => self.rotate_form_field(-1),
            AppCommand::InsertChar(ch) => match self.form.text_mut(self.form_field) {
                Some(text) => {
                    text.push(ch);
                    vec![AppEvent::FormEdited]
                }
                None => Vec::new(),
            },
            AppCommand::DeleteChar => match self.form.text_mut(self.form_field) {
                Some(text) => {
                    text.pop();
                    vec![AppEvent::FormEdited]
                }
                None => Vec::new(),
            },
            AppCommand::ChoosePaymentStatus(status) => {
                self.form.payment_status = Some(status);
                vec![AppEvent::FormEdited]
            }
            AppCommand::RejectForm(message) => {
                self.form_error = Some(message.clone());
                vec![AppEvent::FormRejected(message)]
            }
            AppCommand::FormSaved => {
                self.form_error = None;
                vec![AppEvent::TenantsStale, self.set_status("tenant saved")]
            }
            AppCommand::TenantDeleted(id) => vec![
                AppEvent::TenantsStale,
                self.set_status(&format!("tenant {id} deleted")),
            ],
            AppCommand::ReplaceTenants(tenants) => {
                self.tenants = tenants;
                vec![AppEvent::TenantsLoaded(self.tenants.len())]
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    /// Validates the pending form against `today` without touching state.
    pub fn validated_form_payload(&self, today: Date) -> Result<NewTenant> {
        self.form.validate(today)
    }

    /// The rows to render: current list filtered then sorted by the active modes.
    pub fn visible_tenants(&self, now: OffsetDateTime) -> Vec<Tenant> {
        visible_tenants(&self.tenants, self.filter, self.sort, now)
    }

    fn rotate_filter(&mut self, delta: isize) -> Vec<AppEvent> {
        let filters = FilterMode::ALL;
        let current = filters
            .iter()
            .position(|filter| *filter == self.filter)
            .unwrap_or(0) as isize;
        let len = filters.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.filter = filters[next];
        vec![AppEvent::FilterChanged(self.filter)]
    }

    fn rotate_form_field(&mut self, delta: isize) -> Vec<AppEvent> {
        let fields = FormField::ALL;
        let current = fields
            .iter()
            .position(|field| *field == self.form_field)
            .unwrap_or(0) as isize;
        let len = fields.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.form_field = fields[next];
        vec![AppEvent::FormFieldChanged(self.form_field)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
