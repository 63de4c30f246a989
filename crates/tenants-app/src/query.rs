// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::cmp::Ordering;
use time::{Duration, OffsetDateTime};

use crate::{FilterMode, SortMode, Tenant};

/// Window used by [`FilterMode::Date`].
pub const LEASE_WINDOW: Duration = Duration::days(30);

impl FilterMode {
    /// Whether `tenant` passes this filter at the moment `now`.
    ///
    /// `Date` measures time elapsed since the lease end date, so every future
    /// lease end passes and anything more than [`LEASE_WINDOW`] in the past fails.
    pub fn matches(self, tenant: &Tenant, now: OffsetDateTime) -> bool {
        match self {
            Self::All => true,
            Self::Late => tenant.payment_status == crate::PaymentStatus::Late,
            Self::Date => {
                let lease_end = tenant.lease_end_date.midnight().assume_utc();
                now - lease_end <= LEASE_WINDOW
            }
        }
    }

    pub fn predicate(self, now: OffsetDateTime) -> impl Fn(&Tenant) -> bool {
        move |tenant| self.matches(tenant, now)
    }
}

impl SortMode {
    /// Three-way comparison with no secondary key; `Date` puts the latest lease end first.
    pub fn compare(self, left: &Tenant, right: &Tenant) -> Ordering {
        match self {
            Self::Id => left.id.cmp(&right.id),
            Self::Name => left.name.cmp(&right.name),
            Self::PaymentStatus => left
                .payment_status
                .as_str()
                .cmp(right.payment_status.as_str()),
            Self::Date => right.lease_end_date.cmp(&left.lease_end_date),
        }
    }

    pub fn comparator(self) -> impl Fn(&Tenant, &Tenant) -> Ordering {
        move |left, right| self.compare(left, right)
    }
}

/// Filters then stable-sorts a copy of `tenants`.
pub fn visible_tenants(
    tenants: &[Tenant],
    filter: FilterMode,
    sort: SortMode,
    now: OffsetDateTime,
) -> Vec<Tenant> {
    let keep = filter.predicate(now);
    let mut rows = tenants
        .iter()
        .filter(|&tenant| keep(tenant))
        .cloned()
        .collect::<Vec<_>>();
    rows.sort_by(sort.comparator());
    rows
}
