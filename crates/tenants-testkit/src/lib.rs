// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::path::PathBuf;
use tenants_app::{NewTenant, PaymentStatus, Tenant, TenantId};
use time::{Date, Duration, Month};

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];

/// Earliest generated lease end, in days before the reference day.
const LEASE_PAST_DAYS: i64 = 120;
/// Latest generated lease end, in days after the reference day.
const LEASE_FUTURE_DAYS: i64 = 365;

/// One in this many generated tenants is late on rent.
const LATE_ONE_IN: usize = 3;

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded generator for tenant rows used by demo mode and tests.
#[derive(Debug, Clone)]
pub struct TenantFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl TenantFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    /// A "First Last" name, always short enough to pass form validation.
    pub fn name(&mut self) -> String {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        format!("{first} {last}")
    }

    pub fn payment_status(&mut self) -> PaymentStatus {
        if self.rng.int_n(LATE_ONE_IN) == 0 {
            PaymentStatus::Late
        } else {
            PaymentStatus::Current
        }
    }

    pub fn lease_end_date(&mut self, today: Date) -> Date {
        let offset = self.int_range_i64(-LEASE_PAST_DAYS, LEASE_FUTURE_DAYS);
        today.checked_add(Duration::days(offset)).unwrap_or(today)
    }

    /// A create payload whose lease end date is never after `today`.
    pub fn new_tenant(&mut self, today: Date) -> NewTenant {
        let offset = self.int_range_i64(0, LEASE_PAST_DAYS);
        NewTenant {
            name: self.name(),
            payment_status: self.payment_status(),
            lease_end_date: today.checked_sub(Duration::days(offset)).unwrap_or(today),
        }
    }

    pub fn tenant(&mut self, id: i64, today: Date) -> Tenant {
        Tenant {
            id: TenantId::new(id),
            name: self.name(),
            payment_status: self.payment_status(),
            lease_end_date: self.lease_end_date(today),
        }
    }

    /// `count` tenants with ids `1..=count`, in id order.
    pub fn tenants(&mut self, count: usize, today: Date) -> Vec<Tenant> {
        (1..=count as i64).map(|id| self.tenant(id, today)).collect()
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn int_range_i64(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }
}

/// Fixed "today" for tests that must not depend on the wall clock.
pub fn fixture_today() -> Date {
    Date::from_calendar_date(2026, Month::January, 1).expect("valid calendar date")
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}
