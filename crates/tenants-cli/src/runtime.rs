// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use std::sync::mpsc::Sender;
use std::thread;
use tenants_app::{NewTenant, Tenant, TenantId};
use tenants_client::Client;
use tenants_testkit::TenantFaker;
use tenants_tui::{InternalEvent, TenantEvent, send_tenant_event};
use time::OffsetDateTime;

/// Runtime backed by the remote tenant service.
///
/// Each `spawn_*` call runs on its own worker thread with a clone of the
/// client, so a slow or unreachable service never stalls the UI.
pub struct ServiceRuntime {
    client: Client,
}

impl ServiceRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn spawn_worker<F>(name: &str, tx: Sender<InternalEvent>, job: F) -> Result<()>
where
    F: FnOnce() -> TenantEvent + Send + 'static,
{
    thread::Builder::new()
        .name(format!("tenants-{name}"))
        .spawn(move || {
            if let Err(error) = send_tenant_event(&tx, job()) {
                tracing::debug!("worker result dropped: {error}");
            }
        })
        .with_context(|| format!("spawn {name} worker"))?;
    Ok(())
}

impl tenants_tui::AppRuntime for ServiceRuntime {
    fn load_tenants(&mut self) -> Result<Vec<Tenant>> {
        self.client.list_tenants()
    }

    fn add_tenant(&mut self, tenant: &NewTenant) -> Result<()> {
        self.client.add_tenant(tenant)
    }

    fn delete_tenant(&mut self, id: TenantId) -> Result<()> {
        self.client.delete_tenant(id)
    }

    fn spawn_load(&mut self, request_id: u64, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        spawn_worker("load", tx, move || {
            TenantEvent::loaded(request_id, client.list_tenants())
        })
    }

    fn spawn_add(&mut self, tenant: NewTenant, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        spawn_worker("create", tx, move || {
            let result = client.add_tenant(&tenant);
            TenantEvent::created(tenant.name, result)
        })
    }

    fn spawn_delete(&mut self, id: TenantId, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        spawn_worker("delete", tx, move || {
            TenantEvent::deleted(id, client.delete_tenant(id))
        })
    }
}

/// In-process tenant list for `--demo`; assigns ids like the service would.
#[derive(Debug, Clone, Default)]
pub struct MemoryRuntime {
    tenants: Vec<Tenant>,
}

impl MemoryRuntime {
    pub fn seeded(seed: u64, count: usize) -> Self {
        let today = OffsetDateTime::now_utc().date();
        let mut faker = TenantFaker::new(seed);
        Self {
            tenants: faker.tenants(count, today),
        }
    }

    fn next_id(&self) -> TenantId {
        let max = self
            .tenants
            .iter()
            .map(|tenant| tenant.id.get())
            .max()
            .unwrap_or(0);
        TenantId::new(max + 1)
    }
}

impl tenants_tui::AppRuntime for MemoryRuntime {
    fn load_tenants(&mut self) -> Result<Vec<Tenant>> {
        Ok(self.tenants.clone())
    }

    fn add_tenant(&mut self, tenant: &NewTenant) -> Result<()> {
        let id = self.next_id();
        self.tenants.push(Tenant {
            id,
            name: tenant.name.clone(),
            payment_status: tenant.payment_status,
            lease_end_date: tenant.lease_end_date,
        });
        Ok(())
    }

    fn delete_tenant(&mut self, id: TenantId) -> Result<()> {
        let before = self.tenants.len();
        self.tenants.retain(|tenant| tenant.id != id);
        if self.tenants.len() == before {
            bail!("tenant {id} not found");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryRuntime, ServiceRuntime};
    use anyhow::{Result, anyhow};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use tenants_app::{NewTenant, PaymentStatus, TenantId};
    use tenants_testkit::{TenantFaker, fixture_today};
    use tenants_tui::{AppRuntime, InternalEvent, TenantEvent};
    use tiny_http::{Header, Method, Response, Server};

    #[test]
    fn memory_runtime_assigns_next_id_on_add() -> Result<()> {
        let mut runtime = MemoryRuntime::seeded(7, 3);
        let new_tenant = TenantFaker::new(8).new_tenant(fixture_today());
        runtime.add_tenant(&new_tenant)?;

        let tenants = runtime.load_tenants()?;
        assert_eq!(tenants.len(), 4);
        assert_eq!(tenants[3].id, TenantId::new(4));
        assert_eq!(tenants[3].name, new_tenant.name);
        Ok(())
    }

    #[test]
    fn memory_runtime_delete_removes_exactly_one_row() -> Result<()> {
        let mut runtime = MemoryRuntime::seeded(7, 3);
        runtime.delete_tenant(TenantId::new(2))?;

        let ids = runtime
            .load_tenants()?
            .into_iter()
            .map(|tenant| tenant.id.get())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3]);

        let error = runtime
            .delete_tenant(TenantId::new(2))
            .expect_err("second delete should fail");
        assert!(error.to_string().contains("tenant 2 not found"));
        Ok(())
    }

    #[test]
    fn empty_memory_runtime_starts_ids_at_one() -> Result<()> {
        let mut runtime = MemoryRuntime::default();
        runtime.add_tenant(&NewTenant {
            name: "Ada Park".to_owned(),
            payment_status: PaymentStatus::Current,
            lease_end_date: fixture_today(),
        })?;
        assert_eq!(runtime.load_tenants()?[0].id, TenantId::new(1));
        Ok(())
    }

    #[test]
    fn service_runtime_forwards_to_client() -> Result<()> {
        let server =
            Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
        let addr = format!("http://{}/api", server.server_addr());

        let handle = thread::spawn(move || {
            let request = server.recv().expect("request expected");
            assert_eq!(*request.method(), Method::Get);
            assert_eq!(request.url(), "/api/tenants");
            let response = Response::from_string(
                r#"[{"id":5,"name":"Kai Reed","paymentStatus":"LATE","leaseEndDate":"2025-12-01"}]"#,
            )
            .with_status_code(200)
            .with_header(
                Header::from_bytes("Content-Type", "application/json")
                    .expect("valid content type header"),
            );
            request.respond(response).expect("response should succeed");

            let request = server.recv().expect("request expected");
            assert_eq!(*request.method(), Method::Delete);
            assert_eq!(request.url(), "/api/tenants/5");
            request
                .respond(Response::empty(204))
                .expect("response should succeed");
        });

        let client = tenants_client::Client::new(&addr, Duration::from_secs(1))?;
        let mut runtime = ServiceRuntime::new(client);
        let tenants = runtime.load_tenants()?;
        assert_eq!(tenants.len(), 1);
        assert_eq!(tenants[0].payment_status, PaymentStatus::Late);
        runtime.delete_tenant(tenants[0].id)?;

        handle.join().expect("server thread should join");
        Ok(())
    }

    #[test]
    fn service_runtime_spawn_returns_before_the_service_answers() -> Result<()> {
        let server =
            Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
        let addr = format!("http://{}/api", server.server_addr());
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let request = server.recv().expect("request expected");
            assert_eq!(request.url(), "/api/tenants");
            release_rx
                .recv_timeout(Duration::from_secs(5))
                .expect("test should release the response");
            let response = Response::from_string("[]").with_status_code(200).with_header(
                Header::from_bytes("Content-Type", "application/json")
                    .expect("valid content type header"),
            );
            request.respond(response).expect("response should succeed");
        });

        let client = tenants_client::Client::new(&addr, Duration::from_secs(5))?;
        let mut runtime = ServiceRuntime::new(client);
        let (tx, rx) = mpsc::channel();
        runtime.spawn_load(7, tx)?;
        assert!(
            rx.recv_timeout(Duration::from_millis(100)).is_err(),
            "load result arrived before the service answered"
        );

        release_tx.send(()).expect("server thread should be waiting");
        let event = rx.recv_timeout(Duration::from_secs(5))?;
        assert_eq!(
            event,
            InternalEvent::Tenants(TenantEvent::Loaded {
                request_id: 7,
                tenants: Vec::new(),
            })
        );

        handle.join().expect("server thread should join");
        Ok(())
    }

    #[test]
    fn service_runtime_reports_unreachable_service_as_event() -> Result<()> {
        let client =
            tenants_client::Client::new("http://127.0.0.1:1/api", Duration::from_millis(50))?;
        let mut runtime = ServiceRuntime::new(client);
        let (tx, rx) = mpsc::channel();

        runtime.spawn_delete(TenantId::new(3), tx)?;

        match rx.recv_timeout(Duration::from_secs(5))? {
            InternalEvent::Tenants(TenantEvent::DeleteFailed { id, error }) => {
                assert_eq!(id, TenantId::new(3));
                assert!(error.contains("cannot reach tenant service"), "got {error}");
            }
            other => panic!("unexpected event {other:?}"),
        }
        Ok(())
    }
}
