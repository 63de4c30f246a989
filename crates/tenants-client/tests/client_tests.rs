// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use std::io::Read;
use std::thread;
use std::time::Duration;
use tenants_app::{NewTenant, PaymentStatus, TenantId};
use tiny_http::{Header, Method, Response, Server};
use time::{Date, Month};

fn json_header() -> Header {
    Header::from_bytes("Content-Type", "application/json").expect("valid content type header")
}

fn mock_server() -> Result<(Server, String)> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}/api", server.server_addr());
    Ok((server, addr))
}

#[test]
fn unreachable_service_error_names_the_config_key() {
    let client = tenants_client::Client::new("http://127.0.0.1:1/api", Duration::from_millis(50))
        .expect("client should initialize");

    let error = client
        .list_tenants()
        .expect_err("listing should fail for unreachable endpoint");
    let message = error.to_string();
    assert!(message.contains("cannot reach tenant service"));
    assert!(message.contains("[service]"));
}

#[test]
fn list_tenants_decodes_rows_in_service_order() -> Result<()> {
    let (server, addr) = mock_server()?;

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(*request.method(), Method::Get);
        assert_eq!(request.url(), "/api/tenants");
        let body = r#"[
            {"id":2,"name":"Mara Voss","paymentStatus":"LATE","leaseEndDate":"2026-04-30"},
            {"id":1,"name":"Otto Lind","paymentStatus":"CURRENT","leaseEndDate":"2026-09-01T00:00:00.000Z"}
        ]"#;
        let response = Response::from_string(body)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = tenants_client::Client::new(&addr, Duration::from_secs(1))?;
    let tenants = client.list_tenants()?;
    assert_eq!(tenants.len(), 2);
    assert_eq!(tenants[0].id, TenantId::new(2));
    assert_eq!(tenants[0].payment_status, PaymentStatus::Late);
    assert_eq!(
        tenants[1].lease_end_date,
        Date::from_calendar_date(2026, Month::September, 1)?
    );

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn add_tenant_posts_camel_case_payload() -> Result<()> {
    let (server, addr) = mock_server()?;

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        assert_eq!(*request.method(), Method::Post);
        assert_eq!(request.url(), "/api/tenants");

        let mut body = String::new();
        request
            .as_reader()
            .read_to_string(&mut body)
            .expect("request body should be readable");
        let payload: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(payload["name"], "Ada Park");
        assert_eq!(payload["paymentStatus"], "CURRENT");
        assert_eq!(payload["leaseEndDate"], "2026-01-09");
        assert!(payload.get("id").is_none());

        let response = Response::from_string(r#"{"id":11}"#)
            .with_status_code(201)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = tenants_client::Client::new(&addr, Duration::from_secs(1))?;
    client.add_tenant(&NewTenant {
        name: "Ada Park".to_owned(),
        payment_status: PaymentStatus::Current,
        lease_end_date: Date::from_calendar_date(2026, Month::January, 9)?,
    })?;

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn delete_tenant_targets_the_id_path() -> Result<()> {
    let (server, addr) = mock_server()?;

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(*request.method(), Method::Delete);
        assert_eq!(request.url(), "/api/tenants/7");
        request
            .respond(Response::empty(204))
            .expect("response should succeed");
    });

    let client = tenants_client::Client::new(&addr, Duration::from_secs(1))?;
    client.delete_tenant(TenantId::new(7))?;

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn non_success_status_surfaces_service_message() -> Result<()> {
    let (server, addr) = mock_server()?;

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string(r#"{"error":"tenant 9 not found"}"#)
            .with_status_code(404)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = tenants_client::Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .delete_tenant(TenantId::new(9))
        .expect_err("404 should be an error");
    assert_eq!(error.to_string(), "server error (404): tenant 9 not found");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn ping_counts_listed_rows() -> Result<()> {
    let (server, addr) = mock_server()?;

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/api/tenants");
        let response = Response::from_string("[]")
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = tenants_client::Client::new(&addr, Duration::from_secs(1))?;
    assert_eq!(client.ping()?, 0);

    handle.join().expect("server thread should join");
    Ok(())
}
