mod common;

use common::fixtures::scenario_payload;
use common::{TestResult, init_logger, scripted_view};
use docket::channel::{FilesystemPayloadStore, PayloadChannel};
use docket::print::{Behaviour, DEFAULT_PRINT_TIMEOUT};
use docket::{PrintViewBuilder, ScriptedHost, SettledBy, Token, ViewOutcome};
use std::sync::Arc;

#[tokio::test(start_paused = true)]
async fn published_token_prints_once() -> TestResult {
    let (view, host) = scripted_view(Behaviour::Complete);
    let token = view.channel().publish(&scenario_payload())?;

    let first = view.open(&token).await?;
    assert!(matches!(
        first,
        ViewOutcome::Printed(ref report) if report.settled_by == SettledBy::Completed
    ));
    assert_eq!(view.open(&token).await?, ViewOutcome::NothingToPrint);
    assert_eq!(view.open(&token).await?, ViewOutcome::NothingToPrint);

    assert_eq!(host.surfaces_created(), 1);
    assert_eq!(host.live_surfaces(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn unknown_token_is_nothing_to_print() -> TestResult {
    let (view, host) = scripted_view(Behaviour::Complete);
    let token = Token::parse("PRINT_PAYLOAD_1700000000000")?;
    assert_eq!(view.open(&token).await?, ViewOutcome::NothingToPrint);
    assert_eq!(host.surfaces_created(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn stalled_print_is_torn_down_and_the_next_one_succeeds() -> TestResult {
    init_logger();
    let host = ScriptedHost::new(Behaviour::Complete).script([Behaviour::Never]);
    let view = PrintViewBuilder::new().build(host.clone())?;

    let started = tokio::time::Instant::now();
    let stalled = view.print_payload(&scenario_payload()).await?;
    assert_eq!(stalled.settled_by, SettledBy::TimedOut);
    assert!(started.elapsed() >= DEFAULT_PRINT_TIMEOUT);
    assert_eq!(host.live_surfaces(), 0);

    let next = view.print_payload(&scenario_payload()).await?;
    assert_eq!(next.settled_by, SettledBy::Completed);
    assert_eq!(host.live_surfaces(), 0);
    assert_eq!(host.torn_down(), vec![stalled.session_id, next.session_id]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failed_dialog_surfaces_an_error_without_leaking() -> TestResult {
    let (view, host) = scripted_view(Behaviour::FailToOpen);
    let result = view.print_payload(&scenario_payload()).await;
    assert!(matches!(result, Err(docket::DocketError::Print(_))));
    assert_eq!(host.live_surfaces(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn printed_surface_is_the_composed_document() -> TestResult {
    let (view, host) = scripted_view(Behaviour::Complete);
    view.print_payload(&scenario_payload()).await?;

    let printed = host.last_document().expect("a surface was loaded");
    assert_eq!(printed, view.preview(&scenario_payload()).html);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn views_sharing_a_store_hand_over_payloads() -> TestResult {
    init_logger();
    let dir = tempfile::tempdir()?;
    let channel = || PayloadChannel::new(Arc::new(FilesystemPayloadStore::new(dir.path())));

    let publisher = PrintViewBuilder::new()
        .with_channel(channel())
        .build(ScriptedHost::default())?;
    let host = ScriptedHost::default();
    let printer = PrintViewBuilder::new()
        .with_channel(channel())
        .build(host.clone())?;

    let token = publisher.channel().publish(&scenario_payload())?;
    assert!(matches!(printer.open(&token).await?, ViewOutcome::Printed(_)));
    assert_eq!(publisher.open(&token).await?, ViewOutcome::NothingToPrint);
    assert_eq!(host.surfaces_created(), 1);
    Ok(())
}
