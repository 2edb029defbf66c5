mod common;

use common::RecordingOpener;
use std::sync::Arc;
use std::time::Duration;
use ventured::links::{Mailto, NavigationTarget};
use ventured::navigate::{self, NavigateError, Opener, SystemOpener};
use ventured::shutdown::ShutdownCoordinator;

#[tokio::test]
async fn opens_queued_targets_until_channel_closes() {
    let coordinator = ShutdownCoordinator::new();
    let opener = Arc::new(RecordingOpener::default());
    let (tx, rx) = navigate::channel();

    tx.send(NavigationTarget::Url("https://apply.venturedglobal.org".into()))
        .await
        .expect("send");
    tx.send(NavigationTarget::Mail(Mailto::new("contact@venturedglobal.org")))
        .await
        .expect("send");
    drop(tx);

    tokio::time::timeout(
        Duration::from_secs(1),
        navigate::run(Arc::clone(&opener), rx, coordinator.handle()),
    )
    .await
    .expect("navigator should stop when the channel closes");

    let mut opened = opener.opened();
    opened.sort();
    assert_eq!(
        opened,
        vec![
            "https://apply.venturedglobal.org".to_string(),
            "mailto:contact@venturedglobal.org".to_string(),
        ]
    );
}

#[tokio::test]
async fn failed_open_does_not_stop_navigator() {
    let coordinator = ShutdownCoordinator::new();
    let opener = Arc::new(RecordingOpener::failing());
    let (tx, rx) = navigate::channel();
    let task = tokio::spawn(navigate::run(Arc::clone(&opener), rx, coordinator.handle()));

    tx.send(NavigationTarget::Url("https://a.example".into()))
        .await
        .expect("send");
    tx.send(NavigationTarget::Url("https://b.example".into()))
        .await
        .expect("send");
    drop(tx);

    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("navigator should finish")
        .expect("navigator should not panic");
    assert_eq!(opener.opened().len(), 2);
}

#[tokio::test]
async fn shutdown_stops_idle_navigator() {
    let coordinator = ShutdownCoordinator::new();
    let opener = Arc::new(RecordingOpener::default());
    let (_tx, rx) = navigate::channel();
    let task = tokio::spawn(navigate::run(opener, rx, coordinator.handle()));

    coordinator.signal();
    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("navigator should stop on shutdown")
        .expect("navigator should not panic");
}

#[cfg(unix)]
#[tokio::test]
async fn system_opener_reports_exit_status() {
    let target = NavigationTarget::Url("https://apply.venturedglobal.org".into());

    let ok = SystemOpener::with_program("true");
    assert!(ok.open(target.clone()).await.is_ok());

    let refusing = SystemOpener::with_program("false");
    assert!(matches!(
        refusing.open(target.clone()).await,
        Err(NavigateError::Status { .. })
    ));

    let missing = SystemOpener::with_program("ventured-no-such-opener");
    assert!(matches!(
        missing.open(target).await,
        Err(NavigateError::Spawn { .. })
    ));
}
