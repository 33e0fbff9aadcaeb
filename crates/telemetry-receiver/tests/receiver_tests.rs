//! End-to-end tests for the UDP receive loop over loopback.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use horizon_telemetry_forza::{TelemetryFrame, encode, offsets};
use horizon_telemetry_receiver::{
    ReceiverConfig, ReceiverError, ReceiverHandle, TelemetryReceiver,
};
use horizon_vehicle_db::VehicleDb;
use tokio::net::UdpSocket;
use tokio::time::timeout;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const WAIT: Duration = Duration::from_secs(2);

async fn start_loopback() -> Result<ReceiverHandle, ReceiverError> {
    TelemetryReceiver::new(ReceiverConfig::loopback(0))
        .start()
        .await
}

async fn connect_sender(handle: &ReceiverHandle) -> Result<UdpSocket, std::io::Error> {
    let socket = UdpSocket::bind("127.0.0.1:0").await?;
    socket.connect(handle.local_addr()).await?;
    Ok(socket)
}

fn frame_with(car_ordinal: i32, speed: f32) -> TelemetryFrame {
    TelemetryFrame {
        is_race_on: true,
        car_ordinal,
        speed,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_end_to_end_single_frame() -> TestResult {
    let handle = start_loopback().await?;
    let sender = connect_sender(&handle).await?;
    let mut latest = handle.latest();

    sender.send(&encode(&frame_with(42, 30.5))).await?;

    let frame = timeout(WAIT, latest.wait_for(|f| f.car_ordinal == 42))
        .await?
        .ok_or("receiver stopped before publishing")?;
    assert_eq!(frame.car_ordinal, 42);
    assert!((frame.speed - 30.5).abs() < f32::EPSILON);
    assert!(frame.is_race_on);

    let vehicles = VehicleDb::in_memory();
    let vehicle = vehicles.get_vehicle(frame.car_ordinal);
    assert!(vehicle.is_unknown());
    assert_eq!(vehicle.make, "Unknown");
    assert_eq!(vehicle.model, "Vehicle");

    handle.stop().await?;
    Ok(())
}

#[tokio::test]
async fn test_garbage_then_valid_publishes_only_valid() -> TestResult {
    let handle = start_loopback().await?;
    let sender = connect_sender(&handle).await?;
    let mut latest = handle.latest();

    sender.send(&[0xAB; 200]).await?;
    sender.send(&encode(&frame_with(7, 12.0))).await?;

    let frame = timeout(WAIT, latest.wait_for(|f| f.car_ordinal == 7))
        .await?
        .ok_or("receiver stopped before publishing")?;
    assert_eq!(frame.car_ordinal, 7);

    let stats = handle.stats().snapshot();
    assert_eq!(stats.datagrams_received, 2);
    assert_eq!(stats.bad_length, 1);
    assert_eq!(stats.frames_published, 1);

    handle.stop().await?;
    Ok(())
}

#[tokio::test]
async fn test_invalid_enum_is_dropped() -> TestResult {
    let handle = start_loopback().await?;
    let sender = connect_sender(&handle).await?;
    let mut latest = handle.latest();

    let mut bad = encode(&frame_with(1, 1.0));
    bad[offsets::CAR_CLASS..offsets::CAR_CLASS + 4].copy_from_slice(&8i32.to_le_bytes());
    sender.send(&bad).await?;
    sender.send(&encode(&frame_with(2, 2.0))).await?;

    let frame = timeout(WAIT, latest.wait_for(|f| f.car_ordinal == 2))
        .await?
        .ok_or("receiver stopped before publishing")?;
    assert_eq!(frame.car_ordinal, 2);
    assert_eq!(handle.stats().snapshot().invalid_enum, 1);

    handle.stop().await?;
    Ok(())
}

#[tokio::test]
async fn test_oversized_datagram_is_rejected() -> TestResult {
    let handle = start_loopback().await?;
    let sender = connect_sender(&handle).await?;
    let mut latest = handle.latest();

    let mut oversized = encode(&frame_with(3, 3.0));
    oversized.extend_from_slice(&[0u8; 13]);
    sender.send(&oversized).await?;
    sender.send(&encode(&frame_with(4, 4.0))).await?;

    timeout(WAIT, latest.wait_for(|f| f.car_ordinal == 4))
        .await?
        .ok_or("receiver stopped before publishing")?;
    let stats = handle.stats().snapshot();
    assert_eq!(stats.bad_length, 1);
    assert_eq!(stats.frames_published, 1);

    handle.stop().await?;
    Ok(())
}

#[tokio::test]
async fn test_latest_frame_overwrites() -> TestResult {
    let handle = start_loopback().await?;
    let sender = connect_sender(&handle).await?;
    let mut latest = handle.latest();

    for ordinal in 1..=50 {
        sender.send(&encode(&frame_with(ordinal, 0.0))).await?;
    }

    timeout(WAIT, latest.wait_for(|f| f.car_ordinal == 50))
        .await?
        .ok_or("receiver stopped before publishing")?;
    assert_eq!(latest.get().map(|f| f.car_ordinal), Some(50));

    handle.stop().await?;
    Ok(())
}

#[tokio::test]
async fn test_sink_sees_every_published_frame() -> TestResult {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_sink = Arc::clone(&calls);

    let handle = TelemetryReceiver::new(ReceiverConfig::loopback(0))
        .with_sink(Arc::new(move |_: &TelemetryFrame| {
            calls_in_sink.fetch_add(1, Ordering::Relaxed);
        }))
        .start()
        .await?;
    let sender = connect_sender(&handle).await?;
    let mut latest = handle.latest();

    sender.send(&encode(&frame_with(1, 0.0))).await?;
    sender.send(&[0u8; 5]).await?;
    sender.send(&encode(&frame_with(2, 0.0))).await?;
    sender.send(&encode(&frame_with(3, 0.0))).await?;

    timeout(WAIT, latest.wait_for(|f| f.car_ordinal == 3))
        .await?
        .ok_or("receiver stopped before publishing")?;
    handle.stop().await?;

    assert_eq!(calls.load(Ordering::Relaxed), 3);
    Ok(())
}

#[tokio::test]
async fn test_stop_releases_port() -> TestResult {
    let handle = start_loopback().await?;
    let addr = handle.local_addr();
    handle.stop().await?;

    let rebound = UdpSocket::bind(addr).await?;
    assert_eq!(rebound.local_addr()?, addr);
    drop(rebound);

    let restarted = TelemetryReceiver::new(ReceiverConfig::loopback(addr.port()))
        .start()
        .await?;
    assert_eq!(restarted.local_addr(), addr);
    restarted.stop().await?;
    Ok(())
}

#[tokio::test]
async fn test_no_frame_after_stop() -> TestResult {
    let handle = start_loopback().await?;
    let sender = connect_sender(&handle).await?;
    let latest = handle.latest();
    let stats = handle.stats();
    handle.stop().await?;

    // Nobody is listening any more; on some platforms the send itself fails.
    if sender.send(&encode(&frame_with(99, 0.0))).await.is_ok() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    assert!(latest.get().is_none());
    assert_eq!(stats.snapshot().frames_published, 0);
    Ok(())
}

#[tokio::test]
async fn test_bind_conflict_is_reported() -> TestResult {
    let occupied = UdpSocket::bind("127.0.0.1:0").await?;
    let port = occupied.local_addr()?.port();

    let result = TelemetryReceiver::new(ReceiverConfig::loopback(port))
        .start()
        .await;

    match result {
        Err(ReceiverError::Bind { addr, .. }) => assert_eq!(addr.port(), port),
        Err(other) => return Err(format!("unexpected error: {other}").into()),
        Ok(handle) => {
            handle.stop().await?;
            return Err("second bind on an occupied port succeeded".into());
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_bind_error_message_names_address() -> TestResult {
    let occupied = UdpSocket::bind("127.0.0.1:0").await?;
    let addr = occupied.local_addr()?;

    let err = TelemetryReceiver::new(ReceiverConfig::loopback(addr.port()))
        .start()
        .await
        .err()
        .ok_or("expected bind failure")?;
    assert!(
        err.to_string()
            .starts_with(&format!("Failed to bind UDP socket on {addr}")),
        "unexpected message: {err}"
    );
    Ok(())
}
