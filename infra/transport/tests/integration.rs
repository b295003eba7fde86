use modlink_domain::ids::{ModuleId, ObjectId, PeerId};
use modlink_transport::{LoopbackTransport, Reliability, Transport};
use serde_json::json;

const MODULE: ModuleId = ModuleId(0xC0DE);

#[test]
fn registration_ledger_tracks_live_identities() {
    let transport = LoopbackTransport::new();

    transport.register_object(MODULE, Some(ObjectId(7)));
    transport.register_object(MODULE, None);

    assert!(transport.is_registered(MODULE, Some(ObjectId(7))));
    assert!(transport.is_registered(MODULE, None));
    assert!(!transport.is_registered(MODULE, Some(ObjectId(8))));

    transport.deregister_object(MODULE, Some(ObjectId(7)));
    assert!(!transport.is_registered(MODULE, Some(ObjectId(7))));

    // The call ledger keeps history even after deregistration.
    assert_eq!(transport.register_calls().len(), 2);
}

#[tokio::test]
async fn broadcast_invocation_reaches_subscribers() {
    let transport = LoopbackTransport::new();
    let mut rx = transport.subscribe();

    transport.invoke(MODULE, "SyncState", Reliability::Reliable, Some(ObjectId(7)), vec![json!(42), json!("lantern")]);

    let delivery = rx.recv().await.unwrap();
    assert_eq!(delivery.module, MODULE);
    assert_eq!(delivery.method, "SyncState");
    assert_eq!(delivery.reliability, Reliability::Reliable);
    assert_eq!(delivery.object, Some(ObjectId(7)));
    assert_eq!(delivery.target, None);
    assert_eq!(delivery.args, vec![json!(42), json!("lantern")]);
}

#[tokio::test]
async fn targeted_invocation_carries_the_peer() {
    let transport = LoopbackTransport::new();
    let mut rx = transport.subscribe();
    let peer = PeerId(76_561_198_000_000_000);

    transport.invoke_targeted(MODULE, "Whisper", peer, Reliability::Unreliable, None, vec![]);

    let delivery = rx.recv().await.unwrap();
    assert_eq!(delivery.target, Some(peer));
    assert_eq!(delivery.object, None);
}

#[tokio::test]
async fn every_subscriber_sees_every_delivery() {
    let transport = LoopbackTransport::new();
    let mut rx1 = transport.subscribe();
    let mut rx2 = transport.subscribe();

    transport.invoke(MODULE, "Ping", Reliability::UnreliableNoDelay, None, vec![]);

    assert_eq!(rx1.recv().await.unwrap().method, "Ping");
    assert_eq!(rx2.recv().await.unwrap().method, "Ping");
}

#[test]
fn invocation_without_subscribers_is_dropped_quietly() {
    let transport = LoopbackTransport::new();
    // No panic, no error: fire-and-forget.
    transport.invoke(MODULE, "Ping", Reliability::Reliable, None, vec![]);
}
