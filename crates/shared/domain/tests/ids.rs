use modlink_domain::features::FeatureInfo;
use modlink_domain::ids::{ModuleId, ObjectId, PeerId};
use serde_json::json;

#[test]
fn object_id_nil_sentinel() {
    assert!(ObjectId::NIL.is_nil());
    assert!(ObjectId::default().is_nil());
    assert!(!ObjectId(42).is_nil());
}

#[test]
fn ids_serialize_transparently() {
    assert_eq!(serde_json::to_value(ModuleId(7)).unwrap(), json!(7));
    assert_eq!(serde_json::to_value(ObjectId(-3)).unwrap(), json!(-3));
    assert_eq!(serde_json::to_value(PeerId(76_561_198_000_000_000)).unwrap(), json!(76_561_198_000_000_000_u64));

    let peer: PeerId = serde_json::from_value(json!(76_561_198_000_000_000_u64)).unwrap();
    assert_eq!(peer, PeerId(76_561_198_000_000_000));
}

#[test]
fn module_id_displays_as_hex() {
    assert_eq!(ModuleId(0xFEED).to_string(), "0x0000feed");
}

#[test]
fn feature_info_round_trips() {
    let info = FeatureInfo {
        name: "voice-chat".to_owned(),
        description: "Proximity voice chat".to_owned(),
        required: false,
        enabled: true,
    };

    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["name"], "voice-chat");
    assert_eq!(serde_json::from_value::<FeatureInfo>(value).unwrap(), info);
}
