use vhub_builder::{BuildError, Sessions};
use vhub_domain::catalog::{FrameCompatibility, FrameDefinition, PartCategory, PartDefinition};
use vhub_domain::config::ApiConfig;
use std::sync::Arc;

fn sessions() -> Sessions {
    let slice = vhub_builder::init(&ApiConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Sessions>());
    slice
        .state
        .as_any()
        .downcast_ref::<Sessions>()
        .expect("slice state should downcast")
        .clone()
}

fn frame() -> Arc<FrameDefinition> {
    Arc::new(FrameDefinition {
        id: "enduro-carbon".to_owned(),
        name: "Enduro Carbon Pro".to_owned(),
        category: "Enduro".to_owned(),
        base_price: 2299,
        description: String::new(),
        colors: vec!["matte-black".to_owned(), "electric-blue".to_owned()],
        compatibility: FrameCompatibility {
            fork_type: "160mm-travel".to_owned(),
            wheel_size: "29-inch".to_owned(),
            brake_type: "disc".to_owned(),
        },
    })
}

#[test]
fn create_then_get_round_trips() {
    let sessions = sessions();
    let id = sessions.create();
    assert_eq!(id.len(), 12);

    let session = sessions.get(&id).expect("fresh session should resolve");
    assert!(session.read().is_empty());
}

#[test]
fn sessions_do_not_cross_contaminate() {
    let sessions = sessions();
    let first = sessions.create();
    let second = sessions.create();
    assert_ne!(first, second);

    sessions.get(&first).expect("first session").write().set_frame(frame());

    let untouched = sessions.get(&second).expect("second session");
    assert!(untouched.read().is_empty(), "mutating one session must not leak into another");
}

#[test]
fn mutations_persist_across_lookups() {
    let sessions = sessions();
    let id = sessions.create();

    {
        let session = sessions.get(&id).expect("session");
        let mut build = session.write();
        build.set_frame(frame());
        build
            .set_part(
                PartCategory::Brakes,
                Some(Arc::new(PartDefinition {
                    id: "shimano-xt-brakes".to_owned(),
                    name: "Shimano XT M8100".to_owned(),
                    category: PartCategory::Brakes,
                    price: 299,
                    compatibility: vec!["disc".to_owned()],
                    marketplace_links: Vec::new(),
                })),
            )
            .expect("brakes fit the brakes slot");
    }

    let session = sessions.get(&id).expect("session still there");
    assert_eq!(session.read().total_price(), 2299 + 299);
}

#[test]
fn unknown_session_is_a_typed_error() {
    let sessions = sessions();
    let err = sessions.get("Mqz7RkPw2nXa").unwrap_err();
    assert!(matches!(err, BuildError::SessionNotFound { .. }));
}

#[test]
fn remove_ends_the_session() {
    let sessions = sessions();
    let id = sessions.create();

    sessions.remove(&id).expect("first removal succeeds");
    assert!(matches!(sessions.get(&id), Err(BuildError::SessionNotFound { .. })));
    assert!(matches!(sessions.remove(&id), Err(BuildError::SessionNotFound { .. })));
}

#[test]
fn len_tracks_live_sessions() {
    let sessions = sessions();
    assert_eq!(sessions.len(), 0);

    let a = sessions.create();
    let _b = sessions.create();
    assert_eq!(sessions.len(), 2);

    sessions.remove(&a).expect("removal succeeds");
    assert_eq!(sessions.len(), 1);
}
