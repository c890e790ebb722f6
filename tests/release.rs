use std::sync::Arc;

use subsystem_assets::Assets;
use subsystem_assets::registrar::{Registrar, RegistrarError};
use subsystem_assets::release::{Release, VersionStore};
use subsystem_assets::store::{KeyValueStore, MemoryStore};
use subsystem_assets::version::Version;

struct App;

fn launch(store: &Arc<MemoryStore>, short_version: &str, build: &str) -> Release {
    let assets = Assets::for_type::<App>(store.clone(), "acme");
    let versions = assets.version_store();

    let current = Release::current_from_bundle(Some(short_version), Some(build));
    let release = Release::detect(current, &versions).unwrap();
    release.save(&versions).unwrap();
    release
}

#[test]
fn first_launch_is_a_clean_install() {
    let store = Arc::new(MemoryStore::new());
    let release = launch(&store, "1.0", "10");

    assert!(release.clean);
    assert!(!release.updated);
    assert_eq!(release.previous, Version::new(0, 0, 0));
    assert_eq!(
        store.get("acme-App-version").unwrap(),
        Some("1.0.0+10".to_string())
    );
}

#[test]
fn relaunch_of_same_build_is_not_an_update() {
    let store = Arc::new(MemoryStore::new());
    launch(&store, "1.0", "10");
    let release = launch(&store, "1.0", "10");

    assert!(!release.clean);
    assert!(!release.updated);
    assert_eq!(release.previous, release.current);
}

#[test]
fn newer_build_is_an_update() {
    let store = Arc::new(MemoryStore::new());
    launch(&store, "1.0", "10");
    let release = launch(&store, "1.1", "11");

    assert!(!release.clean);
    assert!(release.updated);
    assert_eq!(release.previous, Version::parse("1.0.0+10").unwrap());

    let assets = Assets::for_type::<App>(store.clone(), "acme");
    assert_eq!(
        assets.version_store().load().unwrap(),
        Some(Version::parse("1.1.0+11").unwrap())
    );
}

#[test]
fn corrupt_record_is_treated_as_zero() {
    let store = Arc::new(MemoryStore::new());
    store.set("acme-App-version", "not a version").unwrap();

    let release = launch(&store, "0.1", "1");

    assert!(!release.clean);
    assert!(release.updated);
    assert_eq!(release.previous, Version::new(0, 0, 0));
}

#[test]
fn subsystems_share_one_store_without_collisions() {
    let store = Arc::new(MemoryStore::new());
    let registrar = Registrar::new();

    let app = Assets::new("App", None, store.clone(), "");
    let sync = Assets::new("Sync", Some("Network".to_string()), store.clone(), "");
    app.register(&registrar).unwrap();
    sync.register(&registrar).unwrap();

    app.defaults().set_display("launches", &3).unwrap();
    sync.defaults().set_display("launches", &7).unwrap();

    assert_eq!(app.defaults().get_i64("launches").unwrap(), Some(3));
    assert_eq!(sync.defaults().get_i64("launches").unwrap(), Some(7));
    assert_eq!(
        store.keys().unwrap(),
        vec!["App-launches".to_string(), "Sync-launches".to_string()]
    );

    let again = Assets::new("Sync", None, store, "");
    assert_eq!(
        again.register(&registrar),
        Err(RegistrarError::AlreadyRegistered("Sync".to_string()))
    );

    registrar.reset().unwrap();
    again.register(&registrar).unwrap();
}
