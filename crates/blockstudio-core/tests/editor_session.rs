//! End-to-end editing session: drop, arrange, edit, undo, save, reload.

use blockstudio_core::storage::block_on;
use blockstudio_core::{
    ComponentPatch, Editor, InteractionMode, MemoryProjectStore, Project, ProjectStore,
    ResizeHandle, Template,
};
use kurbo::{Point, Size};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const HERO: &str = r#"{"type":"hero","name":"Hero Section","icon":"Layout","category":"Sections"}"#;
const BUTTON: &str = r#"{"type":"button","name":"Button","icon":"Square","category":"Basic"}"#;

#[test]
fn full_editing_session() {
    init_logs();
    let mut editor = Editor::new(InteractionMode::Pointer);

    // Build a small layout
    let hero = editor.drop_payload(HERO, Point::new(43.0, 18.0)).unwrap();
    let button = editor.drop_payload(BUTTON, Point::new(97.0, 203.0)).unwrap();
    assert_eq!(editor.store().len(), 2);

    // Drop positions snapped to the 20px grid
    assert_eq!(editor.store().get(&hero).unwrap().position, Point::new(40.0, 20.0));

    // Nudge the button with a drag; the move is committed snapped
    assert!(editor.begin_drag(&button, Point::new(120.0, 220.0)));
    editor.drag_to(Point::new(150.0, 240.0));
    assert!(editor.end_drag(Point::new(152.0, 241.0)));
    let moved_to = editor.store().get(&button).unwrap().position;
    assert_eq!(moved_to.x % 20.0, 0.0);
    assert_eq!(moved_to.y % 20.0, 0.0);

    // Resize the hero via its bottom-right handle
    editor.press(&hero);
    assert!(editor.begin_resize(&hero, ResizeHandle::BottomRight, Point::new(240.0, 120.0)));
    assert!(editor.end_resize(Point::new(460.0, 321.0)));
    let resized = editor.store().get(&hero).unwrap().size;
    assert_eq!(resized, Size::new(420.0, 300.0));

    // Rename the button text through a property patch
    let mut props = serde_json::Map::new();
    props.insert("text".into(), serde_json::Value::String("Get Started".into()));
    assert!(editor.update_properties(
        &button,
        &ComponentPatch {
            properties: Some(props),
            ..ComponentPatch::default()
        },
    ));

    // Five discrete actions so far: 2 drops, move, resize, property edit
    assert_eq!(editor.history().cursor(), 5);

    // Wind all the way back to the empty canvas and forward again
    let final_state = editor.components().to_vec();
    let mut undone = 0;
    while editor.undo() {
        undone += 1;
    }
    assert_eq!(undone, 5);
    assert!(editor.store().is_empty());

    let mut redone = 0;
    while editor.redo() {
        redone += 1;
    }
    assert_eq!(redone, 5);
    assert_eq!(editor.components(), &final_state[..]);

    // Persist and reload through the storage collaborator
    editor.set_project_name("Demo Site");
    let store = MemoryProjectStore::new();
    let saved = Project::new(editor.project_name(), editor.components().to_vec());
    block_on(store.save(&saved)).unwrap();

    let loaded = block_on(store.load("Demo Site")).unwrap();
    let mut fresh = Editor::new(InteractionMode::Pointer);
    fresh.load_components(loaded.components);
    assert_eq!(fresh.components(), &final_state[..]);
    assert_eq!(fresh.history().cursor(), 0);
    assert!(!fresh.can_undo());
}

#[test]
fn template_load_resets_session() {
    init_logs();
    let mut editor = Editor::new(InteractionMode::Pointer);
    editor.drop_payload(HERO, Point::new(0.0, 0.0)).unwrap();
    editor.drop_payload(BUTTON, Point::new(300.0, 0.0)).unwrap();

    let gallery_pick = Template::new("Portfolio", editor.components().to_vec());

    let mut fresh = Editor::new(InteractionMode::Pointer);
    fresh.load_template(&gallery_pick);
    assert_eq!(fresh.store().len(), 2);
    assert_eq!(fresh.project_name(), "Portfolio");
    assert_eq!(fresh.history().len(), 1);

    // Blank template wipes the canvas but keeps the current project name
    fresh.load_template(&Template::blank());
    assert!(fresh.store().is_empty());
    assert_eq!(fresh.project_name(), "Portfolio");
    assert!(!fresh.can_undo());
}

#[test]
fn hostile_events_never_corrupt_state() {
    init_logs();
    let mut editor = Editor::new(InteractionMode::Pointer);
    let id = editor.drop_payload(BUTTON, Point::new(100.0, 100.0)).unwrap();
    let baseline = serde_json::to_string(editor.components()).unwrap();
    let cursor = editor.history().cursor();

    // Garbage payloads, NaN coordinates, ghost ids
    assert!(editor.drop_payload("][", Point::new(0.0, 0.0)).is_none());
    assert!(editor
        .drop_payload(BUTTON, Point::new(f64::INFINITY, 0.0))
        .is_none());
    assert!(!editor.begin_drag(&"ghost".to_string(), Point::new(0.0, 0.0)));
    assert!(!editor.begin_drag(&id, Point::new(f64::NAN, 0.0)));
    assert!(!editor.delete(&"ghost".to_string()));

    assert_eq!(serde_json::to_string(editor.components()).unwrap(), baseline);
    assert_eq!(editor.history().cursor(), cursor);
}
