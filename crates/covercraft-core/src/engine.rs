//! Engine facade.
//!
//! One explicit object owns the scene, history, interaction state, selection,
//! and camera, and exposes the intent surface the UI layer calls. There is no
//! process-wide state; collaborators receive the engine by reference.

use crate::camera::Camera;
use crate::decode::{DecodeError, DecodedImage, RequestToken};
use crate::history::HistoryManager;
use crate::interaction::{ImageRequest, InteractionController, PendingShape, PointerOutcome};
use crate::objects::{ObjectId, SceneObject, TextBox};
use crate::scene::{Background, DEFAULT_BACKGROUND, Scene, SceneSnapshot};
use crate::storage::KeyValueStore;
use crate::style::{self, StyleError, StyleOutcome, StyleProp, StyleValue};
use kurbo::Point;
use std::time::Instant;
use thiserror::Error;

/// Persisted-state key for the serialized scene snapshot.
pub const SCENE_KEY: &str = "covercraft.scene";
/// Persisted-state key for the current background color string.
pub const BACKGROUND_KEY: &str = "covercraft.background";

/// Default content for newly added text boxes.
pub const DEFAULT_TEXT: &str = "Double-click to edit";

/// Engine-level errors surfaced to the caller.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("image placement failed: {0}")]
    ImageDecode(#[from] DecodeError),
}

#[derive(Debug)]
struct PendingFont {
    token: u64,
    target: ObjectId,
    family: String,
}

/// The scene-editing engine.
pub struct Engine {
    scene: Scene,
    camera: Camera,
    history: HistoryManager,
    controller: InteractionController,
    selection: Vec<ObjectId>,
    /// Last explicitly chosen background color; survives while a background
    /// image is installed and seeds reset-scene.
    background_color: String,
    pending_font: Option<PendingFont>,
    font_token: u64,
    store: Option<Box<dyn KeyValueStore>>,
    needs_repaint: bool,
}

impl Engine {
    /// Create an engine with a fresh scene. The initial state becomes
    /// history snapshot #0.
    pub fn new(width: f64, height: f64) -> Self {
        let mut engine = Self {
            scene: Scene::new(width, height),
            camera: Camera::new(),
            history: HistoryManager::new(),
            controller: InteractionController::new(),
            selection: Vec::new(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            pending_font: None,
            font_token: 0,
            store: None,
            needs_repaint: true,
        };
        engine.commit();
        engine
    }

    /// Create an engine backed by a durable store, seeding scene and history
    /// from the persisted state if present.
    pub fn with_store(width: f64, height: f64, store: Box<dyn KeyValueStore>) -> Self {
        let mut engine = Self::new(width, height);
        engine.store = Some(store);
        engine.load_persisted();
        engine
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn selection(&self) -> &[ObjectId] {
        &self.selection
    }

    pub fn select(&mut self, id: ObjectId) {
        if self.scene.contains(id) {
            self.selection = vec![id];
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Take and reset the repaint request flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    // ----- pending tools -----------------------------------------------

    pub fn set_pending_shape(&mut self, shape: Option<PendingShape>) {
        self.controller.set_pending_shape(shape);
    }

    pub fn set_pending_image_url(&mut self, url: Option<String>) {
        self.controller.set_pending_image_url(url);
    }

    // ----- pointer events ----------------------------------------------

    /// Handle a pointer press. Returns an [`ImageRequest`] when a pending
    /// image placement now waits on a decode; the caller resolves it and
    /// reports back through [`Engine::complete_image_placement`].
    pub fn on_pointer_down(&mut self, point: Point) -> Option<ImageRequest> {
        match self.controller.on_pointer_down(&mut self.scene, point) {
            PointerOutcome::CommittedDeferred(id) => {
                self.selection = vec![id];
                self.history.record_debounced(Instant::now());
                self.needs_repaint = true;
                None
            }
            PointerOutcome::DragStarted(_) => {
                self.needs_repaint = true;
                None
            }
            PointerOutcome::ImageRequested(request) => Some(request),
            _ => None,
        }
    }

    pub fn on_pointer_move(&mut self, point: Point) {
        if self.controller.is_dragging() {
            self.controller.on_pointer_move(&mut self.scene, point);
            self.needs_repaint = true;
        }
    }

    /// Handle a pointer release, committing any drag in progress. Exactly one
    /// history snapshot results per finished drag.
    pub fn on_pointer_up(&mut self, point: Point) -> Option<ObjectId> {
        match self.controller.on_pointer_up(&mut self.scene, point) {
            PointerOutcome::Committed(id) => {
                self.selection = vec![id];
                self.commit();
                Some(id)
            }
            _ => None,
        }
    }

    /// Report the result of an image decode. Stale tokens are dropped (last
    /// request wins); a decode failure is surfaced instead of silently
    /// ending the placement.
    pub fn complete_image_placement(
        &mut self,
        token: RequestToken,
        result: Result<DecodedImage, DecodeError>,
    ) -> Result<Option<ObjectId>, EngineError> {
        match self
            .controller
            .complete_image_placement(&mut self.scene, token, result)
        {
            Ok(Some(id)) => {
                self.selection = vec![id];
                self.commit();
                Ok(Some(id))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(EngineError::ImageDecode(e)),
        }
    }

    // ----- style -------------------------------------------------------

    /// Apply a style property to the current selection.
    ///
    /// With nothing selected this is a silent no-op. A font-family change is
    /// deferred behind font readiness: the returned token must be fed back
    /// through [`Engine::complete_font_ready`] once the font waiter resolves
    /// (it resolves on load failure too; rendering falls back).
    pub fn update_style(
        &mut self,
        prop: StyleProp,
        value: StyleValue,
    ) -> Result<StyleOutcome, StyleError> {
        let Some(&id) = self.selection.first() else {
            return Ok(StyleOutcome::NoSelection);
        };
        let Some(object) = self.scene.get(id) else {
            return Ok(StyleOutcome::NoSelection);
        };

        if prop == StyleProp::FontFamily && object.supports(StyleProp::FontFamily) {
            let StyleValue::Text(family) = value else {
                return Err(StyleError::TypeMismatch { prop });
            };
            self.font_token += 1;
            self.pending_font = Some(PendingFont {
                token: self.font_token,
                target: id,
                family,
            });
            return Ok(StyleOutcome::AwaitingFont {
                token: self.font_token,
            });
        }

        let Some(object) = self.scene.get_mut(id) else {
            return Ok(StyleOutcome::NoSelection);
        };
        style::apply_style(object, prop, &value)?;
        self.commit();
        Ok(StyleOutcome::Applied)
    }

    /// Apply the deferred font-family change for `token`. Stale tokens
    /// (superseded by a newer font change) are dropped.
    pub fn complete_font_ready(&mut self, token: u64) -> StyleOutcome {
        let Some(pending) = self.pending_font.take_if(|p| p.token == token) else {
            log::warn!("engine: dropping stale font readiness (token {token})");
            return StyleOutcome::NoSelection;
        };
        let Some(object) = self.scene.get_mut(pending.target) else {
            return StyleOutcome::NoSelection;
        };
        if style::apply_style(
            object,
            StyleProp::FontFamily,
            &StyleValue::Text(pending.family),
        )
        .is_err()
        {
            return StyleOutcome::NoSelection;
        }
        self.commit();
        StyleOutcome::Applied
    }

    // ----- direct object intents ---------------------------------------

    /// Add a text box at the given point and select it.
    pub fn add_text(&mut self, position: Point) -> ObjectId {
        let text = TextBox::new(position, DEFAULT_TEXT.to_string());
        let id = self.scene.add(SceneObject::TextBox(text));
        self.selection = vec![id];
        self.commit();
        id
    }

    /// Delete every selected object (bulk), with a single snapshot.
    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let ids = std::mem::take(&mut self.selection);
        self.scene.remove_many(&ids);
        self.commit();
    }

    /// Nudge the selection by a delta (arrow keys). Lines move both
    /// endpoints; everything else moves its anchor.
    pub fn nudge_selected(&mut self, dx: f64, dy: f64) {
        if self.selection.is_empty() {
            return;
        }
        for &id in &self.selection {
            if let Some(object) = self.scene.get_mut(id) {
                object.translate(dx, dy);
            }
        }
        self.commit();
    }

    // ----- history -----------------------------------------------------

    pub fn undo(&mut self) -> bool {
        if self.history.undo(&mut self.scene) {
            self.after_restore();
            true
        } else {
            false
        }
    }

    pub fn redo(&mut self) -> bool {
        if self.history.redo(&mut self.scene) {
            self.after_restore();
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Settle any pending debounced snapshot whose delay has elapsed.
    /// Call once per event-loop turn.
    pub fn tick(&mut self, now: Instant) {
        if self.history.poll(&self.scene, now).is_some() {
            self.needs_repaint = true;
            self.persist();
        }
    }

    // ----- scene lifecycle ---------------------------------------------

    /// Recreate the scene wholesale: new dimensions, default background,
    /// empty history reseeded with snapshot #0.
    pub fn new_scene(&mut self, width: f64, height: f64) {
        self.scene = Scene::new(width, height);
        self.background_color = DEFAULT_BACKGROUND.to_string();
        self.abandon_transients();
        self.history.reset();
        self.commit();
    }

    /// Empty the scene in place: dimensions and background color are
    /// preserved, any background image is dropped, history resets.
    pub fn reset_scene(&mut self) {
        self.scene.clear();
        let color = self.background_color.clone();
        self.scene.set_background_color(&color);
        self.abandon_transients();
        self.history.reset();
        self.commit();
    }

    /// Resize the scene, preserving content.
    pub fn set_scene_size(&mut self, width: f64, height: f64) {
        self.scene.width = width;
        self.scene.height = height;
        self.commit();
    }

    pub fn set_background_color(&mut self, color: &str) {
        self.background_color = color.to_string();
        self.scene.set_background_color(color);
        self.commit();
    }

    pub fn set_background_image(&mut self, image: &DecodedImage) {
        self.scene.set_background_image(image);
        self.commit();
    }

    /// Drop any background image and return to the default color.
    pub fn clear_background(&mut self) {
        self.background_color = DEFAULT_BACKGROUND.to_string();
        self.scene.set_background_color(DEFAULT_BACKGROUND);
        self.commit();
    }

    // ----- internals ---------------------------------------------------

    fn abandon_transients(&mut self) {
        self.selection.clear();
        self.pending_font = None;
        self.controller.set_pending_shape(None);
        self.controller.set_pending_image_url(None);
    }

    /// Selection follows identity, not state: a restore invalidates it.
    fn after_restore(&mut self) {
        self.selection.clear();
        if let Background::Color(color) = &self.scene.background {
            self.background_color = color.clone();
        }
        self.needs_repaint = true;
    }

    /// Record one snapshot of the live scene and persist it.
    fn commit(&mut self) {
        let json = self
            .history
            .record(&self.scene)
            .to_json()
            .inspect_err(|e| log::error!("engine: snapshot serialization failed: {e}"))
            .ok();
        self.needs_repaint = true;
        self.persist_json(json);
    }

    fn persist(&self) {
        let json = self
            .scene
            .serialize()
            .to_json()
            .inspect_err(|e| log::error!("engine: snapshot serialization failed: {e}"))
            .ok();
        self.persist_json(json);
    }

    /// Persistence failures are logged, never fatal to editing.
    fn persist_json(&self, json: Option<String>) {
        let (Some(store), Some(json)) = (&self.store, json) else {
            return;
        };
        if let Err(e) = store.put(SCENE_KEY, &json) {
            log::error!("engine: failed to persist scene: {e}");
        }
        if let Err(e) = store.put(BACKGROUND_KEY, &self.background_color) {
            log::error!("engine: failed to persist background: {e}");
        }
    }

    /// Seed scene and history from the durable store. A malformed persisted
    /// value is fatal to the load only: the engine logs it and starts fresh.
    fn load_persisted(&mut self) {
        let Some(store) = &self.store else {
            return;
        };

        let saved_scene = store
            .get(SCENE_KEY)
            .inspect_err(|e| log::error!("engine: failed to read persisted scene: {e}"))
            .ok()
            .flatten();
        let saved_background = store
            .get(BACKGROUND_KEY)
            .inspect_err(|e| log::error!("engine: failed to read persisted background: {e}"))
            .ok()
            .flatten();

        if let Some(json) = saved_scene {
            match SceneSnapshot::from_json(&json) {
                Ok(snapshot) => {
                    self.scene.restore(&snapshot);
                    if let Some(color) = saved_background {
                        self.background_color = color.clone();
                        if matches!(self.scene.background, Background::Color(_)) {
                            self.scene.set_background_color(&color);
                        }
                    }
                }
                Err(e) => {
                    log::error!("engine: ignoring malformed persisted scene: {e}");
                }
            }
        }

        // Whatever we ended up with becomes snapshot #0.
        self.history.reset();
        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::SNAPSHOT_DEBOUNCE;
    use crate::objects::SerializableColor;
    use crate::storage::MemoryStore;

    fn drag_rect(engine: &mut Engine, from: Point, to: Point) -> ObjectId {
        engine.set_pending_shape(Some(PendingShape::Rect));
        engine.on_pointer_down(from);
        engine.on_pointer_move(Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0));
        engine.on_pointer_up(to).expect("drag should commit")
    }

    #[test]
    fn test_drag_undo_redo_scenario() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = Engine::new(1920.0, 1080.0);
        let id = drag_rect(
            &mut engine,
            Point::new(100.0, 100.0),
            Point::new(300.0, 250.0),
        );

        let SceneObject::Rect(rect) = engine.scene().get(id).unwrap() else {
            panic!("expected rect");
        };
        assert_eq!(rect.position, Point::new(100.0, 100.0));
        assert!((rect.width - 200.0).abs() < f64::EPSILON);
        assert!((rect.height - 150.0).abs() < f64::EPSILON);

        let committed = engine.scene().serialize();

        assert!(engine.undo());
        assert!(engine.scene().is_empty());

        assert!(engine.redo());
        assert_eq!(engine.scene().serialize(), committed);
    }

    #[test]
    fn test_style_update_snapshots_once() {
        let mut engine = Engine::new(800.0, 600.0);
        drag_rect(&mut engine, Point::new(0.0, 0.0), Point::new(50.0, 50.0));

        let red = SerializableColor::new(255, 0, 0, 255);
        let outcome = engine
            .update_style(StyleProp::Fill, StyleValue::Color(red))
            .unwrap();
        assert_eq!(outcome, StyleOutcome::Applied);

        // One undo steps back over the restyle, a second over the add.
        assert!(engine.undo());
        let id = engine.scene().object_ids()[0];
        let SceneObject::Rect(rect) = engine.scene().get(id).unwrap() else {
            panic!()
        };
        assert_eq!(rect.style.fill, None);
        assert!(engine.undo());
        assert!(engine.scene().is_empty());
    }

    #[test]
    fn test_style_update_without_selection_is_noop() {
        let mut engine = Engine::new(800.0, 600.0);
        let outcome = engine
            .update_style(StyleProp::Opacity, StyleValue::Number(0.5))
            .unwrap();
        assert_eq!(outcome, StyleOutcome::NoSelection);
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_arrow_coupling_through_engine() {
        let mut engine = Engine::new(800.0, 600.0);
        engine.set_pending_shape(Some(PendingShape::Arrow));
        engine.on_pointer_down(Point::new(0.0, 0.0));
        let id = engine.on_pointer_up(Point::new(100.0, 0.0)).unwrap();

        let blue = SerializableColor::new(0, 0, 255, 255);
        engine
            .update_style(StyleProp::Stroke, StyleValue::Color(blue))
            .unwrap();

        let SceneObject::Arrow(arrow) = engine.scene().get(id).unwrap() else {
            panic!("expected arrow");
        };
        assert_eq!(arrow.head.fill, arrow.stroke);
        assert_eq!(arrow.stroke, blue);
    }

    #[test]
    fn test_click_place_coalesces_with_restyle() {
        let mut engine = Engine::new(800.0, 600.0);
        engine.set_pending_shape(Some(PendingShape::Star));
        engine.on_pointer_down(Point::new(200.0, 200.0));

        // Restyle before the debounce elapses, then settle.
        let red = SerializableColor::new(255, 0, 0, 255);
        engine
            .update_style(StyleProp::Fill, StyleValue::Color(red))
            .unwrap();
        engine.tick(Instant::now() + SNAPSHOT_DEBOUNCE);

        // One snapshot for add+restyle: a single undo empties the scene.
        assert!(engine.undo());
        assert!(engine.scene().is_empty());
    }

    #[test]
    fn test_delete_selected_bulk() {
        let mut engine = Engine::new(800.0, 600.0);
        let a = drag_rect(&mut engine, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = drag_rect(&mut engine, Point::new(50.0, 50.0), Point::new(70.0, 70.0));

        engine.select(a);
        engine.selection.push(b);
        engine.delete_selected();

        assert!(engine.scene().is_empty());
        assert!(engine.selection().is_empty());

        assert!(engine.undo());
        assert_eq!(engine.scene().len(), 2);
    }

    #[test]
    fn test_delete_with_empty_selection_is_noop() {
        let mut engine = Engine::new(800.0, 600.0);
        drag_rect(&mut engine, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        engine.clear_selection();
        let before = engine.scene().serialize();
        engine.delete_selected();
        assert_eq!(engine.scene().serialize(), before);
    }

    #[test]
    fn test_nudge_moves_selection() {
        let mut engine = Engine::new(800.0, 600.0);
        let id = drag_rect(&mut engine, Point::new(10.0, 10.0), Point::new(20.0, 20.0));
        engine.nudge_selected(5.0, -2.0);

        let SceneObject::Rect(rect) = engine.scene().get(id).unwrap() else {
            panic!()
        };
        assert_eq!(rect.position, Point::new(15.0, 8.0));
    }

    #[test]
    fn test_background_restored_by_undo() {
        let mut engine = Engine::new(800.0, 600.0);
        engine.set_background_color("#112233");
        assert_eq!(engine.scene().background_css(), "#112233");

        assert!(engine.undo());
        assert_eq!(engine.scene().background_css(), DEFAULT_BACKGROUND);

        assert!(engine.redo());
        assert_eq!(engine.scene().background_css(), "#112233");
    }

    #[test]
    fn test_new_scene_resets_history() {
        let mut engine = Engine::new(800.0, 600.0);
        drag_rect(&mut engine, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        engine.new_scene(640.0, 480.0);

        assert!(engine.scene().is_empty());
        assert_eq!(engine.scene().width, 640.0);
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
    }

    #[test]
    fn test_reset_scene_preserves_dimensions_and_color() {
        let mut engine = Engine::new(800.0, 600.0);
        engine.set_background_color("#445566");
        engine.set_background_image(&DecodedImage::solid(4, 4, [9, 9, 9, 255]));
        drag_rect(&mut engine, Point::new(0.0, 0.0), Point::new(10.0, 10.0));

        engine.reset_scene();

        assert!(engine.scene().is_empty());
        assert_eq!(engine.scene().width, 800.0);
        // Background image dropped, last chosen color restored.
        assert_eq!(
            engine.scene().background,
            Background::Color("#445566".into())
        );
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_image_placement_flow() {
        let mut engine = Engine::new(1920.0, 1080.0);
        engine.set_pending_image_url(Some("mem:pic".into()));

        let request = engine.on_pointer_down(Point::new(5.0, 5.0)).unwrap();
        let id = engine
            .complete_image_placement(request.token, Ok(DecodedImage::solid(192, 108, [1, 2, 3, 255])))
            .unwrap()
            .unwrap();

        assert_eq!(engine.selection(), &[id]);
        let SceneObject::Image(img) = engine.scene().get(id).unwrap() else {
            panic!()
        };
        assert!((img.common.scale - 10.0).abs() < f64::EPSILON);

        assert!(engine.undo());
        assert!(engine.scene().is_empty());
    }

    #[test]
    fn test_image_decode_failure_surfaced() {
        let mut engine = Engine::new(800.0, 600.0);
        engine.set_pending_image_url(Some("mem:broken".into()));
        let request = engine.on_pointer_down(Point::new(5.0, 5.0)).unwrap();

        let result = engine.complete_image_placement(
            request.token,
            Err(DecodeError::Malformed("bad header".into())),
        );
        assert!(matches!(result, Err(EngineError::ImageDecode(_))));
        assert!(engine.scene().is_empty());
    }

    #[test]
    fn test_font_change_defers_until_ready() {
        let mut engine = Engine::new(800.0, 600.0);
        let id = engine.add_text(Point::new(100.0, 100.0));

        let outcome = engine
            .update_style(StyleProp::FontFamily, StyleValue::Text("Noto Sans".into()))
            .unwrap();
        let StyleOutcome::AwaitingFont { token } = outcome else {
            panic!("expected deferral");
        };

        // Not applied yet.
        let SceneObject::TextBox(text) = engine.scene().get(id).unwrap() else {
            panic!()
        };
        assert_ne!(text.font_family, "Noto Sans");

        assert_eq!(engine.complete_font_ready(token), StyleOutcome::Applied);
        let SceneObject::TextBox(text) = engine.scene().get(id).unwrap() else {
            panic!()
        };
        assert_eq!(text.font_family, "Noto Sans");
    }

    #[test]
    fn test_stale_font_token_dropped() {
        let mut engine = Engine::new(800.0, 600.0);
        engine.add_text(Point::new(0.0, 0.0));

        let StyleOutcome::AwaitingFont { token: first } = engine
            .update_style(StyleProp::FontFamily, StyleValue::Text("A".into()))
            .unwrap()
        else {
            panic!()
        };
        let StyleOutcome::AwaitingFont { token: second } = engine
            .update_style(StyleProp::FontFamily, StyleValue::Text("B".into()))
            .unwrap()
        else {
            panic!()
        };

        assert_eq!(engine.complete_font_ready(first), StyleOutcome::NoSelection);
        assert_eq!(engine.complete_font_ready(second), StyleOutcome::Applied);

        let id = engine.scene().object_ids()[0];
        let SceneObject::TextBox(text) = engine.scene().get(id).unwrap() else {
            panic!()
        };
        assert_eq!(text.font_family, "B");
    }

    #[test]
    fn test_persistence_roundtrip() {
        let store = std::sync::Arc::new(MemoryStore::new());

        struct Shared(std::sync::Arc<MemoryStore>);
        impl KeyValueStore for Shared {
            fn put(&self, key: &str, value: &str) -> crate::storage::StorageResult<()> {
                self.0.put(key, value)
            }
            fn get(&self, key: &str) -> crate::storage::StorageResult<Option<String>> {
                self.0.get(key)
            }
        }

        let mut first = Engine::with_store(800.0, 600.0, Box::new(Shared(store.clone())));
        drag_rect(&mut first, Point::new(10.0, 10.0), Point::new(60.0, 40.0));
        first.set_background_color("#abcdef");

        let second = Engine::with_store(800.0, 600.0, Box::new(Shared(store)));
        assert_eq!(second.scene().len(), 1);
        assert_eq!(second.scene().background_css(), "#abcdef");
        // Seeding counts as snapshot #0, not an undoable edit.
        assert!(!second.can_undo());
    }

    #[test]
    fn test_malformed_persisted_scene_starts_fresh() {
        let store = MemoryStore::new();
        store.put(SCENE_KEY, "{definitely not json").unwrap();

        let engine = Engine::with_store(800.0, 600.0, Box::new(store));
        assert!(engine.scene().is_empty());
        assert_eq!(engine.scene().width, 800.0);
    }
}
