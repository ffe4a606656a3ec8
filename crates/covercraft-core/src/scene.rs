//! Scene document: dimensions, background, and the ordered object list.

use crate::decode::DecodedImage;
use crate::objects::{ObjectId, SceneObject};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default background color for new scenes.
pub const DEFAULT_BACKGROUND: &str = "#f5f5f5";

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A background image, pre-rendered at some resolution and cover-scaled to
/// the scene by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixel data, base64-encoded.
    pub data_base64: String,
}

impl BackgroundImage {
    pub fn from_decoded(image: &DecodedImage) -> Self {
        use base64::{Engine, engine::general_purpose::STANDARD};
        Self {
            width: image.width,
            height: image.height,
            data_base64: STANDARD.encode(&image.rgba),
        }
    }

    pub fn rgba(&self) -> Option<Vec<u8>> {
        use base64::{Engine, engine::general_purpose::STANDARD};
        STANDARD.decode(&self.data_base64).ok()
    }
}

/// Scene background: a solid color or a pre-rendered image, mutually
/// exclusive at any instant.
///
/// Color strings are carried verbatim; validity is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Background {
    Color(String),
    Image(BackgroundImage),
}

impl Default for Background {
    fn default() -> Self {
        Background::Color(DEFAULT_BACKGROUND.to_string())
    }
}

/// Errors raised while parsing a serialized snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

/// An immutable, fully self-describing serialization of a [`Scene`] at one
/// point in time. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub version: u32,
    pub width: f64,
    pub height: f64,
    pub background: Background,
    pub objects: Vec<SceneObject>,
}

impl SceneSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot from JSON. All-or-nothing: a value that fails to
    /// parse (or carries an unknown version) yields an error and nothing
    /// else happens.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: SceneSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }
}

/// The full drawable state: intrinsic dimensions, background, and objects in
/// paint order (later = on top).
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Background,
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: Background::default(),
            objects: Vec::new(),
        }
    }

    /// Append an object on top of the paint order.
    ///
    /// Object identity must be unique within the scene; callers create
    /// objects through the variant constructors, which guarantee fresh ids.
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = object.id();
        self.objects.push(object);
        id
    }

    /// Remove an object, returning it if present.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        Some(self.objects.remove(index))
    }

    /// Remove several objects at once (bulk delete).
    pub fn remove_many(&mut self, ids: &[ObjectId]) {
        self.objects.retain(|o| !ids.contains(&o.id()));
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Objects in paint order (back to front).
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object_ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(|o| o.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove all objects, preserving dimensions and background.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn set_background_color(&mut self, color: &str) {
        self.background = Background::Color(color.to_string());
    }

    pub fn set_background_image(&mut self, image: &DecodedImage) {
        self.background = Background::Image(BackgroundImage::from_decoded(image));
    }

    /// The current background color string, or the default when an image is
    /// installed (used for the persisted color entry).
    pub fn background_css(&self) -> &str {
        match &self.background {
            Background::Color(c) => c,
            Background::Image(_) => DEFAULT_BACKGROUND,
        }
    }

    /// Serialize the full scene state.
    pub fn serialize(&self) -> SceneSnapshot {
        SceneSnapshot {
            version: SNAPSHOT_VERSION,
            width: self.width,
            height: self.height,
            background: self.background.clone(),
            objects: self.objects.clone(),
        }
    }

    /// Restore from a snapshot, wholly replacing objects and background.
    /// Never merges with prior state.
    pub fn restore(&mut self, snapshot: &SceneSnapshot) {
        self.width = snapshot.width;
        self.height = snapshot.height;
        self.background = snapshot.background.clone();
        self.objects = snapshot.objects.clone();
    }
}

impl Default for Scene {
    fn default() -> Self {
        // The original cover canvas defaults to full HD.
        Self::new(1920.0, 1080.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Rect;
    use kurbo::Point;

    fn rect_at(x: f64, y: f64) -> SceneObject {
        SceneObject::Rect(Rect::new(Point::new(x, y), 10.0, 10.0))
    }

    #[test]
    fn test_add_remove() {
        let mut scene = Scene::new(100.0, 100.0);
        let id = scene.add(rect_at(0.0, 0.0));
        assert_eq!(scene.len(), 1);
        assert!(scene.remove(id).is_some());
        assert!(scene.is_empty());
        assert!(scene.remove(id).is_none());
    }

    #[test]
    fn test_paint_order_is_insertion_order() {
        let mut scene = Scene::new(100.0, 100.0);
        let a = scene.add(rect_at(0.0, 0.0));
        let b = scene.add(rect_at(5.0, 5.0));
        assert_eq!(scene.object_ids(), vec![a, b]);
    }

    #[test]
    fn test_clear_preserves_dimensions_and_background() {
        let mut scene = Scene::new(640.0, 480.0);
        scene.set_background_color("#112233");
        scene.add(rect_at(0.0, 0.0));
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.width, 640.0);
        assert_eq!(scene.background, Background::Color("#112233".into()));
    }

    #[test]
    fn test_snapshot_roundtrip_preserves_identity() {
        let mut scene = Scene::new(100.0, 100.0);
        let id = scene.add(rect_at(1.0, 2.0));
        let json = scene.serialize().to_json().unwrap();

        let snapshot = SceneSnapshot::from_json(&json).unwrap();
        let mut restored = Scene::new(1.0, 1.0);
        restored.restore(&snapshot);

        assert_eq!(restored.object_ids(), vec![id]);
        assert_eq!(restored.width, 100.0);
    }

    #[test]
    fn test_restore_replaces_rather_than_merges() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.add(rect_at(0.0, 0.0));
        let snapshot = scene.serialize();

        scene.add(rect_at(5.0, 5.0));
        scene.set_background_color("#000000");
        scene.restore(&snapshot);

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.background, Background::default());
    }

    #[test]
    fn test_unknown_snapshot_version_rejected() {
        let mut snapshot = Scene::new(10.0, 10.0).serialize();
        snapshot.version = 99;
        let json = snapshot.to_json().unwrap();
        assert!(matches!(
            SceneSnapshot::from_json(&json),
            Err(SnapshotError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        assert!(SceneSnapshot::from_json("{not json").is_err());
    }
}
