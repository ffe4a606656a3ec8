//! Covercraft Core Library
//!
//! Scene-editing engine for the Covercraft cover composer: object model,
//! pointer interaction state machine, undo/redo history, style
//! reconciliation, and persistence contracts.

pub mod camera;
pub mod decode;
pub mod engine;
pub mod fonts;
pub mod history;
pub mod interaction;
pub mod objects;
pub mod scene;
pub mod storage;
pub mod style;

pub use camera::Camera;
pub use decode::{DecodeError, DecodedImage, ImageDecoder, RequestToken};
pub use engine::{Engine, EngineError};
pub use fonts::{FontWaiter, NoopFontWaiter};
pub use history::{HistoryManager, MAX_HISTORY, SNAPSHOT_DEBOUNCE};
pub use interaction::{ImageRequest, InteractionController, PendingShape};
pub use objects::{ObjectId, SceneObject, SerializableColor};
pub use scene::{Background, Scene, SceneSnapshot};
pub use style::{StyleOutcome, StyleProp, StyleValue};
