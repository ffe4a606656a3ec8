//! Pointer-driven interaction state machine.
//!
//! Turns drag/click gestures into committed scene objects. The controller
//! owns the "pending tool" state handed to it by the UI and mutates the
//! scene during drags; history bookkeeping stays with the engine, which maps
//! each [`PointerOutcome`] to the right snapshot policy.

use crate::decode::{DecodeError, DecodedImage, RequestToken};
use crate::objects::{
    Arrow, Ellipse, ImageObject, Line, ObjectId, PathShape, Polygon, Rect, SceneObject, Triangle,
};
use crate::scene::Scene;
use kurbo::Point;

/// Shape kinds the UI can arm for the next canvas click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingShape {
    Rect,
    Ellipse,
    Triangle,
    Line,
    Arrow,
    Star,
    Heart,
    Hexagon,
}

impl PendingShape {
    /// Drag-kind shapes are sized by a press-drag-release gesture;
    /// click-to-place kinds materialize at the click point immediately.
    pub fn is_drag(self) -> bool {
        matches!(
            self,
            PendingShape::Rect
                | PendingShape::Ellipse
                | PendingShape::Triangle
                | PendingShape::Line
                | PendingShape::Arrow
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Rect,
    Ellipse,
    Triangle,
    Line,
    Arrow,
}

#[derive(Debug, Clone, Copy)]
enum ControllerState {
    Idle,
    Dragging {
        mode: DragMode,
        start: Point,
        live: ObjectId,
    },
}

/// An asynchronous image placement request handed back to the caller, who
/// resolves it through an image decoder and reports the result via
/// [`InteractionController::complete_image_placement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub token: RequestToken,
    pub url: String,
}

/// What a pointer event did.
#[derive(Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing for this controller (selection/move belongs to the retained
    /// canvas).
    Ignored,
    /// A provisional object was created; no commit yet.
    DragStarted(ObjectId),
    /// An object was committed; snapshot now.
    Committed(ObjectId),
    /// An object was committed through the canvas add-event path; snapshot
    /// after the coalescing delay.
    CommittedDeferred(ObjectId),
    /// An image placement is waiting on a decode.
    ImageRequested(ImageRequest),
}

/// Pointer-event state machine.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: ControllerState,
    pending_shape: Option<PendingShape>,
    pending_image_url: Option<String>,
    next_token: RequestToken,
    active_request: Option<ImageRequest>,
}

impl Default for ControllerState {
    fn default() -> Self {
        ControllerState::Idle
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or clear) the shape to place on the next canvas click.
    pub fn set_pending_shape(&mut self, shape: Option<PendingShape>) {
        self.pending_shape = shape;
    }

    /// Arm (or clear) the image to place on the next canvas click.
    ///
    /// Changing the URL supersedes any decode still in flight: its token is
    /// forgotten, so a late completion is discarded.
    pub fn set_pending_image_url(&mut self, url: Option<String>) {
        if self.active_request.as_ref().is_some_and(|r| Some(&r.url) != url.as_ref()) {
            log::debug!("interaction: superseding in-flight image request");
            self.active_request = None;
        }
        self.pending_image_url = url;
    }

    pub fn pending_shape(&self) -> Option<PendingShape> {
        self.pending_shape
    }

    pub fn pending_image_url(&self) -> Option<&str> {
        self.pending_image_url.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ControllerState::Dragging { .. })
    }

    pub fn on_pointer_down(&mut self, scene: &mut Scene, point: Point) -> PointerOutcome {
        if self.is_dragging() {
            return PointerOutcome::Ignored;
        }

        if let Some(shape) = self.pending_shape {
            if shape.is_drag() {
                let (mode, live) = self.begin_drag(scene, shape, point);
                self.state = ControllerState::Dragging {
                    mode,
                    start: point,
                    live,
                };
                return PointerOutcome::DragStarted(live);
            }
            // Click-to-place kinds materialize immediately.
            let object = match shape {
                PendingShape::Star => SceneObject::Polygon(Polygon::star(point)),
                PendingShape::Hexagon => SceneObject::Polygon(Polygon::hexagon(point)),
                PendingShape::Heart => SceneObject::PathShape(PathShape::heart(point)),
                _ => unreachable!("drag kinds handled above"),
            };
            let id = scene.add(object);
            self.pending_shape = None;
            return PointerOutcome::CommittedDeferred(id);
        }

        if let Some(url) = self.pending_image_url.clone() {
            self.next_token += 1;
            let request = ImageRequest {
                token: self.next_token,
                url,
            };
            self.active_request = Some(request.clone());
            return PointerOutcome::ImageRequested(request);
        }

        PointerOutcome::Ignored
    }

    pub fn on_pointer_move(&mut self, scene: &mut Scene, point: Point) {
        let ControllerState::Dragging { mode, start, live } = self.state else {
            return;
        };
        update_drag_geometry(scene, mode, live, start, point);
    }

    pub fn on_pointer_up(&mut self, scene: &mut Scene, point: Point) -> PointerOutcome {
        let ControllerState::Dragging { mode, start, live } = self.state else {
            return PointerOutcome::Ignored;
        };
        update_drag_geometry(scene, mode, live, start, point);

        let id = if mode == DragMode::Arrow {
            // The provisional line is only a preview; the committed object is
            // the arrow composite. Zero-length drags are kept as degenerate
            // arrows rather than rejected.
            scene.remove(live);
            scene.add(SceneObject::Arrow(Arrow::new(start, point)))
        } else {
            live
        };

        self.state = ControllerState::Idle;
        self.pending_shape = None;
        PointerOutcome::Committed(id)
    }

    /// Abort an in-progress drag, discarding the provisional object.
    pub fn cancel_drag(&mut self, scene: &mut Scene) {
        if let ControllerState::Dragging { live, .. } = self.state {
            scene.remove(live);
        }
        self.state = ControllerState::Idle;
    }

    /// Report the result of an image decode started by `on_pointer_down`.
    ///
    /// Stale tokens (superseded by a newer request or a cleared pending URL)
    /// are dropped; the newest request wins. A decode failure is surfaced to
    /// the caller rather than silently ending the placement.
    pub fn complete_image_placement(
        &mut self,
        scene: &mut Scene,
        token: RequestToken,
        result: Result<DecodedImage, DecodeError>,
    ) -> Result<Option<ObjectId>, DecodeError> {
        match &self.active_request {
            Some(request) if request.token == token => {}
            _ => {
                log::warn!("interaction: dropping stale image decode (token {token})");
                return Ok(None);
            }
        }
        self.active_request = None;
        self.pending_image_url = None;

        let image = result?;

        // Cover policy: the image fully covers the canvas, overflowing on at
        // most one axis, centered.
        let scale = (scene.width / image.width.max(1) as f64)
            .max(scene.height / image.height.max(1) as f64);
        let center = Point::new(scene.width / 2.0, scene.height / 2.0);
        let mut object = ImageObject::from_decoded(center, &image);
        object.common.scale = scale;
        Ok(Some(scene.add(SceneObject::Image(object))))
    }

    fn begin_drag(
        &mut self,
        scene: &mut Scene,
        shape: PendingShape,
        point: Point,
    ) -> (DragMode, ObjectId) {
        // Provisional objects start degenerate, anchored at the press point.
        let (mode, object) = match shape {
            PendingShape::Rect => (
                DragMode::Rect,
                SceneObject::Rect(Rect::new(point, 0.0, 0.0)),
            ),
            PendingShape::Ellipse => (
                DragMode::Ellipse,
                SceneObject::Ellipse(Ellipse::new(point, 0.0, 0.0)),
            ),
            PendingShape::Triangle => (
                DragMode::Triangle,
                SceneObject::Triangle(Triangle::new(point, 0.0, 0.0)),
            ),
            PendingShape::Line => (
                DragMode::Line,
                SceneObject::Line(Line::new(point, point)),
            ),
            PendingShape::Arrow => (
                DragMode::Arrow,
                SceneObject::Line(Line::new(point, point)),
            ),
            _ => unreachable!("click-to-place kinds never start a drag"),
        };
        (mode, scene.add(object))
    }
}

/// Recompute provisional geometry from the press point and the current
/// pointer position.
fn update_drag_geometry(
    scene: &mut Scene,
    mode: DragMode,
    live: ObjectId,
    start: Point,
    current: Point,
) {
    let Some(object) = scene.get_mut(live) else {
        return;
    };
    match (mode, object) {
        (DragMode::Rect, SceneObject::Rect(rect)) => {
            let sized = Rect::from_corners(start, current);
            rect.position = sized.position;
            rect.width = sized.width;
            rect.height = sized.height;
        }
        (DragMode::Triangle, SceneObject::Triangle(tri)) => {
            let sized = Triangle::from_corners(start, current);
            tri.position = sized.position;
            tri.width = sized.width;
            tri.height = sized.height;
        }
        (DragMode::Ellipse, SceneObject::Ellipse(ellipse)) => {
            let sized = Ellipse::from_corners(start, current);
            ellipse.center = sized.center;
            ellipse.radius_x = sized.radius_x;
            ellipse.radius_y = sized.radius_y;
        }
        (DragMode::Line | DragMode::Arrow, SceneObject::Line(line)) => {
            line.start = start;
            line.end = current;
        }
        _ => {}
    }
}
