//! Snapline Replay
//!
//! Loads a scene, drags one of its elements along a recorded path and
//! reports what the guideline engine did on every tick.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use snapline_core::shapes::Shape;
use snapline_core::snap::ConfigError;
use snapline_core::{
    DistanceGuideline, GeometrySource, Guideline, GuidelineEngine, ShapeStore, SnappingConfigUpdate,
};
use std::path::Path;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scene: {0}")]
    Scene(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Drag refers to element {index} but the scene has {count} elements")]
    UnknownElement { index: usize, count: usize },
}

/// Screen size used to derive the visible region for grid snapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneElement {
    pub shape: Shape,
    #[serde(default)]
    pub locked: bool,
}

/// A recorded drag: proposed top-left positions, one per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drag {
    /// Index into `Scene::elements`.
    pub element: usize,
    pub path: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub viewport: Option<Viewport>,
    /// Partial config applied on top of the defaults.
    #[serde(default)]
    pub config: Option<SnappingConfigUpdate>,
    pub elements: Vec<SceneElement>,
    pub drag: Drag,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Outcome of one movement tick.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayTick {
    pub tick: usize,
    pub proposed: Point,
    pub corrected: Point,
    pub guidelines: Vec<Guideline>,
    pub distance_guidelines: Vec<DistanceGuideline>,
}

/// Run the scene's drag through a fresh engine.
///
/// The scene config is applied first, then `config_override`. Each corrected
/// position is written back to the store before the next tick, the way an
/// editor applies it to the dragged shape.
pub fn replay(scene: Scene, config_override: Option<SnappingConfigUpdate>) -> Result<Vec<ReplayTick>, ReplayError> {
    let count = scene.elements.len();
    let mut store = ShapeStore::new();
    if let Some(viewport) = scene.viewport {
        store.set_viewport(viewport.width, viewport.height);
    }

    let mut dragged = None;
    for (index, element) in scene.elements.into_iter().enumerate() {
        let added = store.add_shape(element.shape);
        store.set_locked(added.id, element.locked);
        if index == scene.drag.element {
            dragged = Some(added);
        }
    }
    let Some(dragged) = dragged else {
        return Err(ReplayError::UnknownElement {
            index: scene.drag.element,
            count,
        });
    };

    let mut engine = GuidelineEngine::new();
    for update in [scene.config, config_override].into_iter().flatten() {
        engine.update_config(update);
    }
    let _subscription = engine.subscribe(|snap| match snap {
        Some(snap) => log::debug!(
            "Guides: {} alignment, {} spacing, target ({:.1}, {:.1})",
            snap.guidelines.len(),
            snap.distance_guidelines.len(),
            snap.target_point.x,
            snap.target_point.y
        ),
        None => log::debug!("Guides cleared"),
    });

    let mut ticks = Vec::with_capacity(scene.drag.path.len());
    for (tick, [x, y]) in scene.drag.path.into_iter().enumerate() {
        let proposed = Point::new(x, y);
        let corrected = engine.resolve(&store, dragged.id, dragged.kind, proposed);
        if !store.move_to(dragged.id, corrected) {
            log::warn!("Dragged element has no geometry at tick {}", tick);
        }

        let (guidelines, distance_guidelines) = engine
            .active_snap()
            .map(|snap| (snap.guidelines.clone(), snap.distance_guidelines.clone()))
            .unwrap_or_default();
        ticks.push(ReplayTick {
            tick,
            proposed,
            corrected,
            guidelines,
            distance_guidelines,
        });
    }
    engine.end_operation();

    log::info!(
        "Replayed {} ticks over {} elements",
        ticks.len(),
        store.elements().len()
    );
    Ok(ticks)
}
